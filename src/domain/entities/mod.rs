//! 도메인 엔티티 모듈
//!
//! MongoDB 컬렉션에 직접 매핑되는 영속 엔티티들을 정의합니다.

pub mod users;
