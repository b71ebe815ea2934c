//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 데이터 구조입니다.
//! 엔티티를 그대로 노출하지 않고, 응답은 항상 DTO로 변환합니다.

pub mod users;

pub use users::*;
