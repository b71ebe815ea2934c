//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 trait으로 연산을 정의하고, 서비스는 `Arc<dyn Trait>`로 주입받습니다.
//! 테스트에서는 메모리 기반 구현으로 교체할 수 있습니다.

pub mod users;
