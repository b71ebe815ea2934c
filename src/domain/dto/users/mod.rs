//! 사용자 관련 DTO 모듈
//!
//! ```text
//! users/
//! ├── request/   ← multipart 폼, 서비스 입력
//! └── response/  ← 사용자 응답, 공통 응답 래퍼
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
