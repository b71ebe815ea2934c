//! 사용자 응답 DTO 모듈
//!
//! 응답에는 `password`, `refreshToken`이 절대 포함되지 않습니다.

pub mod user_response;

pub use user_response::{ApiResponse, UserResponse};
