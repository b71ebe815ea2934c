//! 인증 및 보안 서비스 모듈
//!
//! 회원가입 시 비밀번호를 저장 가능한 형태로 바꾸는 [`PasswordEncoder`]를 제공합니다.
//! 토큰 발급, 세션 관리는 이 서비스의 범위가 아닙니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{BcryptPasswordEncoder, PasswordEncoder};
//!
//! let encoder: Arc<dyn PasswordEncoder> = Arc::new(BcryptPasswordEncoder::from_config());
//! ```

pub mod password_service;

pub use password_service::*;
