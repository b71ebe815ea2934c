//! 사용자 관리 서비스 모듈
//!
//! 회원가입 흐름(검증, 중복 조회, 미디어 업로드, 해싱, 저장, 재조회)을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::RegistrationRequest;
//!
//! let user_service = UserService::new(directory, uploader, encoder);
//! let response = user_service.register_user(RegistrationRequest::from_form(&form)).await?;
//! ```

pub mod user_service;

#[cfg(test)]
pub(crate) mod fakes;

pub use user_service::*;
