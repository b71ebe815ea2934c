//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 도메인별로 모듈화되어 있으며, 각 서비스는 생성자로 협력 객체를 주입받습니다.
//!
//! - [`users`] - 회원가입
//! - [`auth`] - 비밀번호 인코딩
//! - [`media`] - 외부 미디어 호스트 업로드
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, media::CloudinaryUploader, auth::BcryptPasswordEncoder};
//!
//! let user_service = UserService::new(
//!     directory,
//!     Arc::new(CloudinaryUploader::from_env()?),
//!     Arc::new(BcryptPasswordEncoder::from_config()),
//! );
//! ```

pub mod users;
pub mod auth;
pub mod media;
