//! 사용자 요청 DTO 모듈
//!
//! - [`RegisterUserForm`]: multipart 폼 추출용
//! - [`RegistrationRequest`]: 서비스 계층 입력
//! - [`FileRef`]: 업로드된 로컬 파일 참조

pub mod register_user;

pub use register_user::{FileRef, RegisterUserForm, RegistrationRequest};
