//! 사용자 등록 서비스 백엔드
//!
//! 아바타/커버 이미지 업로드를 포함한 회원가입 API를 제공합니다.
//! 협력 객체는 모두 생성자로 주입되며, 전역 서비스 레지스트리는 없습니다.
//!
//! # Features
//!
//! - **회원가입**: multipart 폼 기반 사용자 등록
//! - **미디어 업로드**: Cloudinary에 아바타/커버 이미지 업로드
//! - **bcrypt**: 비밀번호 해싱 후 저장
//! - **MongoDB**: 사용자 데이터 영구 저장, 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← multipart 추출 / 응답 래핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 회원가입 흐름
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │  Repositories   │     │  Media Uploader │
//! └─────────────────┘     └─────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │     MongoDB     │     │   Cloudinary    │
//! └─────────────────┘     └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_registration_backend::services::users::UserService;
//!
//! let user_service = UserService::new(directory, uploader, encoder);
//! let user = user_service.register_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
