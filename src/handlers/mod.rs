//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ multipart/form-data
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 폼 추출, 응답 래핑          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 회원가입 흐름                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories / Media - MongoDB, Cloudinary    ← Infrastructure
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 받습니다.
//! 에러는 `?`로 `AppError`를 그대로 반환하고, 응답 변환은 `ResponseError` 구현에 맡깁니다.

pub mod users;
