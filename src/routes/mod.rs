//! API 라우트 설정 모듈
//!
//! 회원가입 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | [`health_check`] |
//! | `POST` | `/api/v1/users/register` | [`handlers::users::register_user`] |
//!
//! `UserService`는 라우트 설정이 아니라 `App::app_data`로 주입합니다.
//! multipart 필드/크기 제한 실패는 [`multipart_form_config`]가, Content-Type 불일치는
//! 핸들러가 `AppError::ValidationError`로 바꿔 다른 에러와 같은 응답 형식을 유지합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_multipart::form::MultipartFormConfig;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 회원가입은 인증 없이 접근 가능합니다.
///
/// ```bash
/// curl -X POST http://localhost:8000/api/v1/users/register \
///   -F fullName="John Doe" -F email=john@example.com \
///   -F username=JohnDoe -F password=secret \
///   -F avatar=@./avatar.png
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(multipart_form_config())
            .service(handlers::users::register_user)
    );
}

/// multipart 폼 추출 설정
///
/// 잘못된 경계, 필드 파싱 실패, 크기 제한 초과 등은 400 에러 본문으로 응답합니다.
pub fn multipart_form_config() -> MultipartFormConfig {
    MultipartFormConfig::default().error_handler(|err, req| {
        log::warn!("⚠️ multipart 폼 추출 실패: {} {}: {}", req.method(), req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_registration_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "media": "Cloudinary",
///     "dependency_injection": "Constructor"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "media": "Cloudinary",
            "dependency_injection": "Constructor"
        }
    }))
}
