//! # Application Error Handling System
//!
//! 회원가입 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 서비스 계층은 `AppError`를 반환하기만 하고, HTTP 응답으로의 변환은
//! `actix_web::ResponseError` 구현이 한 곳에서 담당합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 아바타 파일 누락 |
//! | `ConflictError` | 409 Conflict | 이메일/사용자명 중복 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 미디어 업로드 실패 |
//! | `InternalError` | 500 Internal Server Error | 저장 후 재조회 실패 등 |
//!
//! ## 에러 응답 형식
//!
//! 성공 응답의 [`ApiResponse`](crate::domain::dto::ApiResponse)와 같은 모양을 유지합니다.
//!
//! ```json
//! {
//!   "statusCode": 409,
//!   "data": null,
//!   "message": "User with email or username already exists",
//!   "success": false
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 클라이언트에게 그대로 노출되는 메시지를 담습니다.
/// `Display` 구현은 로그용으로 분류 접두어를 붙이고,
/// 응답 본문에는 [`AppError::message`]의 원문 메시지만 사용합니다.
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 미디어 호스트 에러 변환
/// client.post(url).send().await
///     .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409 Conflict)
    ///
    /// 사전 중복 조회에서 걸린 경우와, 조회를 통과했지만 유니크 인덱스에
    /// 걸린 경우 모두 이 변형으로 표현됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    ///
    /// 미디어 호스트(Cloudinary) 호출 실패가 여기에 해당합니다.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 분류 접두어가 없는 원문 메시지
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::ConflictError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 분류와 함께 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = AppError::status_code(self);

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "statusCode": status.as_u16(),
                "data": null,
                "message": self.message(),
                "success": false
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let bytes = tokio::fs::read(path).await
///     .with_context(|| format!("업로드 파일 읽기 실패 ({})", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
