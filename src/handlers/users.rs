//! # User Registration HTTP Handlers
//!
//! 회원가입 HTTP 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users/register` | 새 사용자 등록 | 201 Created |
//!
//! 핸들러는 multipart 폼을 [`RegistrationRequest`]로 바꿔 서비스에 넘기고,
//! 결과를 [`ApiResponse`]로 감싸는 일만 합니다. 에러 응답은 `AppError`의
//! `ResponseError` 구현이 만듭니다.

use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::dto::users::{
        request::{RegisterUserForm, RegistrationRequest},
        response::ApiResponse,
    },
    services::users::UserService,
};

pub const REGISTERED_MESSAGE: &str = "User registered Successfully";

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/users/register` (`multipart/form-data`)
///
/// # 응답
///
/// ## 성공 (201 Created)
///
/// 전송 상태는 201이지만 본문의 `statusCode`는 200입니다.
///
/// ```json
/// {
///   "statusCode": 200,
///   "data": {
///     "_id": "507f1f77bcf86cd799439011",
///     "fullName": "John Doe",
///     "email": "john@example.com",
///     "username": "johndoe",
///     "avatar": "http://res.cloudinary.com/demo/image/upload/avatar.png",
///     "coverImage": "",
///     "createdAt": "2024-01-01T00:00:00Z",
///     "updatedAt": "2024-01-01T00:00:00Z"
///   },
///   "message": "User registered Successfully",
///   "success": true
/// }
/// ```
///
/// ## 실패 사례
///
/// | 상태 | 메시지 |
/// |------|--------|
/// | 400 | `All fields are required` |
/// | 400 | `Avatar file is required` |
/// | 409 | `User with email or username already exists` |
/// | 500 | `Something went wrong while registering the user` |
#[post("/register")]
pub async fn register_user(
    user_service: web::Data<UserService>,
    form: Result<MultipartForm<RegisterUserForm>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let MultipartForm(form) = form.map_err(form_extraction_error)?;

    // 임시 파일은 form이 drop될 때 삭제되므로 업로드가 끝날 때까지 form을 유지합니다.
    let request = RegistrationRequest::from_form(&form);
    let user = user_service.register_user(request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(200, user, REGISTERED_MESSAGE)))
}

/// multipart 추출 실패를 400 에러로 변환합니다.
///
/// Content-Type 불일치는 `MultipartFormConfig`의 에러 핸들러를 거치지 않으므로 여기서 처리합니다.
/// 에러 핸들러가 이미 `AppError`로 만든 에러는 원문 메시지를 그대로 사용합니다.
fn form_extraction_error(err: actix_web::Error) -> AppError {
    let message = err
        .as_error::<AppError>()
        .map(|app_error| app_error.message().to_string())
        .unwrap_or_else(|| err.to_string());

    log::warn!("⚠️ 회원가입 폼 추출 실패: {}", message);
    AppError::ValidationError(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use crate::services::users::fakes::{InMemoryUserDirectory, PlainPasswordEncoder, RecordingUploader};

    const BOUNDARY: &str = "----registration-test-boundary";

    enum Part<'a> {
        Text(&'a str, &'a str),
        File(&'a str, &'a str, &'a [u8]),
    }

    fn multipart_body(parts: &[Part]) -> Vec<u8> {
        let mut body = Vec::new();

        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File(name, file_name, bytes) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                             Content-Type: image/png\r\n\r\n",
                            name, file_name
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        body
    }

    fn registration_request(parts: &[Part]) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/v1/users/register")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(multipart_body(parts))
    }

    fn user_service(
        directory: Arc<InMemoryUserDirectory>,
        uploader: Arc<RecordingUploader>,
    ) -> web::Data<UserService> {
        web::Data::new(UserService::new(directory, uploader, Arc::new(PlainPasswordEncoder)))
    }

    #[actix_web::test]
    async fn test_register_returns_created_with_envelope() {
        let directory = Arc::new(InMemoryUserDirectory::default());
        let uploader = Arc::new(RecordingUploader::default());
        let app = test::init_service(
            App::new()
                .app_data(user_service(directory.clone(), uploader.clone()))
                .service(web::scope("/api/v1/users").service(register_user)),
        )
        .await;

        let req = registration_request(&[
            Part::Text("fullName", "John Doe"),
            Part::Text("email", "john@example.com"),
            Part::Text("username", "JohnDoe"),
            Part::Text("password", "secret"),
            Part::File("avatar", "avatar.png", b"\x89PNG avatar"),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], REGISTERED_MESSAGE);
        assert_eq!(body["data"]["username"], "johndoe");
        assert_eq!(body["data"]["fullName"], "John Doe");
        assert_eq!(body["data"]["coverImage"], "");
        assert!(body["data"]["avatar"].as_str().unwrap().starts_with("https://media.test/"));
        assert!(body["data"].get("password").is_none());
        assert!(body["data"].get("refreshToken").is_none());

        assert_eq!(uploader.call_count(), 1);
        assert_eq!(directory.users().len(), 1);
    }

    #[actix_web::test]
    async fn test_register_uploads_cover_image_when_present() {
        let directory = Arc::new(InMemoryUserDirectory::default());
        let uploader = Arc::new(RecordingUploader::default());
        let app = test::init_service(
            App::new()
                .app_data(user_service(directory.clone(), uploader.clone()))
                .service(web::scope("/api/v1/users").service(register_user)),
        )
        .await;

        let req = registration_request(&[
            Part::Text("fullName", "Jane Doe"),
            Part::Text("email", "jane@example.com"),
            Part::Text("username", "jane"),
            Part::Text("password", "secret"),
            Part::File("avatar", "avatar.png", b"avatar"),
            Part::File("coverImage", "cover.png", b"cover"),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(uploader.call_count(), 2);
        assert_ne!(directory.users()[0].cover_image, "");
    }

    #[actix_web::test]
    async fn test_register_missing_fields_is_bad_request() {
        let directory = Arc::new(InMemoryUserDirectory::default());
        let uploader = Arc::new(RecordingUploader::default());
        let app = test::init_service(
            App::new()
                .app_data(user_service(directory.clone(), uploader.clone()))
                .service(web::scope("/api/v1/users").service(register_user)),
        )
        .await;

        let req = registration_request(&[
            Part::Text("fullName", "John Doe"),
            Part::Text("username", "JohnDoe"),
            Part::Text("password", "secret"),
            Part::File("avatar", "avatar.png", b"avatar"),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required");
        assert!(body["data"].is_null());
        assert_eq!(uploader.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_register_duplicate_is_conflict() {
        let directory = Arc::new(InMemoryUserDirectory::default());
        directory.seed("taken", "taken@example.com");
        let uploader = Arc::new(RecordingUploader::default());
        let app = test::init_service(
            App::new()
                .app_data(user_service(directory.clone(), uploader.clone()))
                .service(web::scope("/api/v1/users").service(register_user)),
        )
        .await;

        let req = registration_request(&[
            Part::Text("fullName", "Someone"),
            Part::Text("email", "taken@example.com"),
            Part::Text("username", "fresh"),
            Part::Text("password", "secret"),
            Part::File("avatar", "avatar.png", b"avatar"),
        ])
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User with email or username already exists");
        assert_eq!(uploader.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_register_without_multipart_content_type_is_bad_request() {
        let directory = Arc::new(InMemoryUserDirectory::default());
        let uploader = Arc::new(RecordingUploader::default());
        let app = test::init_service(
            App::new()
                .app_data(user_service(directory.clone(), uploader.clone()))
                .service(web::scope("/api/v1/users").service(register_user)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users/register")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"fullName":"John Doe"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
        assert!(directory.users().is_empty());
        assert_eq!(uploader.call_count(), 0);
    }

    #[::core::prelude::v1::test]
    fn test_form_extraction_error_keeps_app_error_message() {
        let err: actix_web::Error = AppError::ValidationError("field too large".to_string()).into();

        let mapped = form_extraction_error(err);

        assert!(matches!(mapped, AppError::ValidationError(ref msg) if msg == "field too large"));
    }
}
