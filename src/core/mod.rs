//! # Core Module
//!
//! 애플리케이션 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: `thiserror` 기반 에러 메시지 관리
//!
//! ## 의존성 주입
//!
//! 서비스와 리포지토리는 전역 레지스트리에서 꺼내 쓰지 않습니다.
//! `main`에서 구현체를 만들어 `Arc<dyn Trait>` 형태로 생성자에 넘기고,
//! 핸들러에는 `web::Data`로 공유합니다.
//!
//! ```rust,ignore
//! let directory: Arc<dyn UserDirectory> = Arc::new(MongoUserRepository::new(database));
//! let uploader: Arc<dyn MediaUploader> = Arc::new(CloudinaryUploader::from_env()?);
//! let encoder: Arc<dyn PasswordEncoder> = Arc::new(BcryptPasswordEncoder::from_config());
//!
//! let user_service = web::Data::new(UserService::new(directory, uploader, encoder));
//! App::new().app_data(user_service.clone());
//! ```

pub mod errors;
