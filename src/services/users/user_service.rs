//! # 사용자 관리 서비스 구현
//!
//! 회원가입의 전체 흐름을 담당하는 비즈니스 로직입니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! RegistrationRequest
//!        │
//!        ▼
//! ┌─────────────────────┐   400 All fields are required
//! │ 1. 필수 필드 검사      │ ─────────────────────────────▶
//! └─────────────────────┘
//!        ▼
//! ┌─────────────────────┐   409 User with email or username already exists
//! │ 2. 중복 사용자 조회    │ ─────────────────────────────▶
//! └─────────────────────┘
//!        ▼
//! ┌─────────────────────┐   400 Avatar file is required
//! │ 3. 아바타 파일 확인    │ ─────────────────────────────▶
//! └─────────────────────┘
//!        ▼
//! ┌─────────────────────┐   업로더 에러 그대로 전파
//! │ 4. 아바타/커버 업로드  │ ─────────────────────────────▶
//! └─────────────────────┘
//!        ▼
//! ┌─────────────────────┐   유니크 인덱스 위반 → 409
//! │ 5. 해싱 후 저장        │ ─────────────────────────────▶
//! └─────────────────────┘
//!        ▼
//! ┌─────────────────────┐   500 Something went wrong while registering the user
//! │ 6. 프로젝션 재조회     │ ─────────────────────────────▶
//! └─────────────────────┘
//!        ▼
//!   UserResponse
//! ```
//!
//! 각 단계는 실패 시 즉시 반환합니다. 재시도나 보상(롤백)은 없습니다.
//! 저장은 성공했는데 재조회가 실패하면 레코드는 남아 있는 채로 500이 반환됩니다.

use std::sync::Arc;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::{FileRef, RegistrationRequest},
            response::UserResponse,
        },
        entities::users::user::User,
    },
    repositories::users::user_repo::{UserDirectory, DUPLICATE_USER_MESSAGE},
    services::{
        auth::PasswordEncoder,
        media::{MediaUploader, UploadedMedia},
    },
    utils::string_utils::require_all,
};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const MISSING_AVATAR_MESSAGE: &str = "Avatar file is required";
pub const READ_BACK_FAILED_MESSAGE: &str = "Something went wrong while registering the user";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 협력 객체는 생성자로 주입됩니다.
///
/// ```rust,ignore
/// let service = UserService::new(
///     Arc::new(MongoUserRepository::new(database)),
///     Arc::new(CloudinaryUploader::from_env()?),
///     Arc::new(BcryptPasswordEncoder::from_config()),
/// );
///
/// let user = service.register_user(request).await?;
/// ```
pub struct UserService {
    user_repo: Arc<dyn UserDirectory>,
    uploader: Arc<dyn MediaUploader>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserDirectory>,
        uploader: Arc<dyn MediaUploader>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            user_repo,
            uploader,
            password_encoder,
        }
    }

    /// 새 사용자 등록
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - `password`, `refreshToken`이 제외된 생성 사용자
    /// * `Err(AppError::ValidationError)` - 필수 필드 또는 아바타 누락
    /// * `Err(AppError::ConflictError)` - 이메일 또는 사용자명 중복
    /// * `Err(AppError::InternalError)` - 저장 후 재조회 실패
    /// * 그 외 - 업로더/저장소가 반환한 에러 그대로
    ///
    /// # 중복 검사
    ///
    /// 조회는 제출된 값 그대로(`username` 소문자화 전) 수행합니다.
    /// 조회와 저장 사이의 경쟁은 저장소의 유니크 인덱스가 막고, 같은 409로 변환됩니다.
    pub async fn register_user(&self, request: RegistrationRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        let RegistrationRequest {
            full_name,
            email,
            username,
            password,
            avatar,
            cover_image,
        } = request;

        log::info!("email: {}", email.as_deref().unwrap_or_default());

        require_all(
            &[
                full_name.as_deref(),
                email.as_deref(),
                username.as_deref(),
                password.as_deref(),
            ],
            MISSING_FIELDS_MESSAGE,
        )?;

        let (Some(full_name), Some(email), Some(username), Some(password)) =
            (full_name, email, username, password)
        else {
            return Err(AppError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()));
        };

        if self.user_repo
            .find_by_username_or_email(&username, &email)
            .await?
            .is_some()
        {
            log::warn!("⚠️ 중복 회원가입 시도: username={}, email={}", username, email);
            return Err(AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string()));
        }

        let avatar = avatar
            .ok_or_else(|| AppError::ValidationError(MISSING_AVATAR_MESSAGE.to_string()))?;

        let avatar = self.upload_file("avatar", &avatar).await?;
        let cover_image_url = match cover_image {
            Some(cover_image) => self.upload_file("coverImage", &cover_image).await?.url,
            None => String::new(),
        };

        let password_hash = self.password_encoder.encode(&password).await?;

        let user = User::new(
            full_name,
            email,
            &username,
            password_hash,
            avatar.url,
            cover_image_url,
        );

        let created_user = self.user_repo.insert(user).await?;
        let user_id = created_user.id.ok_or_else(|| {
            log::error!("❌ 저장된 사용자에 ID가 없습니다: username={}", created_user.username);
            AppError::InternalError(READ_BACK_FAILED_MESSAGE.to_string())
        })?;

        let profile = self.user_repo
            .find_profile_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                log::error!("❌ 사용자 저장 후 재조회 실패: id={}", user_id);
                AppError::InternalError(READ_BACK_FAILED_MESSAGE.to_string())
            })?;

        log::info!(
            "✅ 사용자 등록 완료: id={}, username={} ({:?})",
            user_id,
            profile.username,
            start_time.elapsed()
        );

        Ok(UserResponse::from(profile))
    }

    async fn upload_file(&self, field: &str, file: &FileRef) -> AppResult<UploadedMedia> {
        log::info!("📤 {} 업로드 시작: {}", field, file);
        self.uploader.upload(file.path()).await
    }
}
