//! 테스트용 협력 객체
//!
//! 서비스와 핸들러 테스트에서 MongoDB, Cloudinary 없이 회원가입 흐름을 검증합니다.

use std::path::Path;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    core::errors::{AppError, AppResult},
    domain::entities::users::user::{User, UserProfile},
    repositories::users::user_repo::{UserDirectory, DUPLICATE_USER_MESSAGE},
    services::{
        auth::PasswordEncoder,
        media::{MediaUploader, UploadedMedia},
    },
};

/// 메모리 기반 사용자 디렉터리
///
/// 저장 시 `username`, `email` 유니크 제약을 흉내냅니다.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: Mutex<Vec<User>>,
    drop_read_back: bool,
}

impl InMemoryUserDirectory {
    /// 저장은 되지만 재조회는 항상 `None`을 돌려주는 디렉터리
    pub fn without_read_back() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            drop_read_back: true,
        }
    }

    /// 값 그대로(소문자화 없이) 기존 사용자를 넣습니다.
    pub fn seed(&self, username: &str, email: &str) {
        let mut user = User::new(
            "Existing User".to_string(),
            email.to_string(),
            username,
            "encoded:existing".to_string(),
            "https://media.test/existing.png".to_string(),
            String::new(),
        );
        user.username = username.to_string();
        user.id = Some(ObjectId::new());

        self.users.lock().unwrap().push(user);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> AppResult<Option<User>> {
        Ok(self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == username || user.email == email)
            .cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|existing| existing.username == user.username || existing.email == user.email)
        {
            return Err(AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>> {
        if self.drop_read_back {
            return Ok(None);
        }

        Ok(self.users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id.as_ref() == Some(id))
            .map(|user| UserProfile {
                id: *id,
                full_name: user.full_name.clone(),
                email: user.email.clone(),
                username: user.username.clone(),
                avatar: user.avatar.clone(),
                cover_image: user.cover_image.clone(),
                created_at: user.created_at,
                updated_at: user.updated_at,
            }))
    }
}

/// 호출된 경로를 기록하고 `https://media.test/{파일명}`을 돌려주는 업로더
#[derive(Default)]
pub struct RecordingUploader {
    paths: Mutex<Vec<String>>,
}

impl RecordingUploader {
    pub fn call_count(&self) -> usize {
        self.paths.lock().unwrap().len()
    }

    pub fn uploaded_paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for RecordingUploader {
    async fn upload(&self, local_path: &Path) -> AppResult<UploadedMedia> {
        self.paths
            .lock()
            .unwrap()
            .push(local_path.display().to_string());

        let file_name = local_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(UploadedMedia::from_url(format!("https://media.test/{}", file_name)))
    }
}

/// 항상 실패하는 업로더
pub struct FailingUploader;

#[async_trait]
impl MediaUploader for FailingUploader {
    async fn upload(&self, _local_path: &Path) -> AppResult<UploadedMedia> {
        Err(AppError::ExternalServiceError("media host unavailable".to_string()))
    }
}

/// `encoded:{원문}` 형태로 인코딩하는 인코더
pub struct PlainPasswordEncoder;

#[async_trait]
impl PasswordEncoder for PlainPasswordEncoder {
    async fn encode(&self, raw_password: &str) -> AppResult<String> {
        Ok(format!("encoded:{}", raw_password))
    }
}
