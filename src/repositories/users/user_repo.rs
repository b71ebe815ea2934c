//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 서비스는 [`UserDirectory`] trait에만 의존하고, MongoDB 구현체
//! [`MongoUserRepository`]는 `main`에서 주입됩니다.
//!
//! ## 특징
//!
//! - **OR 조회**: `username` 또는 `email`이 일치하는 레코드 조회
//! - **프로젝션 조회**: `password`, `refreshToken`을 읽지 않는 ID 조회
//! - **데이터 무결성**: `username`, `email` 유니크 인덱스 관리

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::user::{User, UserProfile},
};

/// 사용자 컬렉션 이름
pub const USER_COLLECTION: &str = "users";

/// 중복 사용자 메시지
///
/// 사전 중복 조회와 유니크 인덱스 위반 모두 같은 메시지를 사용합니다.
pub const DUPLICATE_USER_MESSAGE: &str = "User with email or username already exists";

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 디렉터리 연산
///
/// 존재 여부 조회와 삽입은 하나의 트랜잭션으로 묶이지 않습니다.
/// 동시에 같은 값으로 가입하는 경우 저장소의 유니크 제약이 최종 방어선이며,
/// 구현체는 그 위반을 `AppError::ConflictError`로 돌려줘야 합니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `username` 또는 `email`이 일치하는 사용자를 찾습니다. (값은 전달된 그대로 비교)
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고, ID가 채워진 엔티티를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// ID로 민감 필드를 제외한 프로필을 조회합니다.
    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 인덱스
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), username(unique), createdAt(desc)
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let existing = repo.find_by_username_or_email("johndoe", "john@example.com").await?;
/// ```
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(USER_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 실행합니다.
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성은 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserDirectory for MongoUserRepository {
    async fn find_by_username_or_email(&self, username: &str, email: &str) -> AppResult<Option<User>> {
        self.collection::<User>()
            .find_one(username_or_email_filter(username, email))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(map_insert_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>> {
        self.collection::<UserProfile>()
            .find_one(doc! { "_id": *id })
            .projection(UserProfile::projection())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// `{ $or: [{ username }, { email }] }`
fn username_or_email_filter(username: &str, email: &str) -> mongodb::bson::Document {
    doc! {
        "$or": [
            { "username": username },
            { "email": email },
        ]
    }
}

/// 유니크 인덱스 위반은 CONFLICT, 그 외는 DatabaseError
fn map_insert_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        log::warn!("⚠️ 유니크 인덱스 위반으로 사용자 생성 거부: {}", error);
        return AppError::ConflictError(DUPLICATE_USER_MESSAGE.to_string());
    }

    AppError::DatabaseError(error.to_string())
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
