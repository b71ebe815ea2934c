//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 엔티티와, 민감 필드를 제외한
//! 조회 전용 프로젝션 엔티티를 정의합니다.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// BSON 필드명은 camelCase(`fullName`, `coverImage`, `refreshToken` ...)로 저장됩니다.
/// `username`은 항상 소문자로 저장되며, `username`/`email`은 유니크 인덱스로 보호됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 전체 이름
    pub full_name: String,
    /// 이메일 (unique)
    pub email: String,
    /// 사용자명 (unique, 소문자)
    pub username: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    /// 아바타 이미지 URL (미디어 호스트)
    pub avatar: String,
    /// 커버 이미지 URL, 업로드하지 않은 경우 빈 문자열
    #[serde(default)]
    pub cover_image: String,
    /// 리프레시 토큰 (회원가입 시점에는 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `username`은 여기서 소문자로 정규화됩니다.
    /// `password_hash`는 이미 해시된 값이어야 합니다.
    pub fn new(
        full_name: String,
        email: String,
        username: &str,
        password_hash: String,
        avatar: String,
        cover_image: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            full_name,
            email,
            username: username.to_lowercase(),
            password: password_hash,
            avatar,
            cover_image,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 민감 정보를 제외한 사용자 프로젝션
///
/// 조회 시 [`UserProfile::projection`]을 적용해 `password`와 `refreshToken`을
/// 읽어오지 않습니다. 타입 자체에 해당 필드가 없으므로 응답으로 새어나갈 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub avatar: String,
    #[serde(default)]
    pub cover_image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl UserProfile {
    /// `-password -refreshToken` 프로젝션
    pub fn projection() -> Document {
        doc! { "password": 0, "refreshToken": 0 }
    }
}
