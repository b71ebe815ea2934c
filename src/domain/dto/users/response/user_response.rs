//! # 사용자 응답 DTO
//!
//! 클라이언트에게 돌려주는 사용자 표현과 공통 응답 래퍼(envelope)를 정의합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::UserProfile;

/// 민감 정보가 제거된 사용자 응답
///
/// ```json
/// {
///   "_id": "507f1f77bcf86cd799439011",
///   "fullName": "John Doe",
///   "email": "john@example.com",
///   "username": "johndoe",
///   "avatar": "http://res.cloudinary.com/demo/image/upload/avatar.png",
///   "coverImage": "",
///   "createdAt": "2024-01-01T00:00:00Z",
///   "updatedAt": "2024-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub avatar: String,
    pub cover_image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            id,
            full_name,
            email,
            username,
            avatar,
            cover_image,
            created_at,
            updated_at,
        } = profile;

        Self {
            id: id.to_hex(),
            full_name,
            email,
            username,
            avatar,
            cover_image,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 공통 응답 래퍼
///
/// `success`는 `status_code`로부터 계산됩니다 (400 미만이면 성공).
/// 본문의 `statusCode`는 전송 계층의 HTTP 상태와 독립적으로 지정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code,
            data,
            message: message.into(),
            success: status_code < 400,
        }
    }
}
