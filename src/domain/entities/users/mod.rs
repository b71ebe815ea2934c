//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! - [`User`](user::User): `users` 컬렉션에 저장되는 전체 레코드
//! - [`UserProfile`](user::UserProfile): `password`, `refreshToken`을 제외한 조회용 프로젝션
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(full_name, email, "JohnDoe", password_hash, avatar_url, String::new());
//! assert_eq!(user.username, "johndoe");
//! ```

pub mod user;

pub use user::{User, UserProfile};
