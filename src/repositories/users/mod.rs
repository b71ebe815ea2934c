//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserDirectory`](user_repo::UserDirectory) trait과 MongoDB 구현체
//! [`MongoUserRepository`](user_repo::MongoUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserDirectory};
//!
//! let user_repo: Arc<dyn UserDirectory> = Arc::new(MongoUserRepository::new(database));
//! let existing = user_repo.find_by_username_or_email("johndoe", "john@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserDirectory};
