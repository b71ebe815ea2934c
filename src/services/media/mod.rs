//! 미디어 업로드 서비스 모듈
//!
//! 업로드된 로컬 파일을 외부 미디어 호스트에 올리는 [`MediaUploader`] trait과
//! Cloudinary 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::media::{CloudinaryUploader, MediaUploader};
//!
//! let uploader: Arc<dyn MediaUploader> = Arc::new(CloudinaryUploader::from_env()?);
//! let avatar = uploader.upload(Path::new("/tmp/upload-123")).await?;
//! println!("{}", avatar.url);
//! ```

use std::path::Path;
use async_trait::async_trait;
use crate::core::errors::AppResult;

pub mod cloudinary;

pub use cloudinary::CloudinaryUploader;

/// 업로드 결과
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    /// 호스팅 URL (레코드에 저장되는 값)
    pub url: String,
}

impl UploadedMedia {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// 로컬 파일 → 호스팅 URL
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, local_path: &Path) -> AppResult<UploadedMedia>;
}
