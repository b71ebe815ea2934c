//! # Media Host Configuration Module
//!
//! 아바타/커버 이미지를 업로드하는 Cloudinary 계정 설정을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export CLOUDINARY_CLOUD_NAME="your-cloud-name"
//! export CLOUDINARY_API_KEY="123456789012345"
//! export CLOUDINARY_API_SECRET="your-api-secret"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! export CLOUDINARY_FOLDER="avatars"                          # 업로드 폴더
//! export CLOUDINARY_API_BASE_URL="https://api.cloudinary.com" # 테스트용 대체 주소
//! export CLOUDINARY_SIGNATURE_ALGORITHM="sha1"                 # sha1(기본) 또는 sha256
//! ```
//!
//! 서명 알고리즘은 Cloudinary 계정 설정과 일치해야 합니다.
//! 계정 기본값은 SHA-1이며, SHA-256은 계정에서 활성화한 경우에만 사용합니다.

use std::env;
use crate::core::errors::{AppError, AppResult};

/// 업로드 요청 서명 알고리즘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    /// Cloudinary 계정 기본값
    #[default]
    Sha1,
    Sha256,
}

impl SignatureAlgorithm {
    /// 문자열에서 알고리즘을 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값인 경우 `Sha1`을 반환합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace('-', "").as_str() {
            "sha256" => SignatureAlgorithm::Sha256,
            _ => SignatureAlgorithm::Sha1,
        }
    }
}

/// Cloudinary 계정 설정
pub struct CloudinaryConfig;

impl CloudinaryConfig {
    pub fn cloud_name() -> AppResult<String> {
        required("CLOUDINARY_CLOUD_NAME")
    }

    pub fn api_key() -> AppResult<String> {
        required("CLOUDINARY_API_KEY")
    }

    pub fn api_secret() -> AppResult<String> {
        required("CLOUDINARY_API_SECRET")
    }

    /// 업로드 대상 폴더 (설정되지 않으면 루트)
    pub fn folder() -> Option<String> {
        env::var("CLOUDINARY_FOLDER")
            .ok()
            .map(|folder| folder.trim().to_string())
            .filter(|folder| !folder.is_empty())
    }

    pub fn api_base_url() -> String {
        env::var("CLOUDINARY_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.cloudinary.com".to_string())
    }

    /// 업로드 서명 알고리즘 (`CLOUDINARY_SIGNATURE_ALGORITHM`, 기본값 sha1)
    pub fn signature_algorithm() -> SignatureAlgorithm {
        env::var("CLOUDINARY_SIGNATURE_ALGORITHM")
            .map(|raw| SignatureAlgorithm::parse(&raw))
            .unwrap_or_default()
    }
}

fn required(key: &str) -> AppResult<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::InternalError(format!("{} must be set", key))),
    }
}
