//! # Cloudinary 미디어 업로더
//!
//! 로컬에 저장된 업로드 파일을 Cloudinary에 올리고 호스팅 URL을 돌려받습니다.
//!
//! ## 요청 형식
//!
//! ```text
//! POST {api_base_url}/v1_1/{cloud_name}/auto/upload
//! Content-Type: multipart/form-data
//!
//! file=<bytes> api_key=... timestamp=... [folder=...] signature=sha1(...)
//! ```
//!
//! 서명 문자열은 `file`, `api_key`를 제외한 파라미터를 키 순으로 정렬해
//! `k=v&k=v` 형태로 잇고 API secret을 덧붙인 값입니다.
//! 해시는 계정 기본값인 SHA-1이며, `CLOUDINARY_SIGNATURE_ALGORITHM=sha256`으로 바꿀 수 있습니다.
//!
//! 재시도는 하지 않습니다. 실패는 `AppError::ExternalServiceError`로 그대로 전파됩니다.

use std::path::Path;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};
use sha2::Sha256;
use crate::config::{CloudinaryConfig, SignatureAlgorithm};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use super::{MediaUploader, UploadedMedia};

/// Cloudinary 업로드 API 응답 중 사용하는 필드
#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    url: String,
    #[serde(default)]
    public_id: Option<String>,
}

/// Cloudinary 기반 [`MediaUploader`]
pub struct CloudinaryUploader {
    client: reqwest::Client,
    api_base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: Option<String>,
    signature_algorithm: SignatureAlgorithm,
}

impl CloudinaryUploader {
    pub fn new(
        api_base_url: impl Into<String>,
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: api_base_url.into(),
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            folder: None,
            signature_algorithm: SignatureAlgorithm::default(),
        }
    }

    pub fn with_folder(mut self, folder: Option<String>) -> Self {
        self.folder = folder;
        self
    }

    pub fn with_signature_algorithm(mut self, signature_algorithm: SignatureAlgorithm) -> Self {
        self.signature_algorithm = signature_algorithm;
        self
    }

    /// 환경 변수에서 계정 정보를 읽어 생성합니다.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(
            CloudinaryConfig::api_base_url(),
            CloudinaryConfig::cloud_name()?,
            CloudinaryConfig::api_key()?,
            CloudinaryConfig::api_secret()?,
        )
        .with_folder(CloudinaryConfig::folder())
        .with_signature_algorithm(CloudinaryConfig::signature_algorithm()))
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/auto/upload",
            self.api_base_url.trim_end_matches('/'),
            self.cloud_name
        )
    }

    /// 서명 대상 파라미터 (`file`, `api_key` 제외)
    fn signed_params(&self, timestamp: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![("timestamp", timestamp.to_string())];
        if let Some(folder) = &self.folder {
            params.push(("folder", folder.clone()));
        }
        params
    }
}

/// 업로드 요청 서명
pub(crate) fn sign_params(
    params: &[(&str, String)],
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let payload = format!("{}{}", to_sign, api_secret);
    match algorithm {
        SignatureAlgorithm::Sha1 => format!("{:x}", Sha1::digest(payload.as_bytes())),
        SignatureAlgorithm::Sha256 => format!("{:x}", Sha256::digest(payload.as_bytes())),
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, local_path: &Path) -> AppResult<UploadedMedia> {
        if local_path.as_os_str().is_empty() {
            return Err(AppError::ValidationError("업로드할 파일 경로가 비어 있습니다".to_string()));
        }

        let upload_start = std::time::Instant::now();

        let bytes = tokio::fs::read(local_path)
            .await
            .with_context(|| format!("업로드 파일 읽기 실패 ({})", local_path.display()))?;

        let file_name = local_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let timestamp = chrono::Utc::now().timestamp();
        let params = self.signed_params(timestamp);
        let signature = sign_params(&params, &self.api_secret, self.signature_algorithm);

        let mut form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("api_key", self.api_key.clone())
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }

        let response = self.client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 업로드 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Cloudinary 업로드 실패 ({}): {}", status, error_text
            )));
        }

        let uploaded = response
            .json::<CloudinaryUploadResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 응답 파싱 실패: {}", e)))?;

        log::info!(
            "☁️ 파일 업로드 완료: {} (public_id={}, {:?})",
            uploaded.url,
            uploaded.public_id.as_deref().unwrap_or("-"),
            upload_start.elapsed()
        );

        Ok(UploadedMedia::from_url(uploaded.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_params_sha1_matches_cloudinary_reference() {
        let params = vec![
            ("timestamp", "1315060510".to_string()),
            ("public_id", "sample_image".to_string()),
            ("eager", "w_400,h_300,c_pad|w_260,h_200,c_crop".to_string()),
        ];

        assert_eq!(
            sign_params(&params, "abcd", SignatureAlgorithm::Sha1),
            "bfd09f95f331f558cbd1320e67aa8d488770583e"
        );
    }

    #[test]
    fn test_sign_params_sorts_keys() {
        let params = vec![
            ("timestamp", "1315060510".to_string()),
            ("folder", "avatars".to_string()),
        ];

        assert_eq!(
            sign_params(&params, "abcd", SignatureAlgorithm::Sha1),
            "e49dd65031d5350531757bec7945ea43453c9089"
        );
        assert_eq!(
            sign_params(&params, "abcd", SignatureAlgorithm::Sha256),
            "ea1cd8dadb0a00ab77359a1f0adbcfc3176e3109f3401bd87068a108f2b42878"
        );
    }

    #[test]
    fn test_sign_params_timestamp_only() {
        let params = vec![("timestamp", "1315060510".to_string())];

        assert_eq!(
            sign_params(&params, "abcd", SignatureAlgorithm::Sha1),
            "a21ad0f63beb4de2e5575204b79ab90bffb02c10"
        );
        assert_eq!(
            sign_params(&params, "abcd", SignatureAlgorithm::Sha256),
            "5652e549a70bdc03f73a633a23b7d3f3b067d72fff26dd15b25997f46fdf6439"
        );
    }

    #[test]
    fn test_uploader_defaults_to_sha1() {
        let uploader = CloudinaryUploader::new("https://api.cloudinary.com", "demo", "key", "secret");

        assert_eq!(uploader.signature_algorithm, SignatureAlgorithm::Sha1);

        let uploader = uploader.with_signature_algorithm(SignatureAlgorithm::Sha256);
        assert_eq!(uploader.signature_algorithm, SignatureAlgorithm::Sha256);
    }

    #[test]
    fn test_upload_url_trims_trailing_slash() {
        let uploader = CloudinaryUploader::new("https://api.cloudinary.com/", "demo", "key", "secret");

        assert_eq!(uploader.upload_url(), "https://api.cloudinary.com/v1_1/demo/auto/upload");
    }

    #[test]
    fn test_signed_params_include_folder_when_set() {
        let uploader = CloudinaryUploader::new("https://api.cloudinary.com", "demo", "key", "secret")
            .with_folder(Some("avatars".to_string()));

        let params = uploader.signed_params(42);

        assert!(params.contains(&("timestamp", "42".to_string())));
        assert!(params.contains(&("folder", "avatars".to_string())));
    }

    #[actix_web::test]
    async fn test_empty_path_is_rejected_before_network() {
        let uploader = CloudinaryUploader::new("http://127.0.0.1:9", "demo", "key", "secret");

        let result = uploader.upload(Path::new("")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_missing_file_is_internal_error() {
        let uploader = CloudinaryUploader::new("http://127.0.0.1:9", "demo", "key", "secret");

        let result = uploader
            .upload(Path::new("/definitely/not/here/avatar.png"))
            .await;

        match result {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("업로드 파일 읽기 실패")),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
