//! # 회원가입 요청 DTO
//!
//! `multipart/form-data`로 들어오는 회원가입 요청을 표현합니다.
//!
//! ## 폼 필드
//!
//! | 필드 | 종류 | 필수 |
//! |------|------|------|
//! | `fullName` | 텍스트 | ✓ |
//! | `email` | 텍스트 | ✓ |
//! | `username` | 텍스트 | ✓ |
//! | `password` | 텍스트 | ✓ |
//! | `avatar` | 파일 | ✓ |
//! | `coverImage` | 파일 | |
//!
//! 필드 존재 여부 외의 형식 검증(이메일 형식, 비밀번호 강도 등)은 하지 않습니다.
//! 필수 여부 검사는 서비스 계층에서 이루어지므로 여기서는 모든 필드가 `Option`입니다.
//!
//! ## 파일 수명
//!
//! 업로드된 파일은 `TempFile`로 임시 디렉터리에 저장됩니다.
//! [`RegistrationRequest`]는 경로만 빌려 쓰므로, 폼 값이 살아있는 동안
//! 업로드를 끝내야 합니다. 폼이 drop되면 임시 파일도 삭제됩니다.
//!
//! ```bash
//! curl -X POST http://localhost:8000/api/v1/users/register \
//!   -F fullName="John Doe" \
//!   -F email=john@example.com \
//!   -F username=JohnDoe \
//!   -F password=secret \
//!   -F avatar=@./avatar.png \
//!   -F coverImage=@./cover.png
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};

/// multipart 폼 추출용 구조체
#[derive(Debug, MultipartForm)]
pub struct RegisterUserForm {
    #[multipart(rename = "fullName")]
    pub full_name: Option<Text<String>>,

    pub email: Option<Text<String>>,

    pub username: Option<Text<String>>,

    pub password: Option<Text<String>>,

    /// 첫 번째 파일만 사용합니다.
    pub avatar: Vec<TempFile>,

    /// 첫 번째 파일만 사용합니다.
    #[multipart(rename = "coverImage")]
    pub cover_image: Vec<TempFile>,
}

/// 업로드된 로컬 파일 참조
#[derive(Debug, Clone, PartialEq)]
pub struct FileRef {
    /// 로컬 파일 경로
    pub path: PathBuf,
    /// 클라이언트가 보낸 원본 파일명
    pub file_name: Option<String>,
    /// MIME 타입
    pub content_type: Option<String>,
    /// 바이트 크기
    pub size: usize,
}

impl FileRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_name: None,
            content_type: None,
            size: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 로그용 표현: `avatar.png (image/png, 2048 bytes)`
impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} bytes)",
            self.file_name.as_deref().unwrap_or("<unnamed>"),
            self.content_type.as_deref().unwrap_or("application/octet-stream"),
            self.size
        )
    }
}

impl From<&TempFile> for FileRef {
    fn from(file: &TempFile) -> Self {
        Self {
            path: file.file.path().to_path_buf(),
            file_name: file.file_name.clone(),
            content_type: file.content_type.as_ref().map(|mime| mime.to_string()),
            size: file.size,
        }
    }
}

/// 서비스 계층으로 전달되는 회원가입 요청
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<FileRef>,
    pub cover_image: Option<FileRef>,
}

impl RegistrationRequest {
    /// 폼에서 요청을 만듭니다. 파일은 경로만 복사되며 폼이 계속 소유합니다.
    pub fn from_form(form: &RegisterUserForm) -> Self {
        fn text(field: &Option<Text<String>>) -> Option<String> {
            field.as_ref().map(|value| value.0.clone())
        }

        Self {
            full_name: text(&form.full_name),
            email: text(&form.email),
            username: text(&form.username),
            password: text(&form.password),
            avatar: form.avatar.first().map(FileRef::from),
            cover_image: form.cover_image.first().map(FileRef::from),
        }
    }
}
