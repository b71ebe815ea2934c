//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 단위 구조체의 연관 함수로 노출합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 해싱, 서버, 데이터베이스, CORS 설정
//! - [`media_config`] - Cloudinary 미디어 호스트 설정
//!
//! 설정 파일은 `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod`로 로드됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, PasswordConfig, CloudinaryConfig};
//!
//! let bind_address = ServerConfig::bind_address();
//! let cost = PasswordConfig::bcrypt_cost();
//! let cloud_name = CloudinaryConfig::cloud_name()?;
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8000"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="videotube"
//! export BCRYPT_COST="12"          # 4-15 범위
//! export CORS_ORIGIN="http://localhost:3000"
//! ```

pub mod data_config;
pub mod media_config;

pub use data_config::*;
pub use media_config::*;
