//! # 비밀번호 인코딩 서비스
//!
//! 저장 전에 비밀번호를 해시하는 명시적 단계입니다.
//! 엔티티 저장 과정의 숨은 훅이 아니라, 서비스가 직접 호출하는 의존성으로 주입됩니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 솔트 자동 생성, 적응형 cost
//! - **환경별 Cost**: 개발/테스트(4) vs 스테이징(10) vs 운영(12)
//! - **블로킹 풀 실행**: 해싱은 `web::block`으로 actix 워커 스레드 밖에서 실행됩니다
//!
//! ```rust,ignore
//! let encoder = BcryptPasswordEncoder::from_config();
//! let hash = encoder.encode("secret").await?;
//! ```

use actix_web::web;
use async_trait::async_trait;
use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

/// 비밀번호 해시 연산
#[async_trait]
pub trait PasswordEncoder: Send + Sync {
    /// 평문 비밀번호를 해시합니다.
    async fn encode(&self, raw_password: &str) -> AppResult<String>;
}

/// bcrypt 기반 구현
#[derive(Debug, Clone)]
pub struct BcryptPasswordEncoder {
    cost: u32,
}

impl BcryptPasswordEncoder {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// `PasswordConfig::bcrypt_cost()`를 사용합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

#[async_trait]
impl PasswordEncoder for BcryptPasswordEncoder {
    async fn encode(&self, raw_password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let raw_password = raw_password.to_owned();
        let cost = self.cost;

        let hashed = web::block(move || bcrypt::hash(raw_password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::info!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }
}
