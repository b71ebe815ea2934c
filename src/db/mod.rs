//! Database Connection Management Module
//!
//! MongoDB 연결을 만들고 리포지토리에 넘겨줄 핸들을 제공합니다.
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::new().await?);
//! let user_repo = MongoUserRepository::new(database.clone());
//! user_repo.create_indexes().await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `Client`는 내부적으로 커넥션 풀을 가지므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로 MongoDB 연결을 생성합니다.
    ///
    /// `ping` 명령으로 연결 상태를 검증한 뒤 반환합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "videotube")
    pub async fn new() -> Result<Self, mongodb::error::Error> {
        Self::connect(&DatabaseConfig::uri(), DatabaseConfig::database_name()).await
    }

    /// 지정한 URI와 데이터베이스 이름으로 연결합니다.
    pub async fn connect(uri: &str, database_name: String) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("user_registration".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 컬렉션 접근용 `mongodb::Database`
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
