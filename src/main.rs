//! 사용자 등록 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 협력 객체를 조립합니다.
//! MongoDB 연결과 인덱스를 준비하고, Cloudinary 업로더와 bcrypt 인코더를
//! `UserService`에 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use user_registration_backend::config::{CorsConfig, ServerConfig};
use user_registration_backend::db::Database;
use user_registration_backend::repositories::users::MongoUserRepository;
use user_registration_backend::routes::configure_all_routes;
use user_registration_backend::services::auth::BcryptPasswordEncoder;
use user_registration_backend::services::media::CloudinaryUploader;
use user_registration_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    // .env 파일의 RUST_LOG가 반영되도록 먼저 로드하고, 결과는 로거 준비 후 기록합니다.
    let env_file = load_env_file();
    init_logging();
    log_env_file_load(&env_file);

    info!("🚀 사용자 등록 서비스 시작중...");

    let user_service = build_user_service().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(user_service)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
/// 바인드 주소와 워커 수는 `HOST`, `PORT`, `SERVER_WORKERS`에서 읽습니다.
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Register: http://{}/api/v1/users/register", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(user_service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address.as_str())?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 설정 파일 로드 결과
///
/// 로거 초기화 전에 만들어지므로 직접 로그를 남기지 않고 결과만 담습니다.
#[derive(Debug)]
struct EnvFileLoad {
    profile: String,
    file: &'static str,
    result: Result<(), String>,
}

/// 프로필별 설정 파일 이름
///
/// * `prod` - .env.prod
/// * `dev` - .env.dev
/// * 기타 - .env
fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 파일을 고르며, 기본값은 `dev`입니다.
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> EnvFileLoad {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let file = env_file_for_profile(&profile);

    load_env_file_from(profile, file)
}

fn load_env_file_from(profile: String, file: &'static str) -> EnvFileLoad {
    let result = dotenv::from_filename(file)
        .map(|_| ())
        .map_err(|e| e.to_string());

    EnvFileLoad { profile, file, result }
}

fn log_env_file_load(load: &EnvFileLoad) {
    info!("Current profile: {}", load.profile);

    match &load.result {
        Ok(()) => info!("{} 파일 로드 됨", load.file),
        Err(e) => error!("{} 파일 로드 실패: {}", load.file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결, 인덱스 생성, 협력 객체 조립
///
/// 연결 실패나 필수 설정 누락 시 `std::io::Error`로 변환해 기동을 중단합니다.
async fn build_user_service() -> std::io::Result<UserService> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?);

    info!("✅ 데이터베이스 준비 완료: {}", database.database_name());

    let user_repo = MongoUserRepository::new(database);
    user_repo.create_indexes().await.map_err(|e| {
        error!("❌ 사용자 인덱스 생성 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 사용자 인덱스 준비 완료");

    let uploader = CloudinaryUploader::from_env().map_err(|e| {
        error!("❌ Cloudinary 설정 로드 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let password_encoder = BcryptPasswordEncoder::from_config();
    info!("🔐 bcrypt cost: {}", password_encoder.cost());

    Ok(UserService::new(
        Arc::new(user_repo),
        Arc::new(uploader),
        Arc::new(password_encoder),
    ))
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ORIGIN`(쉼표 구분)에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
