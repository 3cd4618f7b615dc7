//! MusicStream API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! MongoDB 핸들을 한 번 생성해 라우터에 주입하고, 서버가 멈추면 연결을 닫습니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use musicstream_api::config::{CorsConfig, DatabaseConfig, ServerConfig};
use musicstream_api::db::Database;
use musicstream_api::repositories::CatalogRepository;
use musicstream_api::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    init_logging();
    load_env_file();

    info!("🚀 MusicStream API 시작중...");

    let database = Arc::new(
        Database::connect(&DatabaseConfig::from_env())
            .await
            .map_err(|e| std::io::Error::other(format!("데이터베이스 클라이언트 생성 실패: {}", e)))?,
    );

    let result = start_http_server(database.clone()).await;

    database.shutdown().await;
    info!("👋 MusicStream API 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅 미들웨어를 포함하며 SIGINT/SIGTERM 수신 시 정상 종료됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(database: Arc<Database>) -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();
    let cors_config = CorsConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/", bind_address);
    info!("📍 DB check: http://{}/api/test-db", bind_address);

    let repository: Arc<dyn CatalogRepository> = database;

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(repository.clone()))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 프로필 파일이 없으면 기본 .env 파일을 시도합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    let filename = match profile.as_str() {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    };

    match filename.map(dotenv::from_filename) {
        Some(Ok(_)) => info!("{} 파일 로드 됨", filename.unwrap_or_default()),
        Some(Err(e)) => {
            error!("{} 파일 로드 실패: {}", filename.unwrap_or_default(), e);
            load_default_env_file();
        }
        None => load_default_env_file(),
    }
}

fn load_default_env_file() {
    if dotenv().is_ok() {
        info!("기본 .env 파일 로드");
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ORIGINS`가 없으면 모든 Origin을 허용합니다. 읽기 전용 API이므로
/// `GET`, `OPTIONS`만 허용합니다.
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allows_any_origin() {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
