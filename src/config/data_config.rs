//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버 바인딩, CORS 관련 설정을 환경 변수에서 읽어옵니다.
//! 설정은 프로세스 시작 시 한 번만 읽습니다.

use std::env;

use log::error;

use crate::utils::string_utils::clean_optional_string;

/// 기본 MongoDB 연결 URL
pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
/// 기본 데이터베이스 이름
pub const DEFAULT_DB_NAME: &str = "musicstream";
/// 기본 드라이버 애플리케이션 이름
pub const DEFAULT_APP_NAME: &str = "musicstream_api";
/// 기본 바인딩 호스트 (모든 인터페이스)
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// 기본 바인딩 포트
pub const DEFAULT_PORT: u16 = 8000;

/// 비어 있는 값은 설정되지 않은 것으로 취급합니다.
fn env_or(key: &str, default: &str) -> String {
    clean_optional_string(env::var(key).ok()).unwrap_or_else(|| default.to_string())
}

/// 데이터베이스 연결 설정
///
/// # Environment Variables
///
/// - `MONGO_URL`: 연결 URL (기본값: `mongodb://localhost:27017`)
/// - `DB_NAME`: 데이터베이스 이름 (기본값: `musicstream`)
/// - `APP_NAME`: 드라이버에 보고할 애플리케이션 이름 (기본값: `musicstream_api`)
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub app_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            mongo_url: env_or("MONGO_URL", DEFAULT_MONGO_URL),
            db_name: env_or("DB_NAME", DEFAULT_DB_NAME),
            app_name: env_or("APP_NAME", DEFAULT_APP_NAME),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            mongo_url: DEFAULT_MONGO_URL.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// 환경 변수에서 바인딩 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 바인딩 호스트 (기본값: "0.0.0.0")
    /// - `PORT`: 바인딩 포트 (기본값: 8000, 파싱 실패 시에도 8000)
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", DEFAULT_HOST),
            port: parse_port(env::var("PORT").ok()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    match clean_optional_string(raw) {
        Some(value) => value.parse::<u16>().unwrap_or_else(|e| {
            error!("PORT 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}

/// CORS 설정
///
/// `CORS_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
/// 프론트엔드는 `REACT_APP_BACKEND_URL`로 다른 Origin에서 API를 호출합니다.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_list(env::var("CORS_ORIGINS").ok().as_deref())
    }

    /// 쉼표로 구분된 Origin 목록을 파싱합니다.
    pub fn from_list(raw: Option<&str>) -> Self {
        let allowed_origins = raw
            .unwrap_or_default()
            .split(',')
            .filter_map(|origin| clean_optional_string(Some(origin.to_string())))
            .collect();

        Self { allowed_origins }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}
