//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 프로세스 시작 시 한 번 생성되어 라우터에 주입되고, 서버 종료 후 닫힙니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URL
//! export MONGO_URL="mongodb://localhost:27017"
//!
//! # 사용할 데이터베이스 이름
//! export DB_NAME="musicstream"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! // ... 서버 실행 ...
//! database.shutdown().await;
//! ```
//!
//! 연결 생성은 서버 도달 가능 여부를 확인하지 않습니다.
//! 실제 연결은 첫 쿼리가 실행될 때 확인되며, 재시도나 재연결 정책은 없습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, FindOptions};
use mongodb::Client;

use crate::config::DatabaseConfig;
use crate::errors::AppResult;
use crate::repositories::{CatalogRepository, Collection};
use crate::utils::string_utils::redact_connection_url;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트와 데이터베이스 이름을 보관하며,
/// 모든 동시 요청이 읽기 전용으로 공유합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정으로부터 MongoDB 클라이언트를 생성합니다.
    ///
    /// 클라이언트는 지연 연결되므로 데이터베이스가 꺼져 있어도 성공합니다.
    /// `mongodb+srv://` URL은 DNS 조회가 필요하므로 여기서 실패할 수 있습니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&DatabaseConfig::default()).await?;
    /// ```
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_url).await?;

        // 애플리케이션 이름 설정 (서버 로그에서 식별용)
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)?;

        info!(
            "📡 MongoDB 클라이언트 생성: {} (database: {})",
            redact_connection_url(&config.mongo_url),
            config.db_name
        );

        Ok(Self {
            client,
            database_name: config.db_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.get_database().collection::<Document>(collection.name())
    }

    /// `users` 컬렉션
    pub fn users(&self) -> mongodb::Collection<Document> {
        self.collection(Collection::Users)
    }

    /// `music` 컬렉션
    pub fn music(&self) -> mongodb::Collection<Document> {
        self.collection(Collection::Music)
    }

    /// `playlists` 컬렉션
    pub fn playlists(&self) -> mongodb::Collection<Document> {
        self.collection(Collection::Playlists)
    }

    /// MongoDB 클라이언트 인스턴스를 반환합니다.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 클라이언트를 닫습니다.
    ///
    /// 진행 중인 커서와 세션이 모두 정리될 때까지 기다립니다.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
    }
}

#[async_trait]
impl CatalogRepository for Database {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn server_hello(&self) -> AppResult<Document> {
        let reply = self
            .client
            .database("admin")
            .run_command(doc! { "hello": 1 })
            .await?;

        Ok(reply)
    }

    async fn count(&self, collection: Collection) -> AppResult<u64> {
        let total = self.collection(collection).count_documents(doc! {}).await?;
        Ok(total)
    }

    async fn find_limited(
        &self,
        collection: Collection,
        projection: Option<Document>,
        limit: i64,
    ) -> AppResult<Vec<Document>> {
        let options = FindOptions::builder()
            .projection(projection)
            .limit(limit)
            .build();

        let cursor = self
            .collection(collection)
            .find(doc! {})
            .with_options(options)
            .await?;

        let documents = cursor.try_collect::<Vec<Document>>().await?;
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_connect_does_not_require_reachable_server() {
        let config = DatabaseConfig {
            mongo_url: "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200".to_string(),
            ..DatabaseConfig::default()
        };

        let database = Database::connect(&config).await;

        assert!(database.is_ok());
        assert_eq!(database.unwrap().database_name(), "musicstream");
    }

    #[actix_web::test]
    async fn test_unreachable_server_surfaces_error_on_query() {
        let config = DatabaseConfig {
            mongo_url: "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200".to_string(),
            ..DatabaseConfig::default()
        };
        let database = Database::connect(&config).await.unwrap();

        assert!(database.count(Collection::Users).await.is_err());
        assert!(database.server_hello().await.is_err());
    }

    #[actix_web::test]
    async fn test_invalid_url_is_rejected() {
        let config = DatabaseConfig {
            mongo_url: "postgres://localhost".to_string(),
            ..DatabaseConfig::default()
        };

        assert!(Database::connect(&config).await.is_err());
    }
}
