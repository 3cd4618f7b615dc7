//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 핸들러와 서비스는 [`CatalogRepository`] trait을 통해서만 문서 저장소에 접근합니다.
//! 운영 환경에서는 [`Database`](crate::db::Database)가 이 trait을 구현하며,
//! 테스트에서는 메모리 기반 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{CatalogRepository, Collection};
//!
//! let repository: Arc<dyn CatalogRepository> = Arc::new(Database::connect(&config).await?);
//! let total = repository.count(Collection::Music).await?;
//! ```

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::errors::AppResult;

/// 카탈로그 컬렉션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Music,
    Playlists,
}

impl Collection {
    /// MongoDB 컬렉션 이름
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Music => "music",
            Collection::Playlists => "playlists",
        }
    }
}

/// 읽기 전용 카탈로그 저장소
///
/// 모든 메서드는 조회만 수행하며 요청 간에 상태를 공유하지 않습니다.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 연결된 데이터베이스 이름
    fn database_name(&self) -> &str;

    /// 관리용 진단 명령(`hello`)을 실행하고 응답 문서를 반환합니다.
    async fn server_hello(&self) -> AppResult<Document>;

    /// 필터 없이 컬렉션의 전체 문서 수를 셉니다.
    async fn count(&self, collection: Collection) -> AppResult<u64>;

    /// 필터 없이 최대 `limit`개의 문서를 조회합니다.
    ///
    /// `projection`은 쿼리 수준에서 적용됩니다.
    async fn find_limited(
        &self,
        collection: Collection,
        projection: Option<Document>,
        limit: i64,
    ) -> AppResult<Vec<Document>>;
}
