//! 테스트용 메모리 기반 리포지토리

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};

use super::{CatalogRepository, Collection};
use crate::errors::{ApiError, AppResult};

/// 고정된 문서 집합을 돌려주는 리포지토리
///
/// 제외(`0`) 프로젝션만 지원하며, 전달받은 프로젝션을 기록합니다.
pub struct InMemoryCatalogRepository {
    database_name: String,
    hello: Document,
    collections: HashMap<Collection, Vec<Document>>,
    projections: Mutex<Vec<(Collection, Option<Document>)>>,
}

impl InMemoryCatalogRepository {
    pub fn new(database_name: &str) -> Self {
        Self {
            database_name: database_name.to_string(),
            hello: doc! { "isWritablePrimary": true, "ok": 1.0 },
            collections: HashMap::new(),
            projections: Mutex::new(Vec::new()),
        }
    }

    pub fn with_hello(mut self, hello: Document) -> Self {
        self.hello = hello;
        self
    }

    pub fn with_documents(mut self, collection: Collection, documents: Vec<Document>) -> Self {
        self.collections.insert(collection, documents);
        self
    }

    pub fn recorded_projections(&self) -> Vec<(Collection, Option<Document>)> {
        self.projections.lock().unwrap().clone()
    }
}

fn apply_exclusions(mut document: Document, projection: &Option<Document>) -> Document {
    if let Some(projection) = projection {
        for (key, flag) in projection {
            if matches!(flag, Bson::Int32(0) | Bson::Int64(0) | Bson::Boolean(false)) {
                document.remove(key);
            }
        }
    }
    document
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn server_hello(&self) -> AppResult<Document> {
        Ok(self.hello.clone())
    }

    async fn count(&self, collection: Collection) -> AppResult<u64> {
        Ok(self.collections.get(&collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn find_limited(
        &self,
        collection: Collection,
        projection: Option<Document>,
        limit: i64,
    ) -> AppResult<Vec<Document>> {
        self.projections
            .lock()
            .unwrap()
            .push((collection, projection.clone()));

        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .take(take)
                    .cloned()
                    .map(|d| apply_exclusions(d, &projection))
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// 모든 호출이 실패하는 리포지토리 (연결 불가 상황)
pub struct FailingRepository {
    message: String,
}

impl FailingRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> AppResult<T> {
        Err(ApiError::Database(self.message.clone()))
    }
}

#[async_trait]
impl CatalogRepository for FailingRepository {
    fn database_name(&self) -> &str {
        "musicstream"
    }

    async fn server_hello(&self) -> AppResult<Document> {
        self.fail()
    }

    async fn count(&self, _collection: Collection) -> AppResult<u64> {
        self.fail()
    }

    async fn find_limited(
        &self,
        _collection: Collection,
        _projection: Option<Document>,
        _limit: i64,
    ) -> AppResult<Vec<Document>> {
        self.fail()
    }
}
