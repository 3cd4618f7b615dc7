//! 카탈로그 조회 서비스
//!
//! 리포지토리에서 읽은 문서를 응답 형태로 가공합니다.
//!
//! - 사용자 문서는 쿼리 단계에서 `password` 필드를 제외합니다.
//! - `_id`는 항상 문자열로 바뀝니다.
//! - 음악 문서의 `uploadedBy`는 값이 있고 참일 때만 문자열로 바뀝니다.
//! - 목록은 최대 [`LIST_LIMIT`]개이며 `count`는 반환된 개수입니다.

use std::sync::Arc;

use futures_util::try_join;
use mongodb::bson::{doc, Document};

use crate::domain::dto::{
    CollectionCounts, DatabaseStatusResponse, MusicResponse, UsersResponse, DEFAULT_SERVER_INFO,
};
use crate::errors::AppResult;
use crate::repositories::{CatalogRepository, Collection};
use crate::utils::bson_utils::{
    document_to_json, stringify_field, stringify_field_if_truthy, to_plain_string,
};

/// 목록 엔드포인트의 최대 문서 수
pub const LIST_LIMIT: i64 = 10;

pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// 진단 명령 후 세 컬렉션의 문서 수를 셉니다.
    ///
    /// `server_info`는 `hello` 응답의 `me` 필드이며, 없으면 `"Connected"`입니다.
    pub async fn database_status(&self) -> AppResult<DatabaseStatusResponse> {
        let hello = self.repository.server_hello().await?;

        let (users, music, playlists) = try_join!(
            self.repository.count(Collection::Users),
            self.repository.count(Collection::Music),
            self.repository.count(Collection::Playlists),
        )?;

        let server_info = hello
            .get("me")
            .map(to_plain_string)
            .unwrap_or_else(|| DEFAULT_SERVER_INFO.to_string());

        Ok(DatabaseStatusResponse::success(
            self.repository.database_name().to_string(),
            CollectionCounts {
                users,
                music,
                playlists,
            },
            server_info,
        ))
    }

    pub async fn list_users(&self) -> AppResult<UsersResponse> {
        let users = self
            .repository
            .find_limited(Collection::Users, Some(doc! { "password": 0 }), LIST_LIMIT)
            .await?
            .into_iter()
            .map(|mut user| {
                stringify_field(&mut user, "_id");
                document_to_json(user)
            })
            .collect();

        Ok(UsersResponse::new(users))
    }

    pub async fn list_music(&self) -> AppResult<MusicResponse> {
        let music = self
            .repository
            .find_limited(Collection::Music, None, LIST_LIMIT)
            .await?
            .into_iter()
            .map(shape_music)
            .collect();

        Ok(MusicResponse::new(music))
    }
}

fn shape_music(mut music: Document) -> serde_json::Value {
    stringify_field(&mut music, "_id");
    stringify_field_if_truthy(&mut music, "uploadedBy");
    document_to_json(music)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::repositories::memory::{FailingRepository, InMemoryCatalogRepository};
    use mongodb::bson::{oid::ObjectId, Bson};
    use serde_json::{json, Value};

    fn service(repository: InMemoryCatalogRepository) -> CatalogService {
        CatalogService::new(Arc::new(repository))
    }

    #[actix_web::test]
    async fn test_empty_database_status() {
        let status = service(InMemoryCatalogRepository::new("musicstream"))
            .database_status()
            .await
            .unwrap();

        assert_eq!(status.status, "success");
        assert_eq!(status.database, "musicstream");
        assert_eq!(
            status.collections,
            CollectionCounts {
                users: 0,
                music: 0,
                playlists: 0
            }
        );
        assert_eq!(status.server_info, "Connected");
    }

    #[actix_web::test]
    async fn test_status_reports_hello_me_and_counts() {
        let repository = InMemoryCatalogRepository::new("catalog")
            .with_hello(doc! { "me": "mongo-0:27017", "ok": 1.0 })
            .with_documents(Collection::Users, vec![doc! { "name": "A" }])
            .with_documents(Collection::Playlists, vec![doc! {}, doc! {}]);

        let status = service(repository).database_status().await.unwrap();

        assert_eq!(status.server_info, "mongo-0:27017");
        assert_eq!(status.collections.users, 1);
        assert_eq!(status.collections.music, 0);
        assert_eq!(status.collections.playlists, 2);
    }

    #[actix_web::test]
    async fn test_users_excluded_password_at_query_level() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let repository = Arc::new(InMemoryCatalogRepository::new("musicstream").with_documents(
            Collection::Users,
            vec![doc! { "_id": id, "password": "p", "name": "A" }],
        ));

        let response = CatalogService::new(repository.clone())
            .list_users()
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "users": [{ "_id": "507f1f77bcf86cd799439011", "name": "A" }], "count": 1 })
        );
        assert_eq!(
            repository.recorded_projections(),
            vec![(Collection::Users, Some(doc! { "password": 0 }))]
        );
    }

    #[actix_web::test]
    async fn test_listings_are_capped() {
        let users = (0..15).map(|i| doc! { "_id": ObjectId::new(), "n": i }).collect();
        let music = (0..12).map(|i| doc! { "_id": ObjectId::new(), "n": i }).collect();
        let svc = service(
            InMemoryCatalogRepository::new("musicstream")
                .with_documents(Collection::Users, users)
                .with_documents(Collection::Music, music),
        );

        let users = svc.list_users().await.unwrap();
        let music = svc.list_music().await.unwrap();

        assert_eq!(users.count, 10);
        assert_eq!(users.users.len(), 10);
        assert_eq!(music.count, 10);
        assert_eq!(music.music.len(), 10);
    }

    #[actix_web::test]
    async fn test_music_uploaded_by_rules() {
        let uploader = ObjectId::new();
        let svc = service(InMemoryCatalogRepository::new("musicstream").with_documents(
            Collection::Music,
            vec![
                doc! { "_id": ObjectId::new(), "title": "Imagine", "uploadedBy": uploader },
                doc! { "_id": ObjectId::new(), "title": "Billie Jean" },
                doc! { "_id": ObjectId::new(), "title": "Hotel California", "uploadedBy": Bson::Null },
            ],
        ));

        let response = svc.list_music().await.unwrap();

        assert_eq!(response.count, 3);
        assert!(response.music.iter().all(|m| m["_id"].is_string()));
        assert_eq!(response.music[0]["uploadedBy"], json!(uploader.to_hex()));
        assert!(response.music[1].get("uploadedBy").is_none());
        assert_eq!(response.music[2]["uploadedBy"], Value::Null);
    }

    #[actix_web::test]
    async fn test_failures_propagate() {
        let svc = CatalogService::new(Arc::new(FailingRepository::new("no reachable servers")));

        assert!(matches!(svc.database_status().await, Err(ApiError::Database(_))));
        assert!(svc.list_users().await.is_err());
        assert!(svc.list_music().await.is_err());
    }
}
