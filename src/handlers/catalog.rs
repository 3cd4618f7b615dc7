//! # Catalog Inspection Handlers
//!
//! 문서 저장소를 읽기 전용으로 조회하는 핸들러입니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `/api/test-db` | `{status, message, database, collections, server_info}` | `{status: "error", message}` |
//! | `GET` | `/api/users` | `{users, count}` | `{error}` |
//! | `GET` | `/api/music` | `{music, count}` | `{error}` |
//!
//! 모든 실패는 [`BodyEncoded`] 경계에서 200 OK JSON 본문으로 변환됩니다.
//! 핸들러에는 실패 처리 코드가 없습니다.

use actix_web::{get, web};

use crate::domain::dto::{DatabaseStatusResponse, MusicResponse, UsersResponse};
use crate::errors::BodyEncoded;
use crate::repositories::CatalogRepository;
use crate::services::CatalogService;

/// 데이터베이스 진단 핸들러
///
/// `hello` 명령을 실행한 뒤 `users`, `music`, `playlists` 컬렉션의 문서 수를 셉니다.
///
/// ```bash
/// curl http://localhost:8000/api/test-db
/// ```
///
/// ```json
/// {
///   "status": "success",
///   "message": "Conexão com MongoDB funcionando!",
///   "database": "musicstream",
///   "collections": { "users": 1, "music": 5, "playlists": 2 },
///   "server_info": "localhost:27017"
/// }
/// ```
#[get("/test-db")]
pub async fn test_database(
    repository: web::Data<dyn CatalogRepository>,
) -> BodyEncoded<DatabaseStatusResponse> {
    CatalogService::new(repository.into_inner())
        .database_status()
        .await
        .into()
}

/// 사용자 목록 핸들러
///
/// 최대 10명의 사용자를 반환합니다. `password` 필드는 쿼리 단계에서 제외됩니다.
#[get("/users")]
pub async fn list_users(repository: web::Data<dyn CatalogRepository>) -> BodyEncoded<UsersResponse> {
    CatalogService::new(repository.into_inner())
        .list_users()
        .await
        .into()
}

/// 음악 목록 핸들러
///
/// 최대 10곡을 반환합니다. `uploadedBy`는 값이 있을 때만 문자열로 변환됩니다.
#[get("/music")]
pub async fn list_music(repository: web::Data<dyn CatalogRepository>) -> BodyEncoded<MusicResponse> {
    CatalogService::new(repository.into_inner())
        .list_music()
        .await
        .into()
}
