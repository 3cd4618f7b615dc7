//! 카탈로그 조회 응답 DTO
//!
//! 각 DTO는 [`ErrorBody`]를 구현하여 실패 시 본문 형태를 정의합니다.
//!
//! | 엔드포인트 | 성공 | 실패 |
//! |-----------|------|------|
//! | `/api/test-db` | [`DatabaseStatusResponse`] | `{"status": "error", "message": ...}` |
//! | `/api/users` | [`UsersResponse`] | `{"error": ...}` |
//! | `/api/music` | [`MusicResponse`] | `{"error": ...}` |

use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::{ApiError, ErrorBody};

/// 진단 성공 메시지
pub const DATABASE_OK_MESSAGE: &str = "Conexão com MongoDB funcionando!";
/// 진단 실패 메시지 접두어
pub const DATABASE_ERROR_PREFIX: &str = "Erro na conexão";
/// `hello` 응답에 `me`가 없을 때의 서버 정보
pub const DEFAULT_SERVER_INFO: &str = "Connected";

/// 컬렉션별 문서 수
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionCounts {
    pub users: u64,
    pub music: u64,
    pub playlists: u64,
}

/// `/api/test-db` 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseStatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub database: String,
    pub collections: CollectionCounts,
    pub server_info: String,
}

impl DatabaseStatusResponse {
    pub fn success(database: String, collections: CollectionCounts, server_info: String) -> Self {
        Self {
            status: "success",
            message: DATABASE_OK_MESSAGE,
            database,
            collections,
            server_info,
        }
    }
}

impl ErrorBody for DatabaseStatusResponse {
    fn error_body(err: &ApiError) -> Value {
        json!({
            "status": "error",
            "message": format!("{}: {}", DATABASE_ERROR_PREFIX, err),
        })
    }
}

/// `/api/users` 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersResponse {
    pub users: Vec<Value>,
    pub count: usize,
}

impl UsersResponse {
    pub fn new(users: Vec<Value>) -> Self {
        let count = users.len();
        Self { users, count }
    }
}

impl ErrorBody for UsersResponse {
    fn error_body(err: &ApiError) -> Value {
        json!({ "error": err.to_string() })
    }
}

/// `/api/music` 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicResponse {
    pub music: Vec<Value>,
    pub count: usize,
}

impl MusicResponse {
    pub fn new(music: Vec<Value>) -> Self {
        let count = music.len();
        Self { music, count }
    }
}

impl ErrorBody for MusicResponse {
    fn error_body(err: &ApiError) -> Value {
        json!({ "error": err.to_string() })
    }
}
