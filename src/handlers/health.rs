//! # Health Check Handlers
//!
//! 서비스 루트와 API 루트의 헬스체크 엔드포인트입니다.
//! 데이터베이스에 접근하지 않으므로 저장소 상태와 무관하게 항상 같은 응답을 반환합니다.
//!
//! ```bash
//! curl http://localhost:8000/
//! curl http://localhost:8000/api/
//! ```
//!
//! ```json
//! { "message": "MusicStream API is running", "status": "healthy" }
//! ```

use actix_web::{get, HttpResponse};

use crate::domain::dto::HealthResponse;

/// `GET /`
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::running())
}

/// `GET /api/` (및 `/api`)
///
/// 두 경로에 등록되므로 라우트 매크로 없이 `web::resource`로 연결합니다.
pub async fn api_root() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::running())
}
