//! API 라우트 설정 모듈
//!
//! 헬스체크와 카탈로그 조회 엔드포인트를 등록합니다.
//! 모든 엔드포인트는 `GET`이며 JSON을 반환합니다.
//!
//! | 경로 | 핸들러 |
//! |------|--------|
//! | `/` | [`handlers::health::root`] |
//! | `/api`, `/api/` | [`handlers::health::api_root`] |
//! | `/api/test-db` | [`handlers::catalog::test_database`] |
//! | `/api/users` | [`handlers::catalog::list_users`] |
//! | `/api/music` | [`handlers::catalog::list_music`] |
//!
//! 등록되지 않은 경로는 `404 {"detail": "Not Found"}`를 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let repository: Arc<dyn CatalogRepository> = Arc::new(database);
//! let app = App::new()
//!     .app_data(web::Data::from(repository))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};

use crate::domain::dto::NotFoundResponse;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 카탈로그 핸들러는 `web::Data<dyn CatalogRepository>`가 앱 데이터로
/// 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(handlers::health::root);

    configure_api_routes(cfg);

    cfg.default_service(web::route().to(not_found));
}

/// `/api` 하위 라우트를 설정합니다
fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::resource(["", "/"]).route(web::get().to(handlers::health::api_root)))
            .service(handlers::catalog::test_database)
            .service(handlers::catalog::list_users)
            .service(handlers::catalog::list_music),
    );
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundResponse::new())
}
