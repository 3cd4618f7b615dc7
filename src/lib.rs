//! MusicStream API
//!
//! MusicStream MongoDB 카탈로그(사용자, 음악, 플레이리스트)를 읽기 전용으로 조회하는
//! 작은 HTTP 서비스입니다. 쓰기, 인증, 페이징은 제공하지 않습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /, /api/, /api/test-db, /api/users, /api/music
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← BodyEncoded 경계 (실패도 200 JSON)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 식별자 문자열화, 응답 가공
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← CatalogRepository trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← db::Database
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use musicstream_api::{config::DatabaseConfig, db::Database, routes::configure_all_routes};
//! use musicstream_api::repositories::CatalogRepository;
//!
//! let database: Arc<dyn CatalogRepository> =
//!     Arc::new(Database::connect(&DatabaseConfig::from_env()).await?);
//! let app = App::new()
//!     .app_data(web::Data::from(database))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
