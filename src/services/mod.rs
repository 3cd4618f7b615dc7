//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 리포지토리에서 읽은 문서를 응답 DTO로 가공합니다.
//! 서비스는 요청마다 주입된 리포지토리로 생성되며 상태를 갖지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::catalog_service::CatalogService;
//!
//! let service = CatalogService::new(repository.into_inner());
//! let users = service.list_users().await?;
//! ```

pub mod catalog_service;

pub use catalog_service::CatalogService;
