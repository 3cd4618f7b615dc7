//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 응답 가공                           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 읽기 전용 데이터 접근             ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 의존성 주입
//!
//! 리포지토리는 `main`에서 한 번 생성되어 `web::Data<dyn CatalogRepository>`로
//! 모든 워커에 공유됩니다. 핸들러는 전역 상태에 접근하지 않습니다.
//!
//! ## 모듈 구성
//!
//! - **`health`**: `GET /`, `GET /api/`
//! - **`catalog`**: `GET /api/test-db`, `GET /api/users`, `GET /api/music`

pub mod health;
pub mod catalog;
