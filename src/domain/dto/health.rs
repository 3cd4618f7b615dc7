//! 헬스체크 응답 DTO

use serde::Serialize;

/// 고정 헬스체크 응답
///
/// 데이터베이스와 무관하게 항상 같은 본문을 반환합니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub status: &'static str,
}

impl HealthResponse {
    pub const fn running() -> Self {
        Self {
            message: "MusicStream API is running",
            status: "healthy",
        }
    }
}

/// 존재하지 않는 경로에 대한 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub detail: &'static str,
}

impl NotFoundResponse {
    pub const fn new() -> Self {
        Self { detail: "Not Found" }
    }
}
