//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 데이터 액세스 핸들러가 공유하는 단일 에러 변환 경계입니다.
//! 모든 실패는 하나의 분류("operation failed")로 취급되며,
//! 전송 계층의 에러 상태 코드 대신 **200 OK + JSON 에러 본문**으로 변환됩니다.
//!
//! 호출자는 HTTP 상태 코드가 아니라 응답 본문의 형태
//! (`"error"` 키 또는 `"status": "error"`)로 실패를 판별해야 합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppResult, BodyEncoded};
//!
//! #[get("/users")]
//! pub async fn list_users(repository: web::Data<dyn CatalogRepository>) -> BodyEncoded<UsersResponse> {
//!     let result: AppResult<UsersResponse> = service.list_users().await;
//!     BodyEncoded::from(result)
//! }
//! ```

use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use log::error;
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 연결 실패, 명령 거부, 잘못된 쿼리 결과를 구분하지 않고 하나로 다룹니다.
/// 메시지는 드라이버가 보고한 원인을 그대로 담습니다.
#[derive(Error, Debug)]
pub enum ApiError {
    /// 데이터베이스 작업 실패
    #[error("{0}")]
    Database(String),
}

impl From<mongodb::error::Error> for ApiError {
    fn from(e: mongodb::error::Error) -> Self {
        ApiError::Database(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, ApiError>;

/// 성공 응답 타입별 에러 본문 형태
///
/// 엔드포인트마다 실패 시 본문 형태가 다르므로
/// (`{"error": ...}` 또는 `{"status": "error", "message": ...}`),
/// 성공 DTO가 자신의 에러 형태를 정의합니다.
pub trait ErrorBody {
    fn error_body(err: &ApiError) -> serde_json::Value;
}

/// 본문 인코딩 에러 응답자
///
/// `AppResult<T>`를 감싸서 성공이든 실패든 항상 200 OK JSON으로 응답합니다.
/// 실패는 이 경계에서 한 번만 로깅됩니다.
#[derive(Debug)]
pub struct BodyEncoded<T>(pub AppResult<T>);

impl<T> From<AppResult<T>> for BodyEncoded<T> {
    fn from(result: AppResult<T>) -> Self {
        BodyEncoded(result)
    }
}

impl<T> Responder for BodyEncoded<T>
where
    T: Serialize + ErrorBody,
{
    type Body = BoxBody;

    fn respond_to(self, req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self.0 {
            Ok(payload) => HttpResponse::Ok().json(payload),
            Err(err) => {
                error!("❌ {} 처리 실패: {}", req.path(), err);
                HttpResponse::Ok().json(T::error_body(&err))
            }
        }
    }
}
