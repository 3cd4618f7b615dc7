//! 에러 처리 모듈
//!
//! [`errors`] 모듈의 에러 타입과 본문 인코딩 응답자를 재노출합니다.

pub mod errors;

pub use errors::{ApiError, AppResult, BodyEncoded, ErrorBody};
