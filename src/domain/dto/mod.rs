//! # Data Transfer Objects
//!
//! HTTP 응답 본문을 표현하는 DTO 모듈입니다.
//!
//! - [`health`] - 헬스체크 및 404 응답
//! - [`catalog`] - 데이터베이스 진단, 사용자/음악 목록 응답

pub mod health;
pub mod catalog;

pub use health::*;
pub use catalog::*;
