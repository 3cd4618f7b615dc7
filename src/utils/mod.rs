//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 연결 URL 마스킹
//! - [`bson_utils`] - BSON 값의 문자열/JSON 변환

pub mod string_utils;
pub mod bson_utils;
