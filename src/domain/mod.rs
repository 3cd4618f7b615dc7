//! # Domain Layer
//!
//! 응답 DTO를 정의하는 도메인 모듈입니다.
//!
//! 사용자, 음악, 플레이리스트 문서는 외부에서 관리되며 이 서비스는 스키마를 정의하지 않습니다.
//! 문서는 `bson::Document`로 그대로 읽고, 응답 경계에서만 JSON으로 변환합니다.

pub mod dto;
