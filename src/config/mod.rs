//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버 바인딩, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 데이터베이스
//! export MONGO_URL="mongodb://localhost:27017"
//! export DB_NAME="musicstream"
//!
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8000"
//!
//! # 프론트엔드 Origin (쉼표 구분, 생략 시 전체 허용)
//! export CORS_ORIGINS="http://localhost:3000"
//! ```
//!
//! 값은 `PROFILE`에 따라 `.env.dev`, `.env.prod` 또는 `.env` 파일에서도
//! 읽어올 수 있으며, 이미 설정된 프로세스 환경 변수를 덮어쓰지 않습니다.

pub mod data_config;

pub use data_config::*;
