//! # Configuration Module
//!
//! 대시보드 서버의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 실행 환경, 서버 바인딩, 원격 사용자 API, Rate Limiting 설정
//!
//! ## 프로파일별 `.env` 파일
//!
//! `main`에서 `PROFILE` 환경 변수에 따라 `.env.dev`, `.env.prod` 또는 `.env`를
//! `dotenv`로 먼저 로드한 뒤, 이 모듈의 접근자가 `std::env`에서 값을 읽습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="2"
//!
//! # 원격 사용자 API (미설정 시 Mock API 사용)
//! export API_BASE_URL="http://localhost:3000/api"
//! export API_TIMEOUT_SECS="10"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="50"
//! export RATE_LIMIT_BURST_SIZE="100"
//! ```

pub mod app_config;

pub use app_config::*;
