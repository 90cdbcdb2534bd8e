//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 기본 URL 정리
//! - [`display_terminal`] - 서버 시작 시 터미널 출력

pub mod string_utils;
pub mod display_terminal;
