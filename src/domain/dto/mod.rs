//! # Data Transfer Objects
//!
//! 폼 입력과 원격 API 사이에서 주고받는 데이터 구조 모음입니다.
//!
//! - [`users`] - 사용자 생성 요청, 사용자 응답

pub mod users;
