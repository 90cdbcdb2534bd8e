//! dashgo. 관리자 대시보드
//!
//! 서버 렌더링 방식의 관리자 대시보드입니다. 핵심 기능은 "사용자 생성" 폼으로,
//! 입력값 검증, 폼 상태 관리, 원격 사용자 API로의 제출을 담당합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers/Views  │ ← 요청 처리, HTML 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 폼 컨트롤러, 제출 핸들러
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 원격 사용자 API (HTTP / Mock)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use dashgo_admin::domain::validation::{validate, Field};
//!
//! let result = validate(&form);
//! if let Some(error) = result.error_for(Field::Email) {
//!     println!("{}", error.message);
//! }
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod navigation;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;
pub mod routes;
pub mod handlers;
