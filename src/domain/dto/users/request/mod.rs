//! # 사용자 관련 요청 DTO 모듈
//!
//! "사용자 생성" 폼의 입력값과 원격 API로 보내는 생성 요청 페이로드를 정의합니다.
//!
//! ## 주요 기능
//!
//! - **자동 역직렬화**: `serde`를 통한 urlencoded 폼 / JSON ↔ Rust 타입 변환
//! - **입력 검증**: `validator` derive 속성으로 선언된 필드 규칙
//! - **생성 시각 부여**: 검증된 폼 값에 `created_at`을 덧붙인 전송용 레코드
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use crate::domain::dto::users::request::{CreateUserFormData, CreateUserPayload};
//!
//! let form = CreateUserFormData {
//!     name: "Ana".to_string(),
//!     email: "ana@example.com".to_string(),
//!     password: "abc123".to_string(),
//!     password_confirmation: "abc123".to_string(),
//! };
//! let payload = CreateUserPayload::new(form, Utc::now());
//! ```

pub mod create_user_request;

pub use create_user_request::{
    CreateUserFormData, CreateUserPayload, NewUserRecord, PASSWORD_MIN_LENGTH,
};
