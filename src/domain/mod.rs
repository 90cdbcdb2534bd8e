//! # Domain Layer Module
//!
//! 사용자 생성 플로우의 데이터 계약과 검증 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── dto          - 폼 데이터, 생성 요청 페이로드, 사용자 응답
//! └── validation   - 검증 스키마 실행 및 필드별 에러 결과
//!      │
//!      ▼
//! Application Layer (Services: 제출 핸들러, 폼 컨트롤러)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories: 원격 사용자 API, Caching: 쿼리 캐시)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::CreateUserFormData;
//! use crate::domain::validation::{validate, Field, ValidationResult};
//!
//! let form = CreateUserFormData::default();
//! if let ValidationResult::Invalid(errors) = validate(&form) {
//!     assert!(errors.contains_key(&Field::Name));
//! }
//! ```

pub mod dto;
pub mod validation;
