//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 대시보드는 자체 저장소를 갖지 않습니다. 사용자 데이터는 원격 사용자 API가
//! 소유하며, 이 모듈은 그 API를 `UserRepository` trait 뒤로 감춥니다.
//!
//! # Features
//!
//! - `reqwest` 기반 HTTP 리포지토리
//! - 백엔드 없이 실행하기 위한 메모리 Mock 리포지토리
//! - trait 객체(`Arc<dyn UserRepository>`)를 통한 명시적 주입
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MockUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MockUserRepository::new());
//! let users = user_repo.list_users().await?;
//! ```

pub mod users;
