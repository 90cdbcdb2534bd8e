//! 원격 사용자 API 리포지토리 모듈
//!
//! [`UserRepository`]는 "사용자 생성"과 "사용자 목록" 두 원격 연산을 정의합니다.
//!
//! - [`HttpUserRepository`](http_user_repo::HttpUserRepository) - `POST/GET {API_BASE_URL}/users`
//! - [`MockUserRepository`](mock_user_repo::MockUserRepository) - 메모리 내 Mock API
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! async fn create(repo: &dyn UserRepository, payload: &CreateUserPayload) -> AppResult<UserResponse> {
//!     repo.create_user(payload).await
//! }
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::CreateUserPayload;
use crate::domain::dto::users::response::UserResponse;

pub mod http_user_repo;
pub mod mock_user_repo;

pub use http_user_repo::HttpUserRepository;
pub use mock_user_repo::MockUserRepository;

/// 원격 사용자 API 추상화
///
/// 요청/응답 스키마 외의 전송 세부사항은 구현체의 관심사입니다.
/// 호출자는 성공 시 생성된 레코드를, 실패 시 `AppError`를 받습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `{ user: {...} }` 페이로드로 사용자를 생성하고 생성된 레코드를 반환합니다.
    async fn create_user(&self, payload: &CreateUserPayload) -> AppResult<UserResponse>;

    /// 사용자 목록을 조회합니다.
    async fn list_users(&self) -> AppResult<Vec<UserResponse>>;
}
