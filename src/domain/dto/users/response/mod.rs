//! # 사용자 관련 응답 DTO 모듈
//!
//! 원격 사용자 API가 돌려주는 응답 구조를 정의합니다.
//!
//! - `UserResponse` - 사용자 레코드 (비밀번호 제외)
//! - `CreateUserResponse` - `{ "user": UserResponse }`
//! - `UserListResponse` - `{ "users": [UserResponse] }`

pub mod user_response;

pub use user_response::{CreateUserResponse, UserListResponse, UserResponse};
