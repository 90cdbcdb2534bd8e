//! # User Data Transfer Objects Module
//!
//! 사용자 생성 폼과 원격 사용자 API 사이의 데이터 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                    # 폼 → 원격 API
//! │   └── create_user_request.rs # 폼 데이터, 생성 요청 페이로드
//! └── response/                   # 원격 API → 대시보드
//!     └── user_response.rs       # 사용자 레코드, 생성/목록 응답
//! ```
//!
//! ## 전송 형식
//!
//! ```json
//! // POST /users 요청
//! { "user": { "name": "Ana", "email": "ana@example.com",
//!             "password": "abc123", "password_confirmation": "abc123",
//!             "created_at": "2024-05-01T12:30:00Z" } }
//!
//! // POST /users 응답
//! { "user": { "id": "1", "name": "Ana", "email": "ana@example.com",
//!             "created_at": "2024-05-01T12:30:00Z" } }
//! ```

pub mod request;
pub mod response;
