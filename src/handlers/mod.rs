//! # HTTP Request Handlers Module
//!
//! 대시보드 페이지 요청을 처리하는 Actix-web 핸들러입니다. 핸들러는
//! [`AppState`](crate::core::AppState)에서 협력자를 꺼내 서비스에 넘기고,
//! 결과를 HTML 응답으로 바꾸는 일만 합니다.
//!
//! ```text
//!   Browser
//!      │ GET/POST (application/x-www-form-urlencoded)
//!      ▼
//!   Handlers (이 모듈)        ← Web Layer
//!      │
//!   Services (폼 컨트롤러, 제출 핸들러)
//!      │
//!   Repositories (원격 사용자 API)
//! ```
//!
//! - [`pages`] - `/`, `/dashboard`
//! - [`users`] - `/users`, `/users/create`

pub mod pages;
pub mod users;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

/// 주어진 상태 코드로 HTML 응답을 만듭니다.
pub(crate) fn html_response(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}
