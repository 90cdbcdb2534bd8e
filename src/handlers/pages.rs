//! 정적 페이지 핸들러

use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{get, HttpResponse};

use crate::handlers::html_response;
use crate::navigation::DASHBOARD_PATH;
use crate::views::dashboard::render_dashboard;

/// 루트 경로는 대시보드로 보냅니다.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, DASHBOARD_PATH))
        .finish()
}

#[get("/dashboard")]
pub async fn dashboard() -> HttpResponse {
    html_response(StatusCode::OK, render_dashboard())
}
