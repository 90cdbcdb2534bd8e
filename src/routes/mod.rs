//! 라우트 설정 모듈
//!
//! 대시보드 페이지와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono::Utc;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_user_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::index)
        .service(handlers::pages::dashboard);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /users` - 사용자 목록
/// - `GET /users/create` - 사용자 생성 폼
/// - `POST /users/create` - 사용자 생성 폼 제출
///
/// ```bash
/// curl -i -X POST http://localhost:8080/users/create \
///   -d 'name=Ana&email=ana@example.com&password=abc123&password_confirmation=abc123'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::new_user_form)
            .service(handlers::users::create_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "dashgo_admin",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "dashgo_admin",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{test, App};

    use crate::caching::InMemoryQueryCache;
    use crate::core::AppState;
    use crate::repositories::users::MockUserRepository;

    #[actix_web::test]
    async fn test_health_check() {
        let state = AppState::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(InMemoryQueryCache::new()),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "dashgo_admin");
    }
}
