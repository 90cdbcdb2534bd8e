//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 (쿼리 캐시 우선) | 200 OK |
//! | `GET` | `/users/create` | 새 폼 인스턴스를 열고 빈 폼 렌더링 | 200 OK |
//! | `POST` | `/users/create` | 사용자 생성 폼 제출 | 303 / 409 / 422 / 502 |
//!
//! `GET /users/create`는 [`FormRegistry`](crate::services::users::FormRegistry)에 폼
//! 인스턴스를 열고 그 id를 숨은 `form_id` 필드로 내려보냅니다. `POST`는 같은 id의
//! [`UserFormController`](crate::services::users::UserFormController)로 제출하므로 같은
//! 폼의 두 번째 제출은 첫 제출이 정착될 때까지 `409 Conflict`로 거절됩니다.
//! 컨트롤러가 요청한 이동은 `303 See Other` 리다이렉트가 됩니다.

use std::sync::Arc;
use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse};
use log::{debug, info};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::{AppError, AppState};
use crate::domain::dto::users::request::CreateUserFormData;
use crate::domain::dto::users::response::UserResponse;
use crate::handlers::html_response;
use crate::navigation::USERS_LIST_PATH;
use crate::services::users::{FormSession, SubmitOutcome, USERS_QUERY_KEY};
use crate::views::users::{render_create_user_form, render_users_list};

/// `POST /users/create` 본문
///
/// 폼 값과 함께 `GET /users/create`가 발급한 폼 인스턴스 id를 받습니다.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserSubmission {
    pub form_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl CreateUserSubmission {
    fn into_parts(self) -> (Option<Uuid>, CreateUserFormData) {
        let form_id = Uuid::parse_str(&self.form_id).ok();
        let values = CreateUserFormData {
            name: self.name,
            email: self.email,
            password: self.password,
            password_confirmation: self.password_confirmation,
        };
        (form_id, values)
    }
}

/// 사용자 목록 페이지
///
/// `"users"` 쿼리가 캐시에 있고 무효화되지 않았으면 캐시를 사용하고, 그렇지 않으면
/// 원격 API에서 다시 가져와 캐시에 저장합니다.
///
/// # Errors
///
/// * `AppError::ExternalServiceError` - 원격 목록 조회 실패 (502)
#[get("")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = match state.query_cache.get_fresh::<Vec<UserResponse>>(USERS_QUERY_KEY)? {
        Some(users) => {
            debug!("사용자 목록 캐시 적중: {}명", users.len());
            users
        }
        None => {
            let users = state.user_repo.list_users().await?;
            state.query_cache.store(USERS_QUERY_KEY, &users)?;
            debug!("사용자 목록 재조회: {}명", users.len());
            users
        }
    };

    Ok(html_response(StatusCode::OK, render_users_list(&users)))
}

/// 새 폼 인스턴스를 열고 빈 사용자 생성 폼을 렌더링합니다.
#[get("/create")]
pub async fn new_user_form(state: web::Data<AppState>) -> HttpResponse {
    let (form_id, session) = open_form(&state);
    html_response(
        StatusCode::OK,
        render_create_user_form(form_id, &session.controller.snapshot()),
    )
}

/// 사용자 생성 폼 제출
///
/// 알 수 없거나 만료된 `form_id`로 들어온 제출은 새 폼 인스턴스에서 처리합니다.
///
/// # 응답
///
/// * `303 See Other` + `Location: /users` - 생성 성공. 폼 인스턴스는 닫힙니다.
/// * `409 Conflict` - 같은 폼의 제출이 이미 진행 중
/// * `422 Unprocessable Entity` - 검증 실패, 필드별 에러와 함께 폼을 다시 렌더링
/// * `502 Bad Gateway` - 원격 API 실패, 일반 실패 메시지와 함께 입력값을 유지
#[post("/create")]
pub async fn create_user(
    state: web::Data<AppState>,
    form: web::Form<CreateUserSubmission>,
) -> HttpResponse {
    let (form_id, values) = form.into_inner().into_parts();
    let (form_id, session) = match form_id.and_then(|id| state.forms.get(&id).map(|s| (id, s))) {
        Some(found) => found,
        None => {
            debug!("등록되지 않은 form_id: 새 폼 인스턴스에서 제출합니다");
            open_form(&state)
        }
    };

    match session.controller.submit_values(values).await {
        SubmitOutcome::Created(user) => {
            let location = session
                .navigator
                .current()
                .unwrap_or_else(|| USERS_LIST_PATH.to_string());
            state.forms.close(&form_id);
            info!("사용자 생성 후 이동: id={} -> {}", user.id, location);

            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish()
        }
        SubmitOutcome::Invalid(errors) => {
            debug!("사용자 생성 폼 검증 실패: {:?}", errors.keys().collect::<Vec<_>>());
            render_session(StatusCode::UNPROCESSABLE_ENTITY, form_id, &session)
        }
        SubmitOutcome::Failed(_) => render_session(StatusCode::BAD_GATEWAY, form_id, &session),
        SubmitOutcome::AlreadySubmitting => {
            info!("폼 {}의 제출이 이미 진행 중입니다", form_id);
            render_session(StatusCode::CONFLICT, form_id, &session)
        }
        SubmitOutcome::Discarded => {
            // 제출 도중 닫힌 인스턴스 대신 새 인스턴스를 내려보냅니다.
            let (fresh_id, _) = open_form(&state);
            render_session(StatusCode::OK, fresh_id, &session)
        }
    }
}

/// 공유 협력자로 새 폼 인스턴스를 엽니다.
pub(crate) fn open_form(state: &AppState) -> (Uuid, Arc<FormSession>) {
    state
        .forms
        .open(state.user_repo.clone(), state.query_cache.clone())
}

fn render_session(status: StatusCode, form_id: Uuid, session: &FormSession) -> HttpResponse {
    html_response(status, render_create_user_form(form_id, &session.controller.snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use futures_util::future::join;

    use crate::caching::InMemoryQueryCache;
    use crate::core::AppResult;
    use crate::domain::dto::users::request::CreateUserPayload;
    use crate::repositories::users::{MockUserRepository, UserRepository};
    use crate::routes::configure_all_routes;

    /// 응답 전에 몇 번 양보하는 리포지토리. 두 요청이 같은 제출 구간에서 겹칩니다.
    #[derive(Default)]
    struct SlowRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UserRepository for SlowRepository {
        async fn create_user(&self, payload: &CreateUserPayload) -> AppResult<UserResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            for _ in 0..4 {
                actix_web::rt::task::yield_now().await;
            }

            Ok(UserResponse {
                id: "user-1".to_string(),
                name: payload.user.name.clone(),
                email: payload.user.email.clone(),
                created_at: payload.user.created_at,
            })
        }

        async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
            Ok(Vec::new())
        }
    }

    fn state_with(repo: Arc<MockUserRepository>) -> AppState {
        AppState::new(repo, Arc::new(InMemoryQueryCache::new()))
    }

    fn valid_form() -> [(&'static str, &'static str); 4] {
        [
            ("name", "Ana Souza"),
            ("email", "ana@example.com"),
            ("password", "abc123"),
            ("password_confirmation", "abc123"),
        ]
    }

    async fn body_string(resp: actix_web::dev::ServiceResponse) -> String {
        let body = test::read_body(resp).await;
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_create_form_page() {
        let state = state_with(Arc::new(MockUserRepository::new()));
        let forms = state.forms.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/users/create").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("Criar um usuário"));
        assert!(body.contains("name=\"form_id\""));
        assert_eq!(forms.len(), 1);
    }

    #[actix_web::test]
    async fn test_valid_submission_redirects_to_users_list() {
        let repo = Arc::new(MockUserRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(repo.clone())))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_form(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), USERS_LIST_PATH);
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_users_list_is_refetched_after_creation() {
        let repo = Arc::new(MockUserRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(repo)))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("Nenhum usuário cadastrado."));

        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_form(valid_form())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("Ana Souza"));
    }

    #[actix_web::test]
    async fn test_invalid_submission_rerenders_with_inline_errors() {
        let repo = Arc::new(MockUserRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(repo.clone())))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_form([
                ("name", ""),
                ("email", "ana@example.com"),
                ("password", "abc12"),
                ("password_confirmation", "abc12"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(resp).await;
        assert!(body.contains("id=\"name-error\""));
        assert!(body.contains("id=\"password-error\""));
        assert!(!body.contains("id=\"email-error\""));
        assert!(body.contains("value=\"ana@example.com\""));
        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_remote_failure_shows_generic_message() {
        let repo = Arc::new(MockUserRepository::failing());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(repo)))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_form(valid_form())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body = body_string(resp).await;
        assert!(body.contains("Não foi possível criar o usuário. Tente novamente."));
        assert!(body.contains("value=\"Ana Souza\""));
        assert!(!body.contains("field-error"));
    }

    #[actix_web::test]
    async fn test_list_failure_is_bad_gateway() {
        let repo = Arc::new(MockUserRepository::failing());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(repo)))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    fn submission(form_id: &str) -> [(&'static str, String); 5] {
        [
            ("form_id", form_id.to_string()),
            ("name", "Ana Souza".to_string()),
            ("email", "ana@example.com".to_string()),
            ("password", "abc123".to_string()),
            ("password_confirmation", "abc123".to_string()),
        ]
    }

    #[actix_web::test]
    async fn test_concurrent_submissions_of_one_form_create_once() {
        let repo = Arc::new(SlowRepository::default());
        let state = AppState::new(repo.clone(), Arc::new(InMemoryQueryCache::new()));
        let (form_id, _) = open_form(&state);
        let forms = state.forms.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let first = test::TestRequest::post()
            .uri("/users/create")
            .set_form(submission(&form_id.to_string()))
            .to_request();
        let second = test::TestRequest::post()
            .uri("/users/create")
            .set_form(submission(&form_id.to_string()))
            .to_request();
        let (first, second) = join(
            test::call_service(&app, first),
            test::call_service(&app, second),
        )
        .await;

        let mut statuses = vec![first.status(), second.status()];
        statuses.sort();
        assert_eq!(statuses, vec![StatusCode::SEE_OTHER, StatusCode::CONFLICT]);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
        assert!(forms.get(&form_id).is_none());
    }

    #[actix_web::test]
    async fn test_failed_submission_keeps_form_instance_open() {
        let state = state_with(Arc::new(MockUserRepository::failing()));
        let (form_id, session) = open_form(&state);
        let forms = state.forms.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users/create")
            .set_form(submission(&form_id.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert!(body_string(resp).await.contains(&form_id.to_string()));
        assert!(forms.get(&form_id).is_some());
        assert!(session.controller.is_mounted());
        assert!(!session.controller.is_submitting());
    }
}
