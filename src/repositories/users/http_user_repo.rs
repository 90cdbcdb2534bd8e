//! # HTTP 사용자 리포지토리
//!
//! `reqwest`로 원격 사용자 API를 호출합니다.
//!
//! ## 엔드포인트
//!
//! | 연산 | 요청 | 응답 |
//! |------|------|------|
//! | 생성 | `POST {base}/users` + `{ "user": {...} }` | `{ "user": {...} }` |
//! | 목록 | `GET {base}/users` | `{ "users": [...] }` |
//!
//! 자동 재시도는 하지 않습니다. 연결 실패, 2xx가 아닌 상태, 응답 파싱 실패는 모두
//! `AppError::ExternalServiceError`로 변환됩니다.

use std::time::{Duration, Instant};
use async_trait::async_trait;
use log::{debug, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::CreateUserPayload;
use crate::domain::dto::users::response::{CreateUserResponse, UserListResponse, UserResponse};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::normalize_base_url;

/// 원격 사용자 API HTTP 클라이언트
#[derive(Debug, Clone)]
pub struct HttpUserRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserRepository {
    /// 기본 URL과 요청 타임아웃으로 리포지토리를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 기본 URL이 비어 있거나 HTTP 클라이언트 구성에 실패한 경우
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let base_url = normalize_base_url(&base_url.into());
        if base_url.is_empty() {
            return Err(AppError::ConfigError("API 기본 URL이 비어 있습니다".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// 2xx가 아닌 응답을 본문과 함께 에러로 변환합니다.
    async fn ensure_success(
        response: reqwest::Response,
        operation: &str,
    ) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        warn!("❌ 사용자 API {} 실패: {} {}", operation, status, error_text);
        Err(AppError::ExternalServiceError(format!(
            "사용자 API {} 실패 ({}): {}",
            operation, status, error_text
        )))
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn create_user(&self, payload: &CreateUserPayload) -> AppResult<UserResponse> {
        let started = Instant::now();

        let response = self
            .client
            .post(self.users_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("사용자 생성 요청 실패: {}", e)))?;

        let response = Self::ensure_success(response, "사용자 생성").await?;

        let created = response
            .json::<CreateUserResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("사용자 생성 응답 파싱 실패: {}", e)))?;

        debug!("사용자 생성 API 응답: id={} ({:?})", created.user.id, started.elapsed());
        Ok(created.user)
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let response = self
            .client
            .get(self.users_url())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("사용자 목록 요청 실패: {}", e)))?;

        let response = Self::ensure_success(response, "사용자 목록 조회").await?;

        let list = response
            .json::<UserListResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("사용자 목록 응답 파싱 실패: {}", e)))?;

        Ok(list.users)
    }
}
