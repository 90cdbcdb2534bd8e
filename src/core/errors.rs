//! # Application Error Handling System
//!
//! 대시보드 서버와 사용자 생성 플로우 전체에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러에서 `?`로 전파된 에러가 자동으로 HTTP 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! 사용자 생성 플로우에는 서로 겹치지 않는 두 종류의 에러가 존재합니다.
//!
//! 1. **검증 에러**: 네트워크 호출 이전에 로컬에서 감지됩니다. 필드별 인라인 상태
//!    ([`crate::domain::validation::ValidationResult`])로만 표현되며 이 타입으로
//!    전파되지 않습니다.
//! 2. **제출 에러**: 원격 사용자 API에서 발생합니다. 필드 단위로 분해되지 않고
//!    `AppError::ExternalServiceError`로 컨트롤러까지 전파됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 (API 경계) |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ExternalServiceError` | 502 Bad Gateway | 원격 사용자 API 실패 |
//! | `ConfigError` | 500 Internal Server Error | 잘못된 설정값 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn fetch_users(client: &reqwest::Client, url: &str) -> AppResult<Vec<UserResponse>> {
//!     let response = client.get(url).send().await
//!         .map_err(|e| AppError::ExternalServiceError(format!("사용자 목록 요청 실패: {}", e)))?;
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 대시보드에서 발생할 수 있는 모든 전파 가능한 에러를 포괄합니다.
/// 폼 검증 실패는 이 타입이 아니라 인라인 상태로 다뤄집니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // 원격 API 에러 변환
/// client.post(url).json(&payload).send().await
///     .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
///
/// // 설정 에러 변환
/// reqwest::Client::builder().build()
///     .map_err(|e| AppError::ConfigError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 검증되지 않은 요청이 API 경계(예: [`crate::services::users::UserCreationService`])에
    /// 직접 전달된 경우에 사용됩니다. 폼 화면에서는 필드별 메시지로 표시되므로
    /// 이 변형이 사용자에게 노출되는 일은 드뭅니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 외부 서비스 에러
    ///
    /// 원격 사용자 API 호출이 실패했을 때 발생합니다.
    ///
    /// # 발생 시나리오
    /// - 연결 실패 또는 타임아웃
    /// - 2xx가 아닌 응답 상태 코드
    /// - 응답 본문 파싱 실패
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 에러
    ///
    /// 환경 변수 값이 잘못되었거나 HTTP 클라이언트를 구성할 수 없을 때 발생합니다.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 다음과 같은 JSON 형식을 따릅니다:
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let value = serde_json::to_value(&users).context("쿼리 캐시 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
