//! 애플리케이션 공유 상태
//!
//! 요청 간에 공유되는 협력 객체(원격 사용자 리포지토리, 클라이언트 쿼리 캐시,
//! 열린 폼 인스턴스 레지스트리)를 한 곳에서 생성하고 소유합니다.

use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};

use crate::caching::query_cache::InMemoryQueryCache;
use crate::config::{ApiConfig, ApiMode, Environment};
use crate::core::errors::{AppError, AppResult};
use crate::repositories::users::{HttpUserRepository, MockUserRepository, UserRepository};
use crate::services::users::FormRegistry;

/// 핸들러에 주입되는 공유 상태
#[derive(Clone)]
pub struct AppState {
    /// 원격 사용자 API (생성, 목록 조회)
    pub user_repo: Arc<dyn UserRepository>,

    /// "users" 등 이름 있는 쿼리 결과를 보관하는 클라이언트 캐시
    pub query_cache: Arc<InMemoryQueryCache>,

    /// `form_id`로 찾는 사용자 생성 폼 인스턴스
    pub forms: Arc<FormRegistry>,
}

impl AppState {
    pub fn new(user_repo: Arc<dyn UserRepository>, query_cache: Arc<InMemoryQueryCache>) -> Self {
        Self {
            user_repo,
            query_cache,
            forms: Arc::new(FormRegistry::new()),
        }
    }

    /// 환경 변수 설정으로부터 공유 상태를 구성합니다.
    ///
    /// `API_BASE_URL`이 설정되어 있으면 `reqwest` 기반 HTTP 리포지토리를,
    /// 없으면 메모리 내 Mock 리포지토리를 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - HTTP 클라이언트를 구성할 수 없는 경우
    pub fn from_config() -> AppResult<Self> {
        let user_repo: Arc<dyn UserRepository> = match ApiConfig::mode() {
            ApiMode::Http => {
                let base_url = ApiConfig::base_url().ok_or_else(|| {
                    AppError::ConfigError("API_BASE_URL이 설정되지 않았습니다".to_string())
                })?;
                let timeout = Duration::from_secs(ApiConfig::timeout_secs());

                info!("🔗 원격 사용자 API 사용: {} (timeout {:?})", base_url, timeout);
                Arc::new(HttpUserRepository::new(base_url, timeout)?)
            }
            ApiMode::Mock => {
                if Environment::current() == Environment::Production {
                    warn!("⚠️ 프로덕션 환경에서 Mock 사용자 API가 사용됩니다 (API_BASE_URL 미설정)");
                } else {
                    info!("🧪 Mock 사용자 API 사용");
                }
                Arc::new(MockUserRepository::new())
            }
        };

        Ok(Self::new(user_repo, Arc::new(InMemoryQueryCache::new())))
    }
}
