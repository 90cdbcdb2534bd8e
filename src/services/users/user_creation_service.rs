//! # 사용자 생성 제출 핸들러
//!
//! 검증을 통과한 폼 값을 원격 사용자 API로 보내고, 결과에 반응합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! CreateUserFormData (검증 완료)
//!      │  created_at 부여
//!      ▼
//! UserRepository::create_user      ← 유일한 네트워크 호출, 재시도 없음
//!      │
//!      ├─ 성공 → QueryCache::invalidate("users") → UserResponse 반환
//!      │         (이후 폼 컨트롤러가 navigate_to_users_list 호출)
//!      │
//!      └─ 실패 → AppError 그대로 전파 (필드 단위 분해 없음)
//! ```
//!
//! 모든 협력자는 생성자로 주입됩니다.

use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use log::{info, warn};
use validator::Validate;

use crate::caching::query_cache::QueryCache;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{CreateUserFormData, CreateUserPayload};
use crate::domain::dto::users::response::UserResponse;
use crate::navigation::{Navigator, USERS_LIST_PATH};
use crate::repositories::users::UserRepository;

/// 사용자 목록 쿼리의 캐시 키
pub const USERS_QUERY_KEY: &str = "users";

/// 사용자 생성 제출 핸들러
///
/// 폼 인스턴스 하나당 하나씩 만들어 사용하는 것을 전제로 하지만, 내부 상태가 없으므로
/// 여러 폼이 공유해도 됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let service = UserCreationService::new(user_repo, query_cache, navigator);
/// let user = service.create_user(form).await?;
/// service.navigate_to_users_list();
/// ```
pub struct UserCreationService {
    /// 원격 사용자 API
    user_repo: Arc<dyn UserRepository>,

    /// 생성 성공 시 "users" 쿼리를 무효화할 캐시
    query_cache: Arc<dyn QueryCache>,

    /// 생성 성공 후 사용자 목록으로 이동시킬 내비게이터
    navigator: Arc<dyn Navigator>,
}

impl UserCreationService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        query_cache: Arc<dyn QueryCache>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            user_repo,
            query_cache,
            navigator,
        }
    }

    /// 새 사용자를 원격 API에 생성합니다.
    ///
    /// 생성 시각을 덧붙여 `{ user: {...} }` 페이로드로 한 번 호출하며, 성공하면
    /// 사용자 목록 쿼리를 무효화합니다.
    ///
    /// # 인자
    ///
    /// * `form` - 검증을 통과한 폼 값
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 원격 API가 생성한 사용자 레코드
    /// * `Err(AppError::ValidationError)` - 검증되지 않은 값이 전달된 경우 (호출 없음)
    /// * `Err(AppError::ExternalServiceError)` - 원격 API 호출 실패
    pub async fn create_user(&self, form: CreateUserFormData) -> AppResult<UserResponse> {
        form.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let started = Instant::now();
        let payload = CreateUserPayload::new(form, Utc::now());

        let user = match self.user_repo.create_user(&payload).await {
            Ok(user) => user,
            Err(e) => {
                warn!("❌ 사용자 생성 실패: {} ({:?})", e, started.elapsed());
                return Err(e);
            }
        };

        self.query_cache.invalidate(USERS_QUERY_KEY);

        info!("✅ 사용자 생성 완료: id={} ({:?})", user.id, started.elapsed());
        Ok(user)
    }

    /// 사용자 목록 화면으로 이동을 요청합니다.
    pub fn navigate_to_users_list(&self) {
        self.navigator.navigate(USERS_LIST_PATH);
    }
}
