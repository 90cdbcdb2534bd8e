//! # Mock 사용자 리포지토리
//!
//! 백엔드 없이 대시보드를 실행하기 위한 메모리 내 사용자 API입니다.
//! 생성된 사용자는 프로세스가 살아 있는 동안만 유지되며, ID는 UUID v4로 발급됩니다.

use std::sync::{PoisonError, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use log::info;
use uuid::Uuid;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::CreateUserPayload;
use crate::domain::dto::users::response::UserResponse;
use crate::repositories::users::UserRepository;

/// 메모리 내 Mock 사용자 API
#[derive(Debug, Default)]
pub struct MockUserRepository {
    users: RwLock<Vec<UserResponse>>,
    failing: AtomicBool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 호출이 `ExternalServiceError`로 실패하는 리포지토리
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.set_failing(true);
        repo
    }

    /// 원격 장애를 흉내 낼지 설정합니다.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "Mock 사용자 API를 사용할 수 없습니다".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create_user(&self, payload: &CreateUserPayload) -> AppResult<UserResponse> {
        self.check_available()?;

        let record = &payload.user;
        let user = UserResponse {
            id: Uuid::new_v4().to_string(),
            name: record.name.clone(),
            email: record.email.clone(),
            created_at: record.created_at,
        };

        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user.clone());

        info!("🧪 Mock 사용자 생성: id={}", user.id);
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        self.check_available()?;

        Ok(self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
