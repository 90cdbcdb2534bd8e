//! # 사용자 생성 폼 인스턴스 레지스트리
//!
//! `GET /users/create`가 폼 인스턴스를 하나 열고, 그 id를 숨은 `form_id` 필드로
//! 내려보냅니다. 같은 id로 들어온 `POST`는 같은 [`UserFormController`]를 다시 쓰므로
//! 진행 중인 제출이 있으면 두 번째 제출은 `AlreadySubmitting`이 됩니다.
//!
//! 열린 인스턴스는 최대 `capacity`개까지 유지됩니다. 넘치면 가장 오래된 인스턴스가
//! 빠지면서 언마운트되고, 그 인스턴스의 늦은 결과는 버려집니다.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use log::debug;
use uuid::Uuid;

use crate::caching::query_cache::QueryCache;
use crate::navigation::RecordingNavigator;
use crate::repositories::users::UserRepository;
use crate::services::users::user_creation_service::UserCreationService;
use crate::services::users::user_form_controller::UserFormController;

/// 기본 최대 폼 인스턴스 수
pub const DEFAULT_FORM_CAPACITY: usize = 256;

/// 열린 폼 인스턴스 하나
pub struct FormSession {
    pub controller: UserFormController,
    /// 컨트롤러가 요청한 이동을 기록합니다.
    pub navigator: Arc<RecordingNavigator>,
}

#[derive(Default)]
struct Sessions {
    by_id: HashMap<Uuid, Arc<FormSession>>,
    order: VecDeque<Uuid>,
}

/// id로 폼 인스턴스를 찾는 레지스트리
pub struct FormRegistry {
    sessions: Mutex<Sessions>,
    capacity: usize,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_FORM_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Mutex::new(Sessions::default()),
            capacity: capacity.max(1),
        }
    }

    fn lock_sessions(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 새 폼 인스턴스를 만들고 등록합니다.
    ///
    /// 인스턴스마다 자기 내비게이터와 제출 핸들러를 가집니다.
    pub fn open(
        &self,
        user_repo: Arc<dyn UserRepository>,
        query_cache: Arc<dyn QueryCache>,
    ) -> (Uuid, Arc<FormSession>) {
        let navigator = Arc::new(RecordingNavigator::new());
        let service = Arc::new(UserCreationService::new(
            user_repo,
            query_cache,
            navigator.clone(),
        ));
        let session = Arc::new(FormSession {
            controller: UserFormController::new(service),
            navigator,
        });

        let id = Uuid::new_v4();
        let evicted = {
            let mut sessions = self.lock_sessions();
            let evicted = if sessions.order.len() >= self.capacity {
                sessions
                    .order
                    .pop_front()
                    .and_then(|oldest| sessions.by_id.remove(&oldest))
            } else {
                None
            };
            sessions.by_id.insert(id, session.clone());
            sessions.order.push_back(id);
            evicted
        };

        if let Some(evicted) = evicted {
            debug!("폼 인스턴스 한도 초과: 가장 오래된 인스턴스를 언마운트합니다");
            evicted.controller.unmount();
        }
        debug!("폼 인스턴스 열림: {}", id);

        (id, session)
    }

    pub fn get(&self, id: &Uuid) -> Option<Arc<FormSession>> {
        self.lock_sessions().by_id.get(id).cloned()
    }

    /// 폼 인스턴스를 닫고 언마운트합니다.
    pub fn close(&self, id: &Uuid) {
        let removed = {
            let mut sessions = self.lock_sessions();
            sessions.order.retain(|open| open != id);
            sessions.by_id.remove(id)
        };

        if let Some(session) = removed {
            session.controller.unmount();
            debug!("폼 인스턴스 닫힘: {}", id);
        }
    }

    pub fn len(&self) -> usize {
        self.lock_sessions().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}
