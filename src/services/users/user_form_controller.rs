//! # 사용자 생성 폼 상태 컨트롤러
//!
//! 폼 입력값을 메모리에 보관하고, 제출 시 검증을 실행하며, 필드별 에러와
//! `is_submitting` 플래그를 관리합니다.
//!
//! ## 상태 전이
//!
//! ```text
//!            set_field
//!          ┌──────────┐
//!          ▼          │
//!       Editing ──────┘
//!          │ submit()
//!          ▼
//!      Validating ── 실패 ──► Editing (필드 에러 설정, 핸들러 호출 없음)
//!          │ 통과
//!          ▼
//!      Submitting ── 원격 실패 ──► Editing (일반 실패 메시지, 입력값 유지)
//!          │ 원격 성공
//!          ▼
//!   Settled(Success) ──► 사용자 목록으로 이동
//! ```
//!
//! ## 동시성 규칙
//!
//! - `Submitting` 동안 들어온 `submit()`은 아무 일도 하지 않습니다. 폼 인스턴스당
//!   진행 중인 제출은 최대 하나입니다.
//! - 상태 잠금은 원격 호출을 기다리는 동안 유지되지 않습니다.
//! - `unmount()` 이후 도착한 결과는 상태에 반영되지 않고 버려지며, 이동도 일어나지 않습니다.
//! - 결과가 오기 전에 `submit()` future가 drop되면 폼은 `Editing`으로 돌아갑니다.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use log::{debug, info, warn};

use crate::domain::dto::users::request::CreateUserFormData;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::validation::{validate, Field, FieldError, FieldErrors, ValidationResult};
use crate::services::users::user_creation_service::UserCreationService;

/// 원격 실패 시 폼에 표시하는 일반 메시지
pub const SUBMISSION_FAILED_MESSAGE: &str = "Não foi possível criar o usuário. Tente novamente.";

/// 제출 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettledOutcome {
    Success,
    Failure,
}

/// 폼의 현재 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Validating,
    Submitting,
    Settled(SettledOutcome),
}

/// `submit()` 한 번의 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 검증 실패. 제출 핸들러는 호출되지 않았습니다.
    Invalid(FieldErrors),
    /// 이미 제출이 진행 중이어서 무시되었습니다.
    AlreadySubmitting,
    /// 원격 API가 사용자를 생성했습니다.
    Created(UserResponse),
    /// 원격 API 호출이 실패했습니다. 폼은 다시 `Editing` 상태입니다.
    Failed(String),
    /// 폼이 언마운트되어 결과가 버려졌습니다.
    Discarded,
}

/// 렌더링용 폼 상태 스냅샷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub phase: FormPhase,
    pub values: CreateUserFormData,
    pub errors: FieldErrors,
    pub is_submitting: bool,
    pub submission_error: Option<String>,
    /// 마지막으로 정착된 제출의 결과. 실패 후에는 `phase`가 `Editing`이어도 `Failure`가 남습니다.
    pub last_outcome: Option<SettledOutcome>,
}

impl FormSnapshot {
    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }
}

#[derive(Debug)]
struct FormState {
    phase: FormPhase,
    values: CreateUserFormData,
    errors: FieldErrors,
    submission_error: Option<String>,
    last_outcome: Option<SettledOutcome>,
    mounted: bool,
}

impl FormState {
    fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }
}

/// `Submitting` 구간을 감싸는 가드
///
/// 결과가 반영되기 전에 `submit()` future가 drop되면(타임아웃, `select!`, 연결 끊김)
/// 폼을 `Editing`으로 되돌려 이후 제출이 막히지 않게 합니다.
struct SubmittingGuard<'a> {
    controller: &'a UserFormController,
    armed: bool,
}

impl<'a> SubmittingGuard<'a> {
    fn new(controller: &'a UserFormController) -> Self {
        Self {
            controller,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let mut state = self.controller.lock_state();
        if state.is_submitting() {
            state.phase = FormPhase::Editing;
            warn!("완료되지 않은 제출이 취소되어 폼을 Editing 상태로 되돌립니다");
        }
    }
}

/// 사용자 생성 폼 컨트롤러
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let controller = UserFormController::new(service);
/// controller.set_field(Field::Name, "Ana");
/// controller.set_field(Field::Email, "ana@example.com");
/// controller.set_field(Field::Password, "abc123");
/// controller.set_field(Field::PasswordConfirmation, "abc123");
///
/// match controller.submit().await {
///     SubmitOutcome::Created(user) => println!("생성됨: {}", user.id),
///     SubmitOutcome::Invalid(errors) => println!("{}개 필드 오류", errors.len()),
///     other => println!("{:?}", other),
/// }
/// ```
pub struct UserFormController {
    service: Arc<UserCreationService>,
    state: Mutex<FormState>,
}

impl UserFormController {
    /// 빈 폼으로 마운트된 컨트롤러를 생성합니다.
    pub fn new(service: Arc<UserCreationService>) -> Self {
        Self::with_values(service, CreateUserFormData::default())
    }

    /// 초기값이 채워진 폼으로 컨트롤러를 생성합니다.
    pub fn with_values(service: Arc<UserCreationService>, values: CreateUserFormData) -> Self {
        Self {
            service,
            state: Mutex::new(FormState {
                phase: FormPhase::Editing,
                values,
                errors: FieldErrors::new(),
                submission_error: None,
                last_outcome: None,
                mounted: true,
            }),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 한 필드의 값만 갱신합니다. 검증은 실행하지 않습니다.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock_state();
        field.assign(&mut state.values, value.into());

        if let FormPhase::Settled(_) = state.phase {
            state.phase = FormPhase::Editing;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.lock_state().is_submitting()
    }

    pub fn phase(&self) -> FormPhase {
        self.lock_state().phase
    }

    pub fn is_mounted(&self) -> bool {
        self.lock_state().mounted
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock_state();
        FormSnapshot {
            phase: state.phase,
            values: state.values.clone(),
            errors: state.errors.clone(),
            is_submitting: state.is_submitting(),
            submission_error: state.submission_error.clone(),
            last_outcome: state.last_outcome,
        }
    }

    /// 폼을 언마운트합니다. 진행 중인 제출의 결과는 버려집니다.
    pub fn unmount(&self) {
        let mut state = self.lock_state();
        state.mounted = false;
        debug!("사용자 생성 폼 언마운트 (submitting={})", state.is_submitting());
    }

    /// 현재 입력값으로 폼을 제출합니다.
    ///
    /// 검증을 통과하면 제출 핸들러를 정확히 한 번 호출합니다. 결과는
    /// [`SubmitOutcome`]으로 돌려주며, 에러가 호출자에게 전파되지 않습니다.
    pub async fn submit(&self) -> SubmitOutcome {
        self.run_submit(None).await
    }

    /// 폼 전체 값을 교체하고 제출합니다.
    ///
    /// 제출이 진행 중이면 값을 건드리지 않고 `AlreadySubmitting`을 돌려줍니다.
    /// 값 교체와 진행 중 여부 확인은 하나의 잠금 안에서 이루어집니다.
    pub async fn submit_values(&self, values: CreateUserFormData) -> SubmitOutcome {
        self.run_submit(Some(values)).await
    }

    async fn run_submit(&self, replacement: Option<CreateUserFormData>) -> SubmitOutcome {
        let values = {
            let mut state = self.lock_state();

            if !state.mounted {
                return SubmitOutcome::Discarded;
            }
            if state.is_submitting() {
                debug!("제출 진행 중: 중복 제출 무시");
                return SubmitOutcome::AlreadySubmitting;
            }
            if let Some(values) = replacement {
                state.values = values;
            }

            state.phase = FormPhase::Validating;
            state.submission_error = None;
            state.last_outcome = None;

            match validate(&state.values) {
                ValidationResult::Invalid(errors) => {
                    debug!("폼 검증 실패: {}개 필드", errors.len());
                    state.errors = errors.clone();
                    state.phase = FormPhase::Editing;
                    return SubmitOutcome::Invalid(errors);
                }
                ValidationResult::Valid => {
                    state.errors.clear();
                    state.phase = FormPhase::Submitting;
                    state.values.clone()
                }
            }
        };

        let mut guard = SubmittingGuard::new(self);
        let result = self.service.create_user(values).await;

        let mut state = self.lock_state();
        guard.disarm();

        if !state.mounted {
            info!("언마운트된 폼의 제출 결과를 버립니다 (success={})", result.is_ok());
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(user) => {
                state.phase = FormPhase::Settled(SettledOutcome::Success);
                state.last_outcome = Some(SettledOutcome::Success);
                state.values = CreateUserFormData::default();
                state.errors.clear();
                drop(state);

                self.service.navigate_to_users_list();
                SubmitOutcome::Created(user)
            }
            Err(e) => {
                warn!("사용자 생성 제출 실패: {}", e);
                // 실패는 정착 즉시 Editing으로 돌아가며, 결과는 last_outcome에 남습니다.
                state.last_outcome = Some(SettledOutcome::Failure);
                state.phase = FormPhase::Editing;
                state.submission_error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
                SubmitOutcome::Failed(SUBMISSION_FAILED_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use futures_util::future::{join, pending};
    use futures_util::FutureExt;

    use crate::caching::query_cache::QueryCache;
    use crate::core::errors::{AppError, AppResult};
    use crate::domain::dto::users::request::CreateUserPayload;
    use crate::domain::validation::FieldErrorKind;
    use crate::navigation::{Navigator, USERS_LIST_PATH};
    use crate::repositories::users::UserRepository;

    /// 한 번 양보한 뒤 응답하는 리포지토리. 응답 전에 다른 future가 실행됩니다.
    /// `hang_first`이면 첫 호출은 끝나지 않습니다.
    #[derive(Default)]
    struct YieldingRepository {
        calls: AtomicUsize,
        fail: bool,
        hang_first: bool,
    }

    #[async_trait]
    impl UserRepository for YieldingRepository {
        async fn create_user(&self, payload: &CreateUserPayload) -> AppResult<UserResponse> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.hang_first && call == 0 {
                pending::<()>().await;
            }
            actix_web::rt::task::yield_now().await;

            if self.fail {
                return Err(AppError::ExternalServiceError("simulated network failure".to_string()));
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

    #[derive(Default)]
    struct CountingCache {
        invalidations: AtomicUsize,
    }

    impl QueryCache for CountingCache {
        fn invalidate(&self, _key: &str) {
            self.invalidations.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct CountingNavigator {
        locations: Mutex<Vec<String>>,
    }

    impl Navigator for CountingNavigator {
        fn navigate(&self, location: &str) {
            self.locations.lock().unwrap().push(location.to_string());
        }
    }

    struct Harness {
        repo: Arc<YieldingRepository>,
        cache: Arc<CountingCache>,
        navigator: Arc<CountingNavigator>,
        controller: UserFormController,
    }

    impl Harness {
        fn new(fail: bool) -> Self {
            Self::with_repo(YieldingRepository {
                fail,
                ..Default::default()
            })
        }

        fn with_repo(repo: YieldingRepository) -> Self {
            let repo = Arc::new(repo);
            let cache = Arc::new(CountingCache::default());
            let navigator = Arc::new(CountingNavigator::default());
            let service = Arc::new(UserCreationService::new(
                repo.clone(),
                cache.clone(),
                navigator.clone(),
            ));

            Self {
                repo,
                cache,
                navigator,
                controller: UserFormController::new(service),
            }
        }

        fn fill_valid(&self) {
            self.controller.set_field(Field::Name, "Ana");
            self.controller.set_field(Field::Email, "ana@example.com");
            self.controller.set_field(Field::Password, "abc123");
            self.controller.set_field(Field::PasswordConfirmation, "abc123");
        }

        fn calls(&self) -> usize {
            self.repo.calls.load(Ordering::SeqCst)
        }

        fn navigations(&self) -> Vec<String> {
            self.navigator.locations.lock().unwrap().clone()
        }
    }

    #[test]
    fn test_new_form_is_empty_and_editing() {
        let harness = Harness::new(false);
        let snapshot = harness.controller.snapshot();

        assert_eq!(snapshot.phase, FormPhase::Editing);
        assert_eq!(snapshot.values, CreateUserFormData::default());
        assert!(snapshot.errors.is_empty());
        assert!(!snapshot.is_submitting);
        assert!(harness.controller.is_mounted());
    }

    #[test]
    fn test_set_field_runs_no_validation() {
        let harness = Harness::new(false);

        harness.controller.set_field(Field::Email, "not-an-email");
        let snapshot = harness.controller.snapshot();

        assert_eq!(snapshot.values.email, "not-an-email");
        assert!(snapshot.errors.is_empty());
    }

    #[actix_web::test]
    async fn test_invalid_submit_sets_errors_without_network_call() {
        let harness = Harness::new(false);
        harness.fill_valid();
        harness.controller.set_field(Field::Name, "");

        let outcome = harness.controller.submit().await;

        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[&Field::Name].kind, FieldErrorKind::Required);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        let snapshot = harness.controller.snapshot();
        assert_eq!(snapshot.phase, FormPhase::Editing);
        assert_eq!(
            snapshot.error_for(Field::Name).map(|e| e.kind),
            Some(FieldErrorKind::Required)
        );
        assert_eq!(harness.calls(), 0);
    }

    #[actix_web::test]
    async fn test_valid_submit_creates_once_and_navigates() {
        let harness = Harness::new(false);
        harness.fill_valid();

        let outcome = harness.controller.submit().await;

        match outcome {
            SubmitOutcome::Created(user) => assert_eq!(user.email, "ana@example.com"),
            other => panic!("expected Created, got {:?}", other),
        }
        assert_eq!(harness.calls(), 1);
        assert_eq!(harness.cache.invalidations.load(Ordering::SeqCst), 1);
        assert_eq!(harness.navigations(), vec![USERS_LIST_PATH.to_string()]);

        let snapshot = harness.controller.snapshot();
        assert_eq!(snapshot.phase, FormPhase::Settled(SettledOutcome::Success));
        assert_eq!(snapshot.last_outcome, Some(SettledOutcome::Success));
        assert_eq!(snapshot.values, CreateUserFormData::default());
        assert!(!snapshot.is_submitting);
    }

    #[actix_web::test]
    async fn test_remote_failure_returns_to_editing_with_generic_message() {
        let harness = Harness::new(true);
        harness.fill_valid();

        let outcome = harness.controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed(SUBMISSION_FAILED_MESSAGE.to_string()));
        let snapshot = harness.controller.snapshot();
        assert_eq!(snapshot.phase, FormPhase::Editing);
        assert!(!snapshot.is_submitting);
        assert!(snapshot.errors.is_empty());
        assert_eq!(snapshot.submission_error.as_deref(), Some(SUBMISSION_FAILED_MESSAGE));
        assert_eq!(snapshot.values.name, "Ana");
        assert_eq!(snapshot.last_outcome, Some(SettledOutcome::Failure));
        assert_eq!(harness.cache.invalidations.load(Ordering::SeqCst), 0);
        assert!(harness.navigations().is_empty());
    }

    #[actix_web::test]
    async fn test_resubmit_after_failure_clears_generic_message() {
        let harness = Harness::new(true);
        harness.fill_valid();
        harness.controller.submit().await;

        harness.controller.set_field(Field::Name, "");
        let outcome = harness.controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(harness.controller.snapshot().submission_error, None);
        assert_eq!(harness.calls(), 1);
    }

    #[actix_web::test]
    async fn test_rapid_double_submit_makes_one_network_call() {
        let harness = Harness::new(false);
        harness.fill_valid();

        let (first, second) = join(harness.controller.submit(), async {
            assert!(harness.controller.is_submitting());
            harness.controller.submit().await
        })
        .await;

        assert!(matches!(first, SubmitOutcome::Created(_)));
        assert_eq!(second, SubmitOutcome::AlreadySubmitting);
        assert_eq!(harness.calls(), 1);
        assert_eq!(harness.navigations().len(), 1);
    }

    #[actix_web::test]
    async fn test_unmount_while_submitting_discards_late_result() {
        let harness = Harness::new(false);
        harness.fill_valid();

        let (outcome, ()) = join(harness.controller.submit(), async {
            harness.controller.unmount();
        })
        .await;

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert_eq!(harness.calls(), 1);
        assert!(harness.navigations().is_empty());
        // 사용자는 원격에 생성되었으므로 캐시 무효화는 유지됩니다.
        assert_eq!(harness.cache.invalidations.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_submit_after_unmount_is_discarded() {
        let harness = Harness::new(false);
        harness.fill_valid();
        harness.controller.unmount();

        assert_eq!(harness.controller.submit().await, SubmitOutcome::Discarded);
        assert_eq!(harness.calls(), 0);
    }

    #[actix_web::test]
    async fn test_dropped_submit_does_not_leave_form_submitting() {
        let harness = Harness::with_repo(YieldingRepository {
            hang_first: true,
            ..Default::default()
        });
        harness.fill_valid();

        // 첫 제출은 원격 호출에서 멈춘 채로 drop됩니다.
        assert!(harness.controller.submit().now_or_never().is_none());

        assert_eq!(harness.controller.phase(), FormPhase::Editing);
        assert!(!harness.controller.is_submitting());

        let outcome = harness.controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert_eq!(harness.calls(), 2);
        assert_eq!(harness.navigations(), vec![USERS_LIST_PATH.to_string()]);
    }

    #[actix_web::test]
    async fn test_submit_values_while_submitting_keeps_in_flight_values() {
        let harness = Harness::new(true);
        harness.fill_valid();

        let replacement = CreateUserFormData {
            name: "Bia".to_string(),
            ..Default::default()
        };
        let (first, second) = join(
            harness.controller.submit(),
            harness.controller.submit_values(replacement),
        )
        .await;

        assert!(matches!(first, SubmitOutcome::Failed(_)));
        assert_eq!(second, SubmitOutcome::AlreadySubmitting);
        assert_eq!(harness.controller.snapshot().values.name, "Ana");
        assert_eq!(harness.calls(), 1);
    }
}
