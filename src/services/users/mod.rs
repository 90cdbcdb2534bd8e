//! 사용자 관리 서비스 모듈
//!
//! - [`user_creation_service`] - 검증된 폼 값을 원격 API로 제출하는 핸들러
//! - [`user_form_controller`] - 폼 입력값, 필드 에러, 제출 진행 상태를 관리하는 컨트롤러
//! - [`form_registry`] - 요청 사이에서 폼 인스턴스를 id로 유지하는 레지스트리

pub mod form_registry;
pub mod user_creation_service;
pub mod user_form_controller;

pub use form_registry::{FormRegistry, FormSession};
pub use user_creation_service::{UserCreationService, USERS_QUERY_KEY};
pub use user_form_controller::{
    FormPhase, FormSnapshot, SettledOutcome, SubmitOutcome, UserFormController,
    SUBMISSION_FAILED_MESSAGE,
};
