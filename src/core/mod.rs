//! # Core Module
//!
//! 대시보드 서버 전체가 공유하는 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현
//! - **ErrorContext**: 외부 에러를 컨텍스트와 함께 변환하는 확장 trait
//!
//! ### [`app_state`] - 명시적 의존성 컨테이너
//! - **AppState**: 사용자 리포지토리, 쿼리 캐시, 폼 레지스트리를 소유하는 공유 상태
//! - `web::Data<AppState>`로 핸들러에 주입되며, 프로세스 전역 싱글톤을 사용하지 않습니다.
//!
//! ## 의존성 흐름
//!
//! ```text
//! main ──► AppState::from_config()
//!             │
//!             ├─ Arc<dyn UserRepository>   (HTTP 또는 Mock)
//!             ├─ Arc<InMemoryQueryCache>
//!             └─ Arc<FormRegistry>
//!                     │ open(repo, cache)
//!                     ▼
//!               FormSession { UserFormController, RecordingNavigator }
//! ```

pub mod app_state;
pub mod errors;

pub use app_state::*;
pub use errors::*;
