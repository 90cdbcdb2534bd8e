//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 사용자 생성 폼의 상태 관리와 제출 처리를 제공합니다. 서비스는 모두
//! 생성자로 협력자를 주입받으며 전역 상태를 두지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::{UserCreationService, UserFormController};
//!
//! let service = Arc::new(UserCreationService::new(user_repo, query_cache, navigator));
//! let controller = UserFormController::new(service);
//! ```

pub mod users;
