//! 캐싱 계층 모듈
//!
//! 원격 사용자 API에서 가져온 쿼리 결과를 보관하는 클라이언트 측 캐시를 제공합니다.
//!
//! # 주요 기능
//!
//! - 쿼리 이름 기반 저장/조회 (JSON 값으로 보관)
//! - 삭제 대신 stale 표시로 동작하는 무효화
//! - `users` 무효화 시 `users:*` 하위 키까지 함께 무효화
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::query_cache::{InMemoryQueryCache, QueryCache};
//!
//! let cache = InMemoryQueryCache::new();
//! cache.store("users", &users)?;
//! cache.invalidate("users");
//! ```

pub mod query_cache;

pub use query_cache::{InMemoryQueryCache, QueryCache};
