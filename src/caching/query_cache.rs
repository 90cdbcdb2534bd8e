//! # 클라이언트 쿼리 캐시
//!
//! 원격 API에서 가져온 목록 결과를 쿼리 이름("users" 등)으로 보관하는 메모리 캐시입니다.
//! 값은 `serde_json::Value`로 저장되어 타입에 관계없이 같은 저장소를 공유합니다.
//!
//! ## 무효화 의미
//!
//! 무효화는 항목을 삭제하지 않고 **stale** 로 표시합니다. 다음 조회 시
//! [`InMemoryQueryCache::get_fresh`]가 `None`을 돌려주므로 호출자가 다시 가져옵니다.
//! 키 `users`를 무효화하면 `users` 자신과 `users:`로 시작하는 모든 하위 키
//! (예: `users:page:1`)가 함께 stale 상태가 됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::query_cache::{InMemoryQueryCache, QueryCache};
//!
//! let cache = InMemoryQueryCache::new();
//! cache.store("users", &users)?;
//!
//! let cached: Option<Vec<UserResponse>> = cache.get_fresh("users")?;
//! cache.invalidate("users");
//! assert!(cache.is_stale("users"));
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Serialize, de::DeserializeOwned};

use crate::core::errors::{AppResult, ErrorContext};

/// 쿼리 캐시 무효화 협력자
///
/// 사용자 생성 플로우는 캐시를 읽거나 잠그지 않고, 이름 있는 항목을 stale로
/// 표시하기만 합니다.
pub trait QueryCache: Send + Sync {
    /// 주어진 키와 그 하위 키(`key:` 접두사)를 stale로 표시합니다.
    fn invalidate(&self, key: &str);
}

/// 캐시 항목
#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    stale: bool,
    updated_at: DateTime<Utc>,
}

/// 메모리 기반 쿼리 캐시
#[derive(Debug, Default)]
pub struct InMemoryQueryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemoryQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 쿼리 결과를 저장하고 fresh 상태로 표시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 값을 JSON으로 직렬화할 수 없는 경우
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let value = serde_json::to_value(value).context("쿼리 캐시 직렬화 실패")?;
        let entry = CacheEntry {
            value,
            stale: false,
            updated_at: Utc::now(),
        };

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), entry);

        debug!("쿼리 캐시 저장: {}", key);
        Ok(())
    }

    /// fresh 상태의 값만 돌려줍니다. 없거나 stale이면 `None`입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장된 값을 요청한 타입으로 역직렬화할 수 없는 경우
    pub fn get_fresh<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let value = {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            match entries.get(key) {
                Some(entry) if !entry.stale => entry.value.clone(),
                _ => return Ok(None),
            }
        };

        serde_json::from_value(value)
            .with_context(|| format!("쿼리 캐시 역직렬화 실패: {}", key))
            .map(Some)
    }

    /// 항목이 없거나 stale이면 `true`
    pub fn is_stale(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .is_none_or(|entry| entry.stale)
    }

    /// 마지막 저장 시각
    pub fn updated_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .map(|entry| entry.updated_at)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QueryCache for InMemoryQueryCache {
    fn invalidate(&self, key: &str) {
        let prefix = format!("{}:", key);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        let mut invalidated = 0usize;
        for (entry_key, entry) in entries.iter_mut() {
            if entry_key == key || entry_key.starts_with(&prefix) {
                entry.stale = true;
                invalidated += 1;
            }
        }

        debug!("쿼리 캐시 무효화: {} ({}개 항목)", key, invalidated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_stale() {
        let cache = InMemoryQueryCache::new();

        assert!(cache.is_stale("users"));
        assert_eq!(cache.get_fresh::<Vec<String>>("users").unwrap(), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_then_get_fresh() {
        let cache = InMemoryQueryCache::new();
        cache.store("users", &vec!["ana".to_string()]).unwrap();

        assert!(!cache.is_stale("users"));
        assert_eq!(
            cache.get_fresh::<Vec<String>>("users").unwrap(),
            Some(vec!["ana".to_string()])
        );
        assert!(cache.updated_at("users").is_some());
    }

    #[test]
    fn test_invalidate_marks_stale_without_removing() {
        let cache = InMemoryQueryCache::new();
        cache.store("users", &vec![1, 2, 3]).unwrap();

        cache.invalidate("users");

        assert!(cache.is_stale("users"));
        assert_eq!(cache.get_fresh::<Vec<i32>>("users").unwrap(), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_covers_sub_keys_only() {
        let cache = InMemoryQueryCache::new();
        cache.store("users:page:1", &vec![1]).unwrap();
        cache.store("users_archive", &vec![2]).unwrap();

        cache.invalidate("users");

        assert!(cache.is_stale("users:page:1"));
        assert!(!cache.is_stale("users_archive"));
    }

    #[test]
    fn test_store_after_invalidate_is_fresh_again() {
        let cache = InMemoryQueryCache::new();
        cache.store("users", &vec![1]).unwrap();
        cache.invalidate("users");

        cache.store("users", &vec![1, 2]).unwrap();

        assert_eq!(cache.get_fresh::<Vec<i32>>("users").unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn test_type_mismatch_is_internal_error() {
        let cache = InMemoryQueryCache::new();
        cache.store("users", &"not a list").unwrap();

        assert!(cache.get_fresh::<Vec<i32>>("users").is_err());
    }
}
