//! # 문자열 유틸리티
//!
//! URL 정리 함수입니다.

/// 기본 URL의 앞뒤 공백과 끝의 `/`를 제거합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_base_url;
///
/// assert_eq!(normalize_base_url(" http://localhost:3000/api/ "), "http://localhost:3000/api");
/// assert_eq!(normalize_base_url("   "), "");
/// ```
pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}
