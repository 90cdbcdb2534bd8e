//! 서버 및 원격 API 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 원격 사용자 API, Rate Limiting 설정을 관리합니다.

use std::env;
use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Development`를
    /// 기본값으로 사용합니다. 대시보드는 기본적으로 Mock API와 함께 로컬에서 실행됩니다.
    pub fn current() -> Self {
        env::var("ENVIRONMENT")
            .map(|value| Self::parse(&value))
            .unwrap_or(Environment::Development)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        parse_env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소. 기본값: "127.0.0.1" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수. 기본값: 2 (`WORKERS`)
    pub fn workers() -> usize {
        parse_env_or("WORKERS", 2)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 원격 사용자 API 동작 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// `reqwest`로 실제 HTTP API 호출
    Http,
    /// 메모리 내 Mock API (백엔드 없이 대시보드 실행)
    Mock,
}

/// 원격 사용자 API 설정
///
/// # Environment Variables
///
/// * `API_BASE_URL` - 사용자 API 기본 URL (예: `http://localhost:3000/api`)
/// * `API_TIMEOUT_SECS` - 요청 타임아웃 (기본값: 10)
pub struct ApiConfig;

impl ApiConfig {
    /// 설정된 기본 URL. 빈 문자열은 미설정으로 취급합니다.
    pub fn base_url() -> Option<String> {
        env::var("API_BASE_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }

    pub fn timeout_secs() -> u64 {
        parse_env_or("API_TIMEOUT_SECS", 10)
    }

    /// 기본 URL 설정 여부에 따른 동작 모드
    pub fn mode() -> ApiMode {
        Self::mode_for(Self::base_url().as_deref())
    }

    pub fn mode_for(base_url: Option<&str>) -> ApiMode {
        match base_url {
            Some(_) => ApiMode::Http,
            None => ApiMode::Mock,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 50)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 100)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_env_or("RATE_LIMIT_PER_SECOND", 50),
            burst_size: parse_env_or("RATE_LIMIT_BURST_SIZE", 100),
        }
    }
}

/// 환경 변수를 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
