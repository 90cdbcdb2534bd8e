//! # Navigation Module
//!
//! 대시보드의 이동 경로와 내비게이션 협력자를 정의합니다.
//!
//! - [`Navigator`] - "이 위치로 이동하라"는 요청을 받는 주입 가능한 capability
//! - [`RecordingNavigator`] - 요청된 위치를 기록하는 구현체. HTTP 계층은 기록된
//!   위치를 `303 See Other` 리다이렉트로 변환합니다.
//! - [`SIDEBAR_SECTIONS`] - 사이드바에 표시되는 정적 링크 구성

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use log::debug;

/// 대시보드 홈
pub const DASHBOARD_PATH: &str = "/dashboard";

/// 사용자 목록
pub const USERS_LIST_PATH: &str = "/users";

/// 사용자 생성 폼
pub const USERS_CREATE_PATH: &str = "/users/create";

/// 위치 이동을 요청받는 협력자
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// 요청된 위치를 순서대로 기록하는 내비게이터
///
/// 최근 `capacity`개의 위치만 유지합니다.
#[derive(Debug)]
pub struct RecordingNavigator {
    history: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// 가장 최근에 요청된 위치
    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .back()
            .cloned()
    }

    /// 기록된 위치를 모두 꺼내고 기록을 비웁니다.
    pub fn take_history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        if history.len() == self.capacity {
            history.pop_front();
        }
        history.push_back(location.to_string());
        debug!("내비게이션 요청: {}", location);
    }
}

/// 사이드바 링크
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Remix Icon 클래스 이름
    pub icon: &'static str,
}

/// 사이드바 섹션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

pub const SIDEBAR_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "GERAL",
        links: &[
            NavLink {
                label: "Dashboard",
                href: DASHBOARD_PATH,
                icon: "ri-dashboard-line",
            },
            NavLink {
                label: "Usuários",
                href: USERS_LIST_PATH,
                icon: "ri-contacts-line",
            },
        ],
    },
    NavSection {
        title: "AUTOMAÇÃO",
        links: &[
            NavLink {
                label: "Formulários",
                href: "/forms",
                icon: "ri-input-method-line",
            },
            NavLink {
                label: "Automação",
                href: "/automatic",
                icon: "ri-git-merge-line",
            },
        ],
    },
];

/// 현재 경로에 대해 링크가 활성 상태인지 판단합니다.
///
/// 정확히 같은 경로이거나 하위 경로(`/users/create`는 `/users`의 하위)이면 활성입니다.
pub fn is_active(link_href: &str, current_path: &str) -> bool {
    current_path == link_href
        || current_path
            .strip_prefix(link_href)
            .is_some_and(|rest| rest.starts_with('/'))
}
