//! # Views
//!
//! 서버 렌더링 HTML 페이지입니다. 페이지는 `dioxus`의 `rsx!`로 구성하고
//! `dioxus-ssr`로 문자열로 렌더링합니다. 텍스트와 속성 값은 렌더러가 이스케이프합니다.
//! 모든 페이지는 [`shell::render_page`]의 헤더와 사이드바 안에 그려집니다.
//!
//! - [`shell`] - 헤더(로고)와 사이드바를 포함한 페이지 골격
//! - [`dashboard`] - 대시보드 홈
//! - [`users`] - 사용자 목록과 사용자 생성 폼

pub mod dashboard;
pub mod shell;
pub mod users;

pub use shell::render_page;
