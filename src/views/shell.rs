//! 페이지 골격: 헤더의 `dashgo.` 로고, 왼쪽 사이드바, 본문 영역

use dioxus::prelude::*;

use crate::navigation::{is_active, NavLink, NavSection, DASHBOARD_PATH, SIDEBAR_SECTIONS};

/// 헤더와 사이드바로 감싼 전체 HTML 문서를 만듭니다.
///
/// `current_path`와 일치하거나 그 상위 경로인 사이드바 링크가 활성으로 표시됩니다.
pub fn render_page(page_title: &str, current_path: &str, content: Element) -> String {
    let document = rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_title} | dashgo." }
        }
        body {
            {logo_header()}
            div { class: "layout",
                {sidebar(current_path)}
                main { class: "content", {content} }
            }
        }
    };

    format!(
        "<!doctype html><html lang=\"pt-BR\">{}</html>",
        dioxus_ssr::render_element(document)
    )
}

fn logo_header() -> Element {
    rsx! {
        header { class: "header",
            a { class: "logo", href: DASHBOARD_PATH,
                "dashgo"
                span { class: "logo-dot", "." }
            }
        }
    }
}

fn sidebar(current_path: &str) -> Element {
    rsx! {
        aside { class: "sidebar",
            for section in SIDEBAR_SECTIONS {
                {nav_section(section, current_path)}
            }
        }
    }
}

fn nav_section(section: &NavSection, current_path: &str) -> Element {
    let title = section.title;
    rsx! {
        nav { class: "nav-section",
            p { class: "nav-title", "{title}" }
            ul {
                for link in section.links {
                    {nav_item(link, is_active(link.href, current_path))}
                }
            }
        }
    }
}

fn nav_item(link: &NavLink, active: bool) -> Element {
    let class = if active { "nav-link active" } else { "nav-link" };
    let label = link.label;
    rsx! {
        li {
            a {
                href: link.href,
                class: class,
                aria_current: active.then_some("page"),
                i { class: link.icon }
                " {label}"
            }
        }
    }
}
