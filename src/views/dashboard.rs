use dioxus::prelude::*;

use crate::navigation::{DASHBOARD_PATH, USERS_LIST_PATH};
use crate::views::shell::render_page;

pub fn render_dashboard() -> String {
    let content = rsx! {
        section { class: "panel",
            h1 { "Dashboard" }
            p { "Bem-vindo ao painel." }
            a { class: "button", href: USERS_LIST_PATH, "Usuários" }
        }
    };
    render_page("Dashboard", DASHBOARD_PATH, content)
}
