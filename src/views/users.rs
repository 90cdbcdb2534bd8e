//! 사용자 목록과 사용자 생성 폼 페이지
//!
//! 생성 폼은 [`FormSnapshot`]을 그대로 그립니다. 필드별 에러는 해당 입력 아래에,
//! 원격 실패 메시지는 폼 상단에 표시됩니다. 비밀번호 필드는 값을 다시 채우지 않습니다.

use dioxus::prelude::*;
use uuid::Uuid;

use crate::domain::dto::users::request::PASSWORD_MIN_LENGTH;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::validation::Field;
use crate::navigation::{USERS_CREATE_PATH, USERS_LIST_PATH};
use crate::services::users::FormSnapshot;
use crate::views::shell::render_page;

pub fn render_users_list(users: &[UserResponse]) -> String {
    let content = rsx! {
        section { class: "panel",
            div { class: "panel-header",
                h1 { "Usuários" }
                a { class: "button", href: USERS_CREATE_PATH, "Criar novo" }
            }
            if users.is_empty() {
                p { class: "empty", "Nenhum usuário cadastrado." }
            } else {
                table { class: "users",
                    thead {
                        tr {
                            th { "Usuário" }
                            th { "Data de cadastro" }
                        }
                    }
                    tbody {
                        for user in users {
                            {user_row(user)}
                        }
                    }
                }
            }
        }
    };

    render_page("Usuários", USERS_LIST_PATH, content)
}

fn user_row(user: &UserResponse) -> Element {
    let UserResponse { id, name, email, .. } = user;
    let created_at = user.created_at.format("%d/%m/%Y").to_string();
    rsx! {
        tr { "data-id": "{id}",
            td {
                strong { "{name}" }
                br {}
                small { "{email}" }
            }
            td { "{created_at}" }
        }
    }
}

/// 사용자 생성 폼 페이지를 렌더링합니다.
///
/// `form_id`는 숨은 필드로 들어가 다음 제출이 같은 폼 인스턴스로 돌아오게 합니다.
pub fn render_create_user_form(form_id: Uuid, snapshot: &FormSnapshot) -> String {
    let busy = snapshot.is_submitting.then_some("true");
    let content = rsx! {
        form { class: "panel", method: "post", action: USERS_CREATE_PATH, novalidate: "true",
            h1 { "Criar um usuário" }
            hr {}
            input { r#type: "hidden", name: "form_id", value: "{form_id}" }
            {snapshot.submission_error.as_deref().map(alert_banner)}
            div { class: "grid",
                for field in Field::ALL {
                    {field_input(snapshot, field)}
                }
            }
            div { class: "actions",
                a { class: "button button-secondary", href: USERS_LIST_PATH, "Cancelar" }
                button {
                    r#type: "submit",
                    class: "button button-primary",
                    disabled: busy,
                    aria_busy: busy,
                    "Salvar"
                }
            }
        }
    };

    render_page("Criar usuário", USERS_CREATE_PATH, content)
}

fn alert_banner(message: &str) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert", "{message}" }
    }
}

fn field_input(snapshot: &FormSnapshot, field: Field) -> Element {
    let name = field.as_str();
    let label = field.label();
    let error = snapshot.error_for(field);
    let error_id = format!("{}-error", name);

    let value = if field.is_secret() {
        ""
    } else {
        field.value_of(&snapshot.values)
    };
    let minlength = (field == Field::Password).then(|| PASSWORD_MIN_LENGTH.to_string());
    let class = if error.is_some() { "field field-invalid" } else { "field" };

    rsx! {
        div { class: class,
            label { r#for: name, "{label}" }
            input {
                id: name,
                name: name,
                r#type: field.input_type(),
                placeholder: field.placeholder(),
                value: value,
                minlength: minlength,
                aria_invalid: error.map(|_| "true"),
                aria_describedby: error.map(|_| error_id.clone()),
            }
            {error.map(|error| field_error(&error_id, &error.message))}
        }
    }
}

fn field_error(error_id: &str, message: &str) -> Element {
    rsx! {
        p { id: error_id, class: "field-error", "{message}" }
    }
}
