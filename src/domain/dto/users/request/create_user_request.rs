//! 사용자 생성 폼 DTO
//!
//! "사용자 생성" 폼의 입력값과, 원격 API로 전송되는 생성 요청 페이로드를 정의합니다.
//! 필드 규칙은 `validator` derive 속성으로 선언되며, 규칙마다 `code`를 지정하여
//! [`crate::domain::validation`]이 에러 종류를 구분할 수 있게 합니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 비밀번호 최소 길이 (문자 수 기준)
pub const PASSWORD_MIN_LENGTH: u64 = 6;

/// 사용자 생성 폼 데이터
///
/// 폼이 마운트될 때 빈 값으로 생성되고, 입력마다 필드 단위로 갱신되며,
/// 제출 시점에 한 번에 검증됩니다. 누락된 폼 필드는 빈 문자열로 역직렬화됩니다.
///
/// `password_confirmation`의 유효성은 현재 `password` 값에 의존합니다.
/// 두 값이 모두 비어 있으면 일치하는 것으로 취급되며, 이 경우 `password`의
/// 필수값 에러가 제출을 막습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserFormData {
    /// 이름 (필수)
    #[validate(length(min = 1, code = "required", message = "Nome obrigatório"))]
    pub name: String,

    /// 이메일 주소 (필수, 이메일 형식)
    #[validate(length(min = 1, code = "required", message = "E-mail obrigatório"))]
    #[validate(email(code = "format", message = "E-mail inválido"))]
    pub email: String,

    /// 비밀번호 (필수, 최소 6자)
    #[validate(custom(function = "validate_password_required"))]
    #[validate(length(
        min = 6,
        code = "min_length",
        message = "A senha precisa ter no mínimo 6 caracteres"
    ))]
    pub password: String,

    /// 비밀번호 확인 (password와 일치해야 함)
    #[validate(must_match(
        other = "password",
        code = "mismatch",
        message = "As senhas precisam ser iguais."
    ))]
    pub password_confirmation: String,
}

/// 비밀번호 필수값 검증
///
/// `length` 규칙은 최소 길이 검증에 사용되므로 필수값은 별도 함수로 검증합니다.
fn validate_password_required(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::new("required")
            .with_message("Senha obrigatória".into()));
    }
    Ok(())
}

/// 원격 API에 전달되는 신규 사용자 레코드
///
/// 폼 값에 생성 시각(`created_at`, RFC 3339)을 덧붙인 형태입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub created_at: DateTime<Utc>,
}

impl NewUserRecord {
    pub fn from_form(form: CreateUserFormData, created_at: DateTime<Utc>) -> Self {
        let CreateUserFormData {
            name,
            email,
            password,
            password_confirmation,
        } = form;

        Self {
            name,
            email,
            password,
            password_confirmation,
            created_at,
        }
    }
}

/// "사용자 생성" 요청 본문: `{ "user": { ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub user: NewUserRecord,
}

impl CreateUserPayload {
    pub fn new(form: CreateUserFormData, created_at: DateTime<Utc>) -> Self {
        Self {
            user: NewUserRecord::from_form(form, created_at),
        }
    }
}
