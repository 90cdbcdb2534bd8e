//! # 사용자 생성 폼 검증
//!
//! [`CreateUserFormData`]에 선언된 `validator` 규칙을 실행하고, 그 결과를
//! 폼이 렌더링할 수 있는 필드별 에러 맵으로 변환합니다.
//!
//! ## 규칙
//!
//! | 필드 | 에러 종류 | 조건 |
//! |------|-----------|------|
//! | `name` | `Required` | 빈 값 |
//! | `email` | `Required` / `Format` | 빈 값 / 이메일 형식이 아님 |
//! | `password` | `Required` / `MinLength` | 빈 값 / 6자 미만 |
//! | `password_confirmation` | `Mismatch` | `password`와 다름 |
//!
//! 네 필드는 서로 독립적으로 검사되며, 결과는 실패한 모든 필드의 합집합입니다.
//! 한 필드에 여러 규칙이 실패하면 가장 기본적인 규칙(`Required`)의 에러 하나만 남깁니다.

use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::domain::dto::users::request::CreateUserFormData;

/// 사용자 생성 폼의 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// 폼 렌더링 순서대로 나열한 전체 필드
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// 폼/전송 형식에서 사용하는 필드 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nome Completo",
            Field::Email => "Email",
            Field::Password => "Senha",
            Field::PasswordConfirmation => "Confirme sua senha",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Nome completo",
            Field::Email => "E-mail",
            Field::Password => "Senha",
            Field::PasswordConfirmation => "Confirmação de senha",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Password | Field::PasswordConfirmation => "password",
        }
    }

    /// 다시 렌더링할 때 값을 채우지 않는 필드
    pub fn is_secret(&self) -> bool {
        matches!(self, Field::Password | Field::PasswordConfirmation)
    }

    /// 폼 데이터에서 이 필드의 현재 값을 읽습니다.
    pub fn value_of<'a>(&self, form: &'a CreateUserFormData) -> &'a str {
        match self {
            Field::Name => &form.name,
            Field::Email => &form.email,
            Field::Password => &form.password,
            Field::PasswordConfirmation => &form.password_confirmation,
        }
    }

    /// 폼 데이터에서 이 필드의 값만 교체합니다.
    pub fn assign(&self, form: &mut CreateUserFormData, value: String) {
        match self {
            Field::Name => form.name = value,
            Field::Email => form.email = value,
            Field::Password => form.password = value,
            Field::PasswordConfirmation => form.password_confirmation = value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 필드 에러 종류
///
/// 선언 순서가 우선순위입니다. 한 필드에서 여러 규칙이 실패하면 가장 앞선 종류가 남습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// 필수 필드가 비어 있음
    Required,
    /// 이메일 주소 형식이 아님
    Format,
    /// 최소 길이 미달
    MinLength,
    /// 다른 필드 값과 일치하지 않음
    Mismatch,
}

impl FieldErrorKind {
    /// `validator` 규칙에 지정한 `code`
    pub fn code(&self) -> &'static str {
        match self {
            FieldErrorKind::Required => "required",
            FieldErrorKind::Format => "format",
            FieldErrorKind::MinLength => "min_length",
            FieldErrorKind::Mismatch => "mismatch",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "required" => Some(FieldErrorKind::Required),
            "format" | "email" => Some(FieldErrorKind::Format),
            "min_length" | "length" => Some(FieldErrorKind::MinLength),
            "mismatch" | "must_match" => Some(FieldErrorKind::Mismatch),
            _ => None,
        }
    }

    /// 규칙에 메시지가 없을 때 쓰는 기본 메시지
    pub fn default_message(&self, field: Field) -> String {
        match self {
            FieldErrorKind::Required => format!("{} obrigatório", field.label()),
            FieldErrorKind::Format => format!("{} inválido", field.label()),
            FieldErrorKind::MinLength => format!("{} muito curto", field.label()),
            FieldErrorKind::Mismatch => format!("{} não confere", field.label()),
        }
    }
}

/// 한 필드의 검증 에러
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn from_validation_error(field: Field, error: &ValidationError) -> Option<Self> {
        let kind = FieldErrorKind::from_code(&error.code)?;
        let message = error
            .message
            .as_ref()
            .map(|message| message.to_string())
            .unwrap_or_else(|| kind.default_message(field));

        Some(Self { kind, message })
    }
}

/// 필드별 에러 맵 (필드 순서로 정렬)
pub type FieldErrors = BTreeMap<Field, FieldError>;

/// 한 번의 검증 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors().and_then(|errors| errors.get(&field))
    }
}

/// 전체 폼 값에 대해 검증을 한 번 실행합니다.
///
/// 순수 함수이며 부수 효과가 없습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let form = CreateUserFormData {
///     name: "Ana".to_string(),
///     email: "not-an-email".to_string(),
///     password: "abc12".to_string(),
///     password_confirmation: "abc12".to_string(),
/// };
///
/// let result = validate(&form);
/// assert_eq!(result.error_for(Field::Email).unwrap().kind, FieldErrorKind::Format);
/// assert_eq!(result.error_for(Field::Password).unwrap().kind, FieldErrorKind::MinLength);
/// ```
pub fn validate(form: &CreateUserFormData) -> ValidationResult {
    let errors = match form.validate() {
        Ok(()) => return ValidationResult::Valid,
        Err(errors) => errors,
    };

    let mut field_errors = FieldErrors::new();
    for (name, errors) in errors.field_errors() {
        let Some(field) = Field::from_name(&name) else {
            continue;
        };

        let first = errors
            .iter()
            .filter_map(|error| FieldError::from_validation_error(field, error))
            .min_by_key(|error| error.kind);

        if let Some(error) = first {
            field_errors.insert(field, error);
        }
    }

    if field_errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(field_errors)
    }
}
