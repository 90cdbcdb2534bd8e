use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 응답 DTO
///
/// 원격 API가 생성하거나 조회한 사용자 레코드입니다. 비밀번호 필드는 포함하지 않으며,
/// 응답에 비밀번호가 섞여 있더라도 역직렬화 시 무시됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
}

/// 사용자 목록 응답 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub users: Vec<UserResponse>,
}
