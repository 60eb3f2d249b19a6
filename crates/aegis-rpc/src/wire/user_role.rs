use serde::{Deserialize, Serialize};

use super::common::{PageRequest, PageResponse};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRoleInfo {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub role_id: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    pub user_id: Option<String>,
    pub role_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUserRolesRequest {
    /// Exactly one of `user_id` / `role_id` is consulted, per operation.
    pub user_id: Option<String>,
    pub role_id: Option<String>,
    pub page: Option<PageRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUserRolesResponse {
    pub assignments: Vec<UserRoleInfo>,
    pub page: PageResponse,
}
