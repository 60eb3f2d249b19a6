use serde::{Deserialize, Serialize};

use super::common::{PageRequest, PageResponse};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionInfo {
    pub resource: Option<String>,
    pub action: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<i32>,
    #[serde(default)]
    pub permissions: Vec<PermissionInfo>,
    pub is_system_role: Option<bool>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub user_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<i32>,
    pub is_system_role: Option<bool>,
    pub permissions: Option<Vec<PermissionInfo>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRolesRequest {
    pub page: Option<PageRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRolesResponse {
    pub roles: Vec<RoleInfo>,
    pub page: PageResponse,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetRolePermissionsRequest {
    pub role_id: Option<String>,
    #[serde(default)]
    pub permissions: Vec<PermissionInfo>,
}
