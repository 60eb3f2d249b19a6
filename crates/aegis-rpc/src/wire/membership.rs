use serde::{Deserialize, Serialize};

use super::common::{PageRequest, PageResponse};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipInfo {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub role_id: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub organization_id: Option<String>,
    pub department_id: Option<String>,
    pub membership_status: Option<i32>,
    pub valid_from: Option<i64>,
    pub valid_to: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMembershipRequest {
    pub user_id: Option<String>,
    pub role_id: Option<String>,
    pub organization_id: Option<String>,
    pub department_id: Option<String>,
    pub membership_status: Option<i32>,
    pub valid_from: Option<i64>,
    pub valid_to: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMembershipRequest {
    pub id: Option<String>,
    pub role_id: Option<String>,
    /// An empty string removes the department scope.
    pub department_id: Option<String>,
    pub membership_status: Option<i32>,
    pub valid_from: Option<i64>,
    pub valid_to: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMembershipsRequest {
    pub user_id: Option<String>,
    pub organization_id: Option<String>,
    pub page: Option<PageRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMembershipsResponse {
    pub memberships: Vec<MembershipInfo>,
    pub page: PageResponse,
}
