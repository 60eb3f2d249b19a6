use serde::{Deserialize, Serialize};

use super::common::{PageRequest, PageResponse};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentInfo {
    pub id: Option<String>,
    pub organization_id: Option<String>,
    pub parent_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub manager_id: Option<String>,
    #[serde(default)]
    pub equipment_ids: Vec<String>,
    pub description: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    pub organization_id: Option<String>,
    pub parent_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub manager_id: Option<String>,
    pub equipment_ids: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartmentRequest {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub manager_id: Option<String>,
    pub equipment_ids: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDepartmentsRequest {
    pub organization_id: Option<String>,
    pub page: Option<PageRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDepartmentsResponse {
    pub departments: Vec<DepartmentInfo>,
    pub page: PageResponse,
}
