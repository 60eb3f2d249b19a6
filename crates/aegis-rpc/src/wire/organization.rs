use serde::{Deserialize, Serialize};

use super::common::{PageRequest, PageResponse};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrganizationInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub parent_id: Option<String>,
    pub description: Option<String>,
    pub has_logo: Option<bool>,
    pub status: Option<i32>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub parent_id: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrganizationRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    /// An empty string detaches the organization from its parent.
    pub parent_id: Option<String>,
    pub description: Option<String>,
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrganizationsRequest {
    pub page: Option<PageRequest>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrganizationsResponse {
    pub organizations: Vec<OrganizationInfo>,
    pub page: PageResponse,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadLogoRequest {
    pub organization_id: Option<String>,
    pub content_type: Option<String>,
    #[serde(default)]
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoResponse {
    pub organization_id: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}
