//! Role definition and permission domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;

/// A single grant: an action on a resource (e.g., `organization` / `update`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Permission {
    pub resource: String,
    pub action: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoleStatus {
    #[default]
    Unspecified,
    Active,
    Disabled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleDefinition {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: RoleStatus,
    pub permissions: Vec<Permission>,
    /// Built-in roles; fixed at creation and never deletable.
    pub is_system_role: bool,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Number of users currently assigned. Maintained by the DAL.
    pub user_count: i64,
}
