//! Role definition projection.
//!
//! Permissions are read and written through the dedicated role-permission
//! operations; the role record itself always carries an empty list.

use aegis_core::Timestamp;
use aegis_core::boxing::{box_bool, box_i64, box_string, box_uuid, unbox_bool, unbox_string};
use aegis_core::models::role::{Permission, RoleDefinition, RoleStatus};
use uuid::Uuid;

use crate::convert::enums::EnumConverter;
use crate::wire::role::{CreateRoleRequest, RoleInfo, UpdateRoleRequest};

#[derive(Debug, Clone, Copy, Default)]
pub struct RoleProjector {
    enums: EnumConverter,
}

impl RoleProjector {
    pub fn new(enums: EnumConverter) -> Self {
        Self { enums }
    }

    pub fn to_wire(&self, role: Option<&RoleDefinition>) -> Option<RoleInfo> {
        role.map(|r| self.project(r))
    }

    pub fn project(&self, role: &RoleDefinition) -> RoleInfo {
        RoleInfo {
            id: Some(role.id.to_string()),
            name: box_string(&role.name),
            description: box_string(&role.description),
            status: self.enums.to_wire(role.status),
            permissions: Vec::new(),
            is_system_role: box_bool(role.is_system_role),
            created_by: box_uuid(role.created_by),
            updated_by: box_uuid(role.updated_by),
            created_at: box_i64(role.created_at),
            updated_at: box_i64(role.updated_at),
            user_count: Some(role.user_count),
        }
    }

    pub fn to_wire_list(&self, roles: &[RoleDefinition]) -> Vec<RoleInfo> {
        roles.iter().map(|r| self.project(r)).collect()
    }

    /// Roles without an explicit status start active.
    pub fn from_create(
        &self,
        req: &CreateRoleRequest,
        permissions: Vec<Permission>,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> RoleDefinition {
        let status = match self.enums.from_wire(req.status) {
            RoleStatus::Unspecified => RoleStatus::Active,
            other => other,
        };
        RoleDefinition {
            id: Uuid::new_v4(),
            name: unbox_string(req.name.as_deref()),
            description: unbox_string(req.description.as_deref()),
            status,
            permissions,
            is_system_role: unbox_bool(req.is_system_role),
            created_by: caller,
            updated_by: caller,
            created_at: now,
            updated_at: now,
            user_count: 0,
        }
    }

    /// `is_system_role` and `user_count` are never touched by updates.
    pub fn apply_update(
        &self,
        mut role: RoleDefinition,
        req: &UpdateRoleRequest,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> RoleDefinition {
        if let Some(name) = &req.name {
            role.name = name.clone();
        }
        if let Some(description) = &req.description {
            role.description = description.clone();
        }
        if req.status.is_some() {
            role.status = self.enums.from_wire(req.status);
        }
        role.updated_by = caller;
        role.updated_at = now;
        role
    }
}
