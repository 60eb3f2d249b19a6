//! Permission projection. Lossless in both directions.

use aegis_core::boxing::{box_string, unbox_string};
use aegis_core::models::role::Permission;

use crate::wire::role::PermissionInfo;

#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionProjector;

impl PermissionProjector {
    pub fn to_wire(&self, permission: Option<&Permission>) -> Option<PermissionInfo> {
        permission.map(|p| self.project(p))
    }

    pub fn project(&self, permission: &Permission) -> PermissionInfo {
        PermissionInfo {
            resource: box_string(&permission.resource),
            action: box_string(&permission.action),
            description: box_string(&permission.description),
        }
    }

    pub fn from_wire(&self, info: &PermissionInfo) -> Permission {
        Permission {
            resource: unbox_string(info.resource.as_deref()),
            action: unbox_string(info.action.as_deref()),
            description: unbox_string(info.description.as_deref()),
        }
    }

    pub fn to_wire_list(&self, permissions: &[Permission]) -> Vec<PermissionInfo> {
        permissions.iter().map(|p| self.project(p)).collect()
    }

    pub fn from_wire_list(&self, infos: &[PermissionInfo]) -> Vec<Permission> {
        infos.iter().map(|i| self.from_wire(i)).collect()
    }
}
