//! Organization projection.

use aegis_core::Timestamp;
use aegis_core::boxing::{box_bool, box_i64, box_string, box_uuid, parse_uuid, unbox_string};
use aegis_core::models::organization::{Organization, OrganizationStatus};
use uuid::Uuid;

use crate::convert::enums::EnumConverter;
use crate::wire::organization::{
    CreateOrganizationRequest, OrganizationInfo, UpdateOrganizationRequest,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationProjector {
    enums: EnumConverter,
}

impl OrganizationProjector {
    pub fn new(enums: EnumConverter) -> Self {
        Self { enums }
    }

    pub fn to_wire(&self, org: Option<&Organization>) -> Option<OrganizationInfo> {
        org.map(|o| self.project(o))
    }

    pub fn project(&self, org: &Organization) -> OrganizationInfo {
        OrganizationInfo {
            id: Some(org.id.to_string()),
            name: box_string(&org.name),
            code: box_string(&org.code),
            parent_id: box_uuid(org.parent_id),
            description: box_string(&org.description),
            has_logo: box_bool(org.has_logo()),
            status: self.enums.to_wire(org.status),
            created_by: box_uuid(org.created_by),
            updated_by: box_uuid(org.updated_by),
            created_at: box_i64(org.created_at),
            updated_at: box_i64(org.updated_at),
        }
    }

    pub fn to_wire_list(&self, orgs: &[Organization]) -> Vec<OrganizationInfo> {
        orgs.iter().map(|o| self.project(o)).collect()
    }

    /// New organizations start active and without a logo.
    pub fn from_create(
        &self,
        req: &CreateOrganizationRequest,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> Organization {
        Organization {
            id: Uuid::new_v4(),
            name: unbox_string(req.name.as_deref()),
            code: unbox_string(req.code.as_deref()),
            parent_id: parse_uuid(req.parent_id.as_deref()),
            description: unbox_string(req.description.as_deref()),
            logo_key: String::new(),
            status: OrganizationStatus::Active,
            created_by: caller,
            updated_by: caller,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(
        &self,
        mut org: Organization,
        req: &UpdateOrganizationRequest,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> Organization {
        if let Some(name) = &req.name {
            org.name = name.clone();
        }
        if let Some(code) = &req.code {
            org.code = code.clone();
        }
        if let Some(parent_id) = req.parent_id.as_deref() {
            org.parent_id = parse_uuid(Some(parent_id));
        }
        if let Some(description) = &req.description {
            org.description = description.clone();
        }
        if req.status.is_some() {
            org.status = self.enums.from_wire(req.status);
        }
        org.updated_by = caller;
        org.updated_at = now;
        org
    }
}
