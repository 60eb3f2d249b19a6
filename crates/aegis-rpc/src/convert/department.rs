//! Department projection.

use aegis_core::Timestamp;
use aegis_core::boxing::{box_i64, box_string, box_uuid, parse_uuid, unbox_string};
use aegis_core::models::department::Department;
use uuid::Uuid;

use crate::wire::department::{CreateDepartmentRequest, DepartmentInfo, UpdateDepartmentRequest};

use super::parse_id_list;

#[derive(Debug, Clone, Copy, Default)]
pub struct DepartmentProjector;

impl DepartmentProjector {
    pub fn to_wire(&self, dept: Option<&Department>) -> Option<DepartmentInfo> {
        dept.map(|d| self.project(d))
    }

    pub fn project(&self, dept: &Department) -> DepartmentInfo {
        DepartmentInfo {
            id: Some(dept.id.to_string()),
            organization_id: Some(dept.organization_id.to_string()),
            parent_id: box_uuid(dept.parent_id),
            name: box_string(&dept.name),
            code: box_string(&dept.code),
            manager_id: box_uuid(dept.manager_id),
            equipment_ids: dept.equipment_ids.iter().map(Uuid::to_string).collect(),
            description: box_string(&dept.description),
            created_by: box_uuid(dept.created_by),
            updated_by: box_uuid(dept.updated_by),
            created_at: box_i64(dept.created_at),
            updated_at: box_i64(dept.updated_at),
        }
    }

    pub fn to_wire_list(&self, depts: &[Department]) -> Vec<DepartmentInfo> {
        depts.iter().map(|d| self.project(d)).collect()
    }

    /// Build a new department. `organization_id` has already been
    /// validated by the caller.
    pub fn from_create(
        &self,
        req: &CreateDepartmentRequest,
        organization_id: Uuid,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> Department {
        Department {
            id: Uuid::new_v4(),
            organization_id,
            parent_id: parse_uuid(req.parent_id.as_deref()),
            name: unbox_string(req.name.as_deref()),
            code: unbox_string(req.code.as_deref()),
            manager_id: parse_uuid(req.manager_id.as_deref()),
            equipment_ids: req
                .equipment_ids
                .as_deref()
                .map(parse_id_list)
                .unwrap_or_default(),
            description: unbox_string(req.description.as_deref()),
            created_by: caller,
            updated_by: caller,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(
        &self,
        mut dept: Department,
        req: &UpdateDepartmentRequest,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> Department {
        if let Some(parent_id) = req.parent_id.as_deref() {
            dept.parent_id = parse_uuid(Some(parent_id));
        }
        if let Some(name) = &req.name {
            dept.name = name.clone();
        }
        if let Some(code) = &req.code {
            dept.code = code.clone();
        }
        if let Some(manager_id) = req.manager_id.as_deref() {
            dept.manager_id = parse_uuid(Some(manager_id));
        }
        if let Some(equipment_ids) = req.equipment_ids.as_deref() {
            dept.equipment_ids = parse_id_list(equipment_ids);
        }
        if let Some(description) = &req.description {
            dept.description = description.clone();
        }
        dept.updated_by = caller;
        dept.updated_at = now;
        dept
    }
}
