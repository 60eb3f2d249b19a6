//! Department domain model and its persisted row form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;
use crate::boxing::{decode_string_list, encode_string_list};

/// A department inside an organization; departments nest via `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub code: String,
    pub manager_id: Option<Uuid>,
    /// Equipment assigned to the department.
    pub equipment_ids: Vec<Uuid>,
    pub description: String,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Storage row for [`Department`]; equipment is a JSON array of ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
    pub code: String,
    pub manager_id: Option<Uuid>,
    pub equipment_ids: String,
    pub description: String,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DepartmentRow {
    pub fn from_model(dept: &Department) -> Self {
        let equipment: Vec<String> = dept.equipment_ids.iter().map(Uuid::to_string).collect();
        Self {
            id: dept.id,
            organization_id: dept.organization_id,
            parent_id: dept.parent_id,
            name: dept.name.clone(),
            code: dept.code.clone(),
            manager_id: dept.manager_id,
            equipment_ids: encode_string_list(&equipment),
            description: dept.description.clone(),
            created_by: dept.created_by,
            updated_by: dept.updated_by,
            created_at: dept.created_at,
            updated_at: dept.updated_at,
        }
    }

    /// Malformed equipment identifiers are dropped.
    pub fn into_model(self) -> Department {
        let equipment_ids = decode_string_list(&self.equipment_ids)
            .unwrap_or_default()
            .iter()
            .filter_map(|s| Uuid::parse_str(s).ok())
            .collect();
        Department {
            id: self.id,
            organization_id: self.organization_id,
            parent_id: self.parent_id,
            name: self.name,
            code: self.code,
            manager_id: self.manager_id,
            equipment_ids,
            description: self.description,
            created_by: self.created_by,
            updated_by: self.updated_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn department(equipment_ids: Vec<Uuid>) -> Department {
        Department {
            id: Uuid::new_v4(),
            organization_id: Uuid::new_v4(),
            parent_id: None,
            name: "Radiology".into(),
            code: "RAD".into(),
            manager_id: None,
            equipment_ids,
            description: String::new(),
            created_by: None,
            updated_by: None,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        }
    }

    #[test]
    fn equipment_round_trips_through_row() {
        let dept = department(vec![Uuid::new_v4(), Uuid::new_v4()]);
        let row = DepartmentRow::from_model(&dept);
        assert!(row.equipment_ids.starts_with("[\""));
        assert_eq!(row.into_model(), dept);
    }

    #[test]
    fn no_equipment_is_stored_as_empty_string() {
        let row = DepartmentRow::from_model(&department(vec![]));
        assert_eq!(row.equipment_ids, "");
    }

    #[test]
    fn bad_equipment_entries_are_skipped() {
        let good = Uuid::new_v4();
        let mut row = DepartmentRow::from_model(&department(vec![]));
        row.equipment_ids = format!(r#"["{good}","bogus"]"#);
        assert_eq!(row.into_model().equipment_ids, vec![good]);
    }
}
