//! User-role assignment projection.

use aegis_core::Timestamp;
use aegis_core::boxing::{box_i64, box_uuid};
use aegis_core::models::assignment::UserRoleAssignment;
use uuid::Uuid;

use crate::wire::user_role::UserRoleInfo;

#[derive(Debug, Clone, Copy, Default)]
pub struct UserRoleProjector;

impl UserRoleProjector {
    pub fn to_wire(&self, assignment: Option<&UserRoleAssignment>) -> Option<UserRoleInfo> {
        assignment.map(|a| self.project(a))
    }

    pub fn project(&self, assignment: &UserRoleAssignment) -> UserRoleInfo {
        UserRoleInfo {
            id: Some(assignment.id.to_string()),
            user_id: Some(assignment.user_id.to_string()),
            role_id: Some(assignment.role_id.to_string()),
            created_by: box_uuid(assignment.created_by),
            updated_by: box_uuid(assignment.updated_by),
            created_at: box_i64(assignment.created_at),
            updated_at: box_i64(assignment.updated_at),
        }
    }

    pub fn to_wire_list(&self, assignments: &[UserRoleAssignment]) -> Vec<UserRoleInfo> {
        assignments.iter().map(|a| self.project(a)).collect()
    }

    pub fn new_assignment(
        &self,
        user_id: Uuid,
        role_id: Uuid,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> UserRoleAssignment {
        UserRoleAssignment {
            id: Uuid::new_v4(),
            user_id,
            role_id,
            created_by: caller,
            updated_by: caller,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_creator_is_absent_not_nil() {
        let assignment =
            UserRoleProjector.new_assignment(Uuid::new_v4(), Uuid::new_v4(), None, 1_700_000_000);
        let wire = UserRoleProjector.project(&assignment);
        assert_eq!(wire.created_by, None);
        assert_eq!(wire.updated_by, None);
        assert_ne!(wire.created_by.as_deref(), Some(Uuid::nil().to_string().as_str()));
        assert_eq!(wire.created_at, Some(1_700_000_000));
    }

    #[test]
    fn known_creator_is_canonical_text() {
        let admin = Uuid::new_v4();
        let assignment = UserRoleProjector.new_assignment(Uuid::new_v4(), Uuid::new_v4(), Some(admin), 1);
        let wire = UserRoleProjector.to_wire(Some(&assignment)).unwrap();
        assert_eq!(wire.created_by, Some(admin.hyphenated().to_string()));
    }

    #[test]
    fn absent_assignment_projects_to_absent() {
        assert_eq!(UserRoleProjector.to_wire(None), None);
    }
}
