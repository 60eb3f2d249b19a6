//! Membership projection. Lossless in both directions for real validity
//! bounds; a zero bound on the wire means unbounded.

use aegis_core::Timestamp;
use aegis_core::boxing::{box_i64, box_uuid, parse_uuid, unbox_i64};
use aegis_core::models::membership::{MembershipStatus, UserMembership};
use uuid::Uuid;

use crate::convert::enums::EnumConverter;
use crate::wire::membership::{CreateMembershipRequest, MembershipInfo, UpdateMembershipRequest};

/// Identifiers a membership cannot exist without, validated by the caller.
#[derive(Debug, Clone, Copy)]
pub struct MembershipKeys {
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub organization_id: Uuid,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipProjector {
    enums: EnumConverter,
}

impl MembershipProjector {
    pub fn new(enums: EnumConverter) -> Self {
        Self { enums }
    }

    pub fn to_wire(&self, membership: Option<&UserMembership>) -> Option<MembershipInfo> {
        membership.map(|m| self.project(m))
    }

    pub fn project(&self, m: &UserMembership) -> MembershipInfo {
        MembershipInfo {
            id: Some(m.id.to_string()),
            user_id: Some(m.user_id.to_string()),
            role_id: Some(m.role_id.to_string()),
            created_by: box_uuid(m.created_by),
            updated_by: box_uuid(m.updated_by),
            created_at: box_i64(m.created_at),
            updated_at: box_i64(m.updated_at),
            organization_id: Some(m.organization_id.to_string()),
            department_id: box_uuid(m.department_id),
            membership_status: self.enums.to_wire(m.membership_status),
            valid_from: m.valid_from.and_then(box_i64),
            valid_to: m.valid_to.and_then(box_i64),
        }
    }

    /// Inverse of [`project`](Self::project). Unparseable required ids
    /// decode to the nil UUID. A zero validity bound decodes as unbounded, so
    /// a stored `Some(0)` comes back as `None`.
    pub fn from_wire(&self, info: &MembershipInfo) -> UserMembership {
        let id = |raw: &Option<String>| parse_uuid(raw.as_deref()).unwrap_or(Uuid::nil());
        UserMembership {
            id: id(&info.id),
            user_id: id(&info.user_id),
            role_id: id(&info.role_id),
            created_by: parse_uuid(info.created_by.as_deref()),
            updated_by: parse_uuid(info.updated_by.as_deref()),
            created_at: unbox_i64(info.created_at),
            updated_at: unbox_i64(info.updated_at),
            organization_id: id(&info.organization_id),
            department_id: parse_uuid(info.department_id.as_deref()),
            membership_status: self.enums.from_wire(info.membership_status),
            valid_from: info.valid_from.filter(|&t| t != 0),
            valid_to: info.valid_to.filter(|&t| t != 0),
        }
    }

    pub fn to_wire_list(&self, memberships: &[UserMembership]) -> Vec<MembershipInfo> {
        memberships.iter().map(|m| self.project(m)).collect()
    }

    /// Memberships without an explicit status start active.
    pub fn from_create(
        &self,
        req: &CreateMembershipRequest,
        keys: MembershipKeys,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> UserMembership {
        let membership_status = match self.enums.from_wire(req.membership_status) {
            MembershipStatus::Unspecified => MembershipStatus::Active,
            other => other,
        };
        UserMembership {
            id: Uuid::new_v4(),
            user_id: keys.user_id,
            role_id: keys.role_id,
            created_by: caller,
            updated_by: caller,
            created_at: now,
            updated_at: now,
            organization_id: keys.organization_id,
            department_id: parse_uuid(req.department_id.as_deref()),
            membership_status,
            valid_from: req.valid_from.filter(|&t| t != 0),
            valid_to: req.valid_to.filter(|&t| t != 0),
        }
    }

    pub fn apply_update(
        &self,
        mut m: UserMembership,
        req: &UpdateMembershipRequest,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> UserMembership {
        if let Some(role_id) = parse_uuid(req.role_id.as_deref()) {
            m.role_id = role_id;
        }
        if let Some(department_id) = req.department_id.as_deref() {
            m.department_id = parse_uuid(Some(department_id));
        }
        if req.membership_status.is_some() {
            m.membership_status = self.enums.from_wire(req.membership_status);
        }
        if let Some(valid_from) = req.valid_from {
            m.valid_from = (valid_from != 0).then_some(valid_from);
        }
        if let Some(valid_to) = req.valid_to {
            m.valid_to = (valid_to != 0).then_some(valid_to);
        }
        m.updated_by = caller;
        m.updated_at = now;
        m
    }
}
