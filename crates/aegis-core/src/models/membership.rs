//! Organization membership domain model.
//!
//! A membership binds a user to an organization (and optionally one of its
//! departments) under a role, for an optional validity window.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MembershipStatus {
    #[default]
    Unspecified,
    Active,
    Suspended,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMembership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role_id: Uuid,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub organization_id: Uuid,
    pub department_id: Option<Uuid>,
    pub membership_status: MembershipStatus,
    pub valid_from: Option<Timestamp>,
    pub valid_to: Option<Timestamp>,
}
