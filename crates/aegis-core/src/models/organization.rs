//! Organization domain model.
//!
//! Organizations form a tree through `parent_id`. Each may carry a logo
//! held by the object store under `logo_key`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrganizationStatus {
    #[default]
    Unspecified,
    Active,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Unique short code (e.g., `acme`).
    pub code: String,
    pub parent_id: Option<Uuid>,
    pub description: String,
    /// Object-store key of the logo; empty when no logo was uploaded.
    pub logo_key: String,
    pub status: OrganizationStatus,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Organization {
    pub fn has_logo(&self) -> bool {
        !self.logo_key.is_empty()
    }
}
