//! Projectors between domain models and wire records.
//!
//! Projectors never fail: malformed optional input degrades to "absent",
//! and `None` in always yields `None` out.

pub mod assignment;
pub mod department;
pub mod enums;
pub mod membership;
pub mod menu;
pub mod organization;
pub mod page;
pub mod permission;
pub mod profile;
pub mod role;
pub mod user;

pub use assignment::UserRoleProjector;
pub use department::DepartmentProjector;
pub use enums::{EnumConverter, WireEnum};
pub use membership::{MembershipKeys, MembershipProjector};
pub use menu::MenuProjector;
pub use organization::OrganizationProjector;
pub use page::{normalize, to_page_response};
pub use permission::PermissionProjector;
pub use profile::UserProfileProjector;
pub use role::RoleProjector;
pub use user::UserProjector;

use uuid::Uuid;

/// Parse a list of textual ids, skipping entries that are not UUIDs.
pub(crate) fn parse_id_list(ids: &[String]) -> Vec<Uuid> {
    ids.iter().filter_map(|s| Uuid::parse_str(s).ok()).collect()
}
