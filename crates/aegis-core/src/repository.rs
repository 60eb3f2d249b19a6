//! Data-access trait definitions.
//!
//! All repository operations are async and report [`StorageError`]s; the
//! facades translate them into the service taxonomy. Paged list calls take
//! normalized [`QueryOptions`] and are free to clamp page and limit.
//!
//! [`StorageError`]: crate::error::StorageError

use uuid::Uuid;

use crate::error::StorageResult;
use crate::models::{
    assignment::UserRoleAssignment,
    department::Department,
    membership::UserMembership,
    menu::Menu,
    organization::Organization,
    profile::UserProfile,
    role::{Permission, RoleDefinition},
    user::User,
};
use crate::query::{PaginatedResult, QueryOptions};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub trait UserRepository: Send + Sync {
    fn create(&self, user: User) -> impl Future<Output = StorageResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = StorageResult<User>> + Send;
    fn get_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = StorageResult<User>> + Send;
    fn get_by_email(&self, email: &str) -> impl Future<Output = StorageResult<User>> + Send;
    fn update(&self, user: User) -> impl Future<Output = StorageResult<User>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = StorageResult<()>> + Send;
    fn list(
        &self,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<User>>> + Send;
}

pub trait UserProfileRepository: Send + Sync {
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = StorageResult<UserProfile>> + Send;
    /// Insert or replace the profile keyed by `user_id`.
    fn upsert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = StorageResult<UserProfile>> + Send;
}

// ---------------------------------------------------------------------------
// Organizations & departments
// ---------------------------------------------------------------------------

pub trait OrganizationRepository: Send + Sync {
    fn create(
        &self,
        org: Organization,
    ) -> impl Future<Output = StorageResult<Organization>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = StorageResult<Organization>> + Send;
    fn update(
        &self,
        org: Organization,
    ) -> impl Future<Output = StorageResult<Organization>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = StorageResult<()>> + Send;
    fn list(
        &self,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<Organization>>> + Send;

    /// Direct children of an organization, in display order.
    fn list_children(
        &self,
        parent_id: Uuid,
    ) -> impl Future<Output = StorageResult<Vec<Organization>>> + Send;
}

pub trait DepartmentRepository: Send + Sync {
    fn create(
        &self,
        dept: Department,
    ) -> impl Future<Output = StorageResult<Department>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = StorageResult<Department>> + Send;
    fn update(
        &self,
        dept: Department,
    ) -> impl Future<Output = StorageResult<Department>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = StorageResult<()>> + Send;
    fn list_by_organization(
        &self,
        organization_id: Uuid,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<Department>>> + Send;
}

// ---------------------------------------------------------------------------
// Roles, assignments & memberships
// ---------------------------------------------------------------------------

pub trait RoleRepository: Send + Sync {
    fn create(
        &self,
        role: RoleDefinition,
    ) -> impl Future<Output = StorageResult<RoleDefinition>> + Send;
    fn get_by_id(&self, id: Uuid)
    -> impl Future<Output = StorageResult<RoleDefinition>> + Send;
    fn update(
        &self,
        role: RoleDefinition,
    ) -> impl Future<Output = StorageResult<RoleDefinition>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = StorageResult<()>> + Send;
    fn list(
        &self,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<RoleDefinition>>> + Send;

    /// Get all permissions granted by a role.
    fn get_permissions(
        &self,
        role_id: Uuid,
    ) -> impl Future<Output = StorageResult<Vec<Permission>>> + Send;

    /// Replace the permission set of a role.
    fn set_permissions(
        &self,
        role_id: Uuid,
        permissions: Vec<Permission>,
    ) -> impl Future<Output = StorageResult<Vec<Permission>>> + Send;
}

pub trait UserRoleRepository: Send + Sync {
    /// Fails with `UniqueViolation` when the pair is already assigned.
    fn create(
        &self,
        assignment: UserRoleAssignment,
    ) -> impl Future<Output = StorageResult<UserRoleAssignment>> + Send;
    fn delete(
        &self,
        user_id: Uuid,
        role_id: Uuid,
    ) -> impl Future<Output = StorageResult<()>> + Send;
    fn list_by_user(
        &self,
        user_id: Uuid,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<UserRoleAssignment>>> + Send;
    fn list_by_role(
        &self,
        role_id: Uuid,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<UserRoleAssignment>>> + Send;
}

pub trait MembershipRepository: Send + Sync {
    fn create(
        &self,
        membership: UserMembership,
    ) -> impl Future<Output = StorageResult<UserMembership>> + Send;
    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = StorageResult<UserMembership>> + Send;
    fn update(
        &self,
        membership: UserMembership,
    ) -> impl Future<Output = StorageResult<UserMembership>> + Send;
    fn delete(&self, id: Uuid) -> impl Future<Output = StorageResult<()>> + Send;
    fn list_by_user(
        &self,
        user_id: Uuid,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<UserMembership>>> + Send;
    fn list_by_organization(
        &self,
        organization_id: Uuid,
        options: &QueryOptions,
    ) -> impl Future<Output = StorageResult<PaginatedResult<UserMembership>>> + Send;
}

// ---------------------------------------------------------------------------
// Menus
// ---------------------------------------------------------------------------

pub trait MenuRepository: Send + Sync {
    /// The full menu forest, siblings in display order.
    fn get_tree(&self) -> impl Future<Output = StorageResult<Vec<Menu>>> + Send;

    /// The subset of the forest visible to a user through their roles.
    fn get_for_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = StorageResult<Vec<Menu>>> + Send;
}
