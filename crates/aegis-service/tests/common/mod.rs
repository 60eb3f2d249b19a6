//! In-memory data-access doubles for the facade integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use aegis_core::error::{StorageError, StorageResult};
use aegis_core::models::assignment::UserRoleAssignment;
use aegis_core::models::department::{Department, DepartmentRow};
use aegis_core::models::membership::UserMembership;
use aegis_core::models::menu::Menu;
use aegis_core::models::organization::Organization;
use aegis_core::models::profile::{UserProfile, UserProfileRow};
use aegis_core::models::role::{Permission, RoleDefinition};
use aegis_core::models::user::User;
use aegis_core::query::{PaginatedResult, QueryOptions};
use aegis_core::repository::{
    DepartmentRepository, MembershipRepository, MenuRepository, OrganizationRepository,
    RoleRepository, UserProfileRepository, UserRepository, UserRoleRepository,
};
use aegis_core::storage::{LogoObject, LogoStorage, logo_key};
use aegis_service::config::ServiceConfig;
use aegis_service::{Backend, Services};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    profiles: HashMap<Uuid, UserProfileRow>,
    organizations: Vec<Organization>,
    departments: Vec<DepartmentRow>,
    roles: Vec<RoleDefinition>,
    permissions: HashMap<Uuid, Vec<Permission>>,
    assignments: Vec<UserRoleAssignment>,
    memberships: Vec<UserMembership>,
    menus: Vec<Menu>,
    user_menus: HashMap<Uuid, Vec<Menu>>,
    unavailable: bool,
    failing_profile_upserts: bool,
    failing_organization_deletes: bool,
}

/// One shared store implementing every repository trait.
#[derive(Clone, Default)]
pub struct MemoryDb {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Tables>> {
        let tables = self.tables.lock().unwrap();
        if tables.unavailable {
            return Err(StorageError::Unavailable("connection refused".into()));
        }
        Ok(tables)
    }

    /// Make every subsequent call fail as if the store were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.tables.lock().unwrap().unavailable = unavailable;
    }

    /// Make profile upserts fail while everything else keeps working.
    pub fn fail_profile_upserts(&self, fail: bool) {
        self.tables.lock().unwrap().failing_profile_upserts = fail;
    }

    pub fn fail_organization_deletes(&self, fail: bool) {
        self.tables.lock().unwrap().failing_organization_deletes = fail;
    }

    pub fn set_menus(&self, menus: Vec<Menu>) {
        self.tables.lock().unwrap().menus = menus;
    }

    pub fn set_user_menus(&self, user_id: Uuid, menus: Vec<Menu>) {
        self.tables.lock().unwrap().user_menus.insert(user_id, menus);
    }

    pub fn raw_department(&self, id: Uuid) -> Option<DepartmentRow> {
        let tables = self.tables.lock().unwrap();
        tables.departments.iter().find(|d| d.id == id).cloned()
    }

    pub fn raw_profile(&self, user_id: Uuid) -> Option<UserProfileRow> {
        self.tables.lock().unwrap().profiles.get(&user_id).cloned()
    }

    pub fn stored_user(&self, id: Uuid) -> Option<User> {
        let tables = self.tables.lock().unwrap();
        tables.users.iter().find(|u| u.id == id).cloned()
    }
}

fn not_found(entity: &str, id: impl ToString) -> StorageError {
    StorageError::NotFound {
        entity: entity.into(),
        id: id.to_string(),
    }
}

fn matches_search(options: &QueryOptions, text: &str) -> bool {
    match options.search.as_deref() {
        None | Some("") => true,
        Some(term) => text.to_lowercase().contains(&term.to_lowercase()),
    }
}

fn replace<T>(items: &mut [T], entity: &str, id: Uuid, key: impl Fn(&T) -> Uuid, new: T) -> StorageResult<()> {
    let slot = items
        .iter_mut()
        .find(|item| key(item) == id)
        .ok_or_else(|| not_found(entity, id))?;
    *slot = new;
    Ok(())
}

fn remove<T>(items: &mut Vec<T>, entity: &str, id: Uuid, key: impl Fn(&T) -> Uuid) -> StorageResult<()> {
    let before = items.len();
    items.retain(|item| key(item) != id);
    if items.len() == before {
        return Err(not_found(entity, id));
    }
    Ok(())
}

impl UserRepository for MemoryDb {
    async fn create(&self, user: User) -> StorageResult<User> {
        let mut tables = self.lock()?;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::UniqueViolation {
                entity: "user".into(),
                constraint: "username".into(),
            });
        }
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<User> {
        let tables = self.lock()?;
        tables
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| not_found("user", id))
    }

    async fn get_by_username(&self, username: &str) -> StorageResult<User> {
        let tables = self.lock()?;
        tables
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| not_found("user", username))
    }

    async fn get_by_email(&self, email: &str) -> StorageResult<User> {
        let tables = self.lock()?;
        tables
            .users
            .iter()
            .find(|u| !u.email.is_empty() && u.email == email)
            .cloned()
            .ok_or_else(|| not_found("user", email))
    }

    async fn update(&self, user: User) -> StorageResult<User> {
        let mut tables = self.lock()?;
        replace(&mut tables.users, "user", user.id, |u| u.id, user.clone())?;
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        let mut tables = self.lock()?;
        remove(&mut tables.users, "user", id, |u| u.id)
    }

    async fn list(&self, options: &QueryOptions) -> StorageResult<PaginatedResult<User>> {
        let tables = self.lock()?;
        let mut users: Vec<User> = tables
            .users
            .iter()
            .filter(|u| matches_search(options, &u.username))
            .cloned()
            .collect();
        if options.order_field.as_deref() == Some("username") {
            users.sort_by(|a, b| a.username.cmp(&b.username));
            if options.order_descending {
                users.reverse();
            }
        }
        Ok(PaginatedResult::from_slice(users, options))
    }
}

impl UserProfileRepository for MemoryDb {
    async fn get_by_user(&self, user_id: Uuid) -> StorageResult<UserProfile> {
        let tables = self.lock()?;
        tables
            .profiles
            .get(&user_id)
            .cloned()
            .map(UserProfileRow::into_model)
            .ok_or_else(|| not_found("user profile", user_id))
    }

    async fn upsert(&self, profile: UserProfile) -> StorageResult<UserProfile> {
        let mut tables = self.lock()?;
        if tables.failing_profile_upserts {
            return Err(StorageError::Unavailable("profile store down".into()));
        }
        let row = UserProfileRow::from_model(&profile);
        tables.profiles.insert(profile.user_id, row.clone());
        Ok(row.into_model())
    }
}

impl OrganizationRepository for MemoryDb {
    async fn create(&self, org: Organization) -> StorageResult<Organization> {
        let mut tables = self.lock()?;
        if tables.organizations.iter().any(|o| o.code == org.code) {
            return Err(StorageError::UniqueViolation {
                entity: "organization".into(),
                constraint: "code".into(),
            });
        }
        tables.organizations.push(org.clone());
        Ok(org)
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Organization> {
        let tables = self.lock()?;
        tables
            .organizations
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| not_found("organization", id))
    }

    async fn update(&self, org: Organization) -> StorageResult<Organization> {
        let mut tables = self.lock()?;
        replace(&mut tables.organizations, "organization", org.id, |o| o.id, org.clone())?;
        Ok(org)
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        let mut tables = self.lock()?;
        if tables.failing_organization_deletes {
            return Err(StorageError::Unavailable("organization store down".into()));
        }
        remove(&mut tables.organizations, "organization", id, |o| o.id)
    }

    async fn list(&self, options: &QueryOptions) -> StorageResult<PaginatedResult<Organization>> {
        let tables = self.lock()?;
        let orgs: Vec<Organization> = tables
            .organizations
            .iter()
            .filter(|o| matches_search(options, &o.name))
            .cloned()
            .collect();
        Ok(PaginatedResult::from_slice(orgs, options))
    }

    async fn list_children(&self, parent_id: Uuid) -> StorageResult<Vec<Organization>> {
        let tables = self.lock()?;
        Ok(tables
            .organizations
            .iter()
            .filter(|o| o.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }
}

impl DepartmentRepository for MemoryDb {
    async fn create(&self, dept: Department) -> StorageResult<Department> {
        let mut tables = self.lock()?;
        tables.departments.push(DepartmentRow::from_model(&dept));
        Ok(dept)
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<Department> {
        let tables = self.lock()?;
        tables
            .departments
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .map(DepartmentRow::into_model)
            .ok_or_else(|| not_found("department", id))
    }

    async fn update(&self, dept: Department) -> StorageResult<Department> {
        let mut tables = self.lock()?;
        let row = DepartmentRow::from_model(&dept);
        replace(&mut tables.departments, "department", dept.id, |d| d.id, row)?;
        Ok(dept)
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        let mut tables = self.lock()?;
        remove(&mut tables.departments, "department", id, |d| d.id)
    }

    async fn list_by_organization(
        &self,
        organization_id: Uuid,
        options: &QueryOptions,
    ) -> StorageResult<PaginatedResult<Department>> {
        let tables = self.lock()?;
        let depts: Vec<Department> = tables
            .departments
            .iter()
            .filter(|d| d.organization_id == organization_id)
            .filter(|d| matches_search(options, &d.name))
            .cloned()
            .map(DepartmentRow::into_model)
            .collect();
        Ok(PaginatedResult::from_slice(depts, options))
    }
}

impl RoleRepository for MemoryDb {
    async fn create(&self, role: RoleDefinition) -> StorageResult<RoleDefinition> {
        let mut tables = self.lock()?;
        tables.permissions.insert(role.id, role.permissions.clone());
        tables.roles.push(role.clone());
        Ok(role)
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<RoleDefinition> {
        let tables = self.lock()?;
        let mut role = tables
            .roles
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| not_found("role", id))?;
        role.user_count = tables.assignments.iter().filter(|a| a.role_id == id).count() as i64;
        Ok(role)
    }

    async fn update(&self, role: RoleDefinition) -> StorageResult<RoleDefinition> {
        let mut tables = self.lock()?;
        replace(&mut tables.roles, "role", role.id, |r| r.id, role.clone())?;
        Ok(role)
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        let mut tables = self.lock()?;
        remove(&mut tables.roles, "role", id, |r| r.id)?;
        tables.permissions.remove(&id);
        Ok(())
    }

    async fn list(&self, options: &QueryOptions) -> StorageResult<PaginatedResult<RoleDefinition>> {
        let tables = self.lock()?;
        let roles: Vec<RoleDefinition> = tables
            .roles
            .iter()
            .filter(|r| matches_search(options, &r.name))
            .cloned()
            .collect();
        Ok(PaginatedResult::from_slice(roles, options))
    }

    async fn get_permissions(&self, role_id: Uuid) -> StorageResult<Vec<Permission>> {
        let tables = self.lock()?;
        tables
            .permissions
            .get(&role_id)
            .cloned()
            .ok_or_else(|| not_found("role", role_id))
    }

    async fn set_permissions(
        &self,
        role_id: Uuid,
        permissions: Vec<Permission>,
    ) -> StorageResult<Vec<Permission>> {
        let mut tables = self.lock()?;
        if !tables.roles.iter().any(|r| r.id == role_id) {
            return Err(not_found("role", role_id));
        }
        tables.permissions.insert(role_id, permissions.clone());
        Ok(permissions)
    }
}

impl UserRoleRepository for MemoryDb {
    async fn create(&self, assignment: UserRoleAssignment) -> StorageResult<UserRoleAssignment> {
        let mut tables = self.lock()?;
        if tables
            .assignments
            .iter()
            .any(|a| a.user_id == assignment.user_id && a.role_id == assignment.role_id)
        {
            return Err(StorageError::UniqueViolation {
                entity: "user role".into(),
                constraint: "user_id, role_id".into(),
            });
        }
        tables.assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn delete(&self, user_id: Uuid, role_id: Uuid) -> StorageResult<()> {
        let mut tables = self.lock()?;
        let before = tables.assignments.len();
        tables
            .assignments
            .retain(|a| !(a.user_id == user_id && a.role_id == role_id));
        if tables.assignments.len() == before {
            return Err(not_found("user role", format!("{user_id}/{role_id}")));
        }
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        options: &QueryOptions,
    ) -> StorageResult<PaginatedResult<UserRoleAssignment>> {
        let tables = self.lock()?;
        let items: Vec<_> = tables
            .assignments
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        Ok(PaginatedResult::from_slice(items, options))
    }

    async fn list_by_role(
        &self,
        role_id: Uuid,
        options: &QueryOptions,
    ) -> StorageResult<PaginatedResult<UserRoleAssignment>> {
        let tables = self.lock()?;
        let items: Vec<_> = tables
            .assignments
            .iter()
            .filter(|a| a.role_id == role_id)
            .cloned()
            .collect();
        Ok(PaginatedResult::from_slice(items, options))
    }
}

impl MembershipRepository for MemoryDb {
    async fn create(&self, membership: UserMembership) -> StorageResult<UserMembership> {
        let mut tables = self.lock()?;
        tables.memberships.push(membership.clone());
        Ok(membership)
    }

    async fn get_by_id(&self, id: Uuid) -> StorageResult<UserMembership> {
        let tables = self.lock()?;
        tables
            .memberships
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| not_found("membership", id))
    }

    async fn update(&self, membership: UserMembership) -> StorageResult<UserMembership> {
        let mut tables = self.lock()?;
        replace(
            &mut tables.memberships,
            "membership",
            membership.id,
            |m| m.id,
            membership.clone(),
        )?;
        Ok(membership)
    }

    async fn delete(&self, id: Uuid) -> StorageResult<()> {
        let mut tables = self.lock()?;
        remove(&mut tables.memberships, "membership", id, |m| m.id)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        options: &QueryOptions,
    ) -> StorageResult<PaginatedResult<UserMembership>> {
        let tables = self.lock()?;
        let items: Vec<_> = tables
            .memberships
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        Ok(PaginatedResult::from_slice(items, options))
    }

    async fn list_by_organization(
        &self,
        organization_id: Uuid,
        options: &QueryOptions,
    ) -> StorageResult<PaginatedResult<UserMembership>> {
        let tables = self.lock()?;
        let items: Vec<_> = tables
            .memberships
            .iter()
            .filter(|m| m.organization_id == organization_id)
            .cloned()
            .collect();
        Ok(PaginatedResult::from_slice(items, options))
    }
}

impl MenuRepository for MemoryDb {
    async fn get_tree(&self) -> StorageResult<Vec<Menu>> {
        Ok(self.lock()?.menus.clone())
    }

    async fn get_for_user(&self, user_id: Uuid) -> StorageResult<Vec<Menu>> {
        Ok(self
            .lock()?
            .user_menus
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl Backend for MemoryDb {
    type Users = MemoryDb;
    type Profiles = MemoryDb;
    type Organizations = MemoryDb;
    type Departments = MemoryDb;
    type Roles = MemoryDb;
    type UserRoles = MemoryDb;
    type Memberships = MemoryDb;
    type Menus = MemoryDb;

    fn users(&self) -> MemoryDb {
        self.clone()
    }
    fn profiles(&self) -> MemoryDb {
        self.clone()
    }
    fn organizations(&self) -> MemoryDb {
        self.clone()
    }
    fn departments(&self) -> MemoryDb {
        self.clone()
    }
    fn roles(&self) -> MemoryDb {
        self.clone()
    }
    fn user_roles(&self) -> MemoryDb {
        self.clone()
    }
    fn memberships(&self) -> MemoryDb {
        self.clone()
    }
    fn menus(&self) -> MemoryDb {
        self.clone()
    }
}

/// Logo object store keyed by organization.
#[derive(Clone, Default)]
pub struct MemoryLogoStorage {
    objects: Arc<Mutex<HashMap<Uuid, LogoObject>>>,
}

impl MemoryLogoStorage {
    pub fn contains(&self, organization_id: Uuid) -> bool {
        self.objects.lock().unwrap().contains_key(&organization_id)
    }
}

impl LogoStorage for MemoryLogoStorage {
    async fn upload(
        &self,
        organization_id: Uuid,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> StorageResult<String> {
        let key = logo_key(organization_id);
        self.objects.lock().unwrap().insert(
            organization_id,
            LogoObject {
                key: key.clone(),
                content_type: content_type.to_owned(),
                bytes,
            },
        );
        Ok(key)
    }

    async fn fetch(&self, organization_id: Uuid) -> StorageResult<LogoObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&organization_id)
            .cloned()
            .ok_or_else(|| not_found("logo", organization_id))
    }

    async fn delete(&self, organization_id: Uuid) -> StorageResult<()> {
        self.objects
            .lock()
            .unwrap()
            .remove(&organization_id)
            .map(|_| ())
            .ok_or_else(|| not_found("logo", organization_id))
    }
}

/// Cheap Argon2 parameters keep the tests fast.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        argon2_memory_kib: 1024,
        argon2_iterations: 1,
        ..ServiceConfig::default()
    }
}

pub struct Harness {
    pub db: MemoryDb,
    pub logos: MemoryLogoStorage,
    pub services: Services<MemoryDb, MemoryLogoStorage>,
}

pub fn harness() -> Harness {
    harness_with(test_config())
}

pub fn harness_with(config: ServiceConfig) -> Harness {
    let db = MemoryDb::new();
    let logos = MemoryLogoStorage::default();
    let services = Services::new(&db, logos.clone(), config);
    Harness {
        db,
        logos,
        services,
    }
}

pub fn test_config_with_pepper(pepper: &str) -> ServiceConfig {
    ServiceConfig {
        pepper: Some(pepper.into()),
        ..test_config()
    }
}
