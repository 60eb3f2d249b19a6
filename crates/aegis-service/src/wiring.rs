//! Construction of the facade set from a data-access backend.

use aegis_core::repository::{
    DepartmentRepository, MembershipRepository, MenuRepository, OrganizationRepository,
    RoleRepository, UserProfileRepository, UserRepository, UserRoleRepository,
};
use aegis_core::storage::LogoStorage;
use aegis_rpc::convert::{
    DepartmentProjector, EnumConverter, MembershipProjector, MenuProjector, OrganizationProjector,
    RoleProjector, UserProfileProjector, UserProjector, UserRoleProjector,
};
use tracing::info;

use crate::auth::UserAuthService;
use crate::config::ServiceConfig;
use crate::department::DepartmentService;
use crate::membership::MembershipService;
use crate::menu::MenuService;
use crate::organization::OrganizationService;
use crate::profile::UserProfileService;
use crate::role::RoleService;
use crate::user::UserService;
use crate::user_role::UserRoleService;

/// A data-access layer handing out one repository handle per domain.
///
/// Handles are expected to be cheap to obtain (typically a shared pool
/// behind an `Arc`); each facade receives its own.
pub trait Backend {
    type Users: UserRepository;
    type Profiles: UserProfileRepository;
    type Organizations: OrganizationRepository;
    type Departments: DepartmentRepository;
    type Roles: RoleRepository;
    type UserRoles: UserRoleRepository;
    type Memberships: MembershipRepository;
    type Menus: MenuRepository;

    fn users(&self) -> Self::Users;
    fn profiles(&self) -> Self::Profiles;
    fn organizations(&self) -> Self::Organizations;
    fn departments(&self) -> Self::Departments;
    fn roles(&self) -> Self::Roles;
    fn user_roles(&self) -> Self::UserRoles;
    fn memberships(&self) -> Self::Memberships;
    fn menus(&self) -> Self::Menus;
}

/// Every facade of the service, built once at startup.
pub struct Services<B: Backend, L: LogoStorage> {
    pub auth: UserAuthService<B::Users, B::Profiles, B::Menus>,
    pub users: UserService<B::Users>,
    pub profiles: UserProfileService<B::Profiles>,
    pub organizations: OrganizationService<B::Organizations, L>,
    pub departments: DepartmentService<B::Departments>,
    pub roles: RoleService<B::Roles>,
    pub user_roles: UserRoleService<B::UserRoles>,
    pub memberships: MembershipService<B::Memberships>,
    pub menus: MenuService<B::Menus>,
}

impl<B: Backend, L: LogoStorage> Services<B, L> {
    pub fn new(backend: &B, logos: L, config: ServiceConfig) -> Self {
        let enums = EnumConverter;

        let users = UserProjector::new(enums);
        let profiles = UserProfileProjector::new(enums);
        let organizations = OrganizationProjector::new(enums);
        let roles = RoleProjector::new(enums);
        let memberships = MembershipProjector::new(enums);

        let auth_menus = MenuService::new(backend.menus(), MenuProjector);
        let auth = UserAuthService::new(
            backend.users(),
            backend.profiles(),
            auth_menus,
            users,
            config.clone(),
        );

        let services = Self {
            auth,
            users: UserService::new(backend.users(), users),
            profiles: UserProfileService::new(backend.profiles(), profiles),
            organizations: OrganizationService::new(
                backend.organizations(),
                logos,
                organizations,
                &config,
            ),
            departments: DepartmentService::new(backend.departments(), DepartmentProjector),
            roles: RoleService::new(backend.roles(), roles, enums),
            user_roles: UserRoleService::new(backend.user_roles(), UserRoleProjector),
            memberships: MembershipService::new(backend.memberships(), memberships),
            menus: MenuService::new(backend.menus(), MenuProjector),
        };
        info!(
            pepper = config.pepper.is_some(),
            min_password_length = config.min_password_length,
            "Services initialized"
        );
        services
    }
}
