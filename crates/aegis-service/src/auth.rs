//! User authentication facade: login, registration and password changes.

use aegis_core::error::{AegisError, AegisResult};
use aegis_core::models::profile::UserProfile;
use aegis_core::models::user::{User, UserStatus};
use aegis_core::repository::{MenuRepository, UserProfileRepository, UserRepository};
use aegis_core::{CallContext, now};
use aegis_rpc::convert::UserProjector;
use aegis_rpc::wire::auth::{
    ChangePasswordRequest, LoginRequest, LoginResponse, ResetPasswordRequest,
};
use aegis_rpc::wire::user::{RegisterUserRequest, UserInfo};
use tracing::{info, instrument, warn};

use crate::config::ServiceConfig;
use crate::error::AuthError;
use crate::menu::MenuService;
use crate::password;
use crate::validate::{require_id, require_text};

/// Authentication facade.
///
/// Holds the menu facade so that a successful login returns the caller's
/// navigation alongside the user record.
pub struct UserAuthService<U: UserRepository, P: UserProfileRepository, M: MenuRepository> {
    users: U,
    profiles: P,
    menus: MenuService<M>,
    projector: UserProjector,
    config: ServiceConfig,
}

impl<U, P, M> UserAuthService<U, P, M>
where
    U: UserRepository,
    P: UserProfileRepository,
    M: MenuRepository,
{
    pub fn new(
        users: U,
        profiles: P,
        menus: MenuService<M>,
        projector: UserProjector,
        config: ServiceConfig,
    ) -> Self {
        Self {
            users,
            profiles,
            menus,
            projector,
            config,
        }
    }

    /// Authenticate with username or email plus password.
    ///
    /// Unknown users and wrong passwords fail identically.
    #[instrument(skip_all)]
    pub async fn login(&self, ctx: &CallContext, req: LoginRequest) -> AegisResult<LoginResponse> {
        let login = require_text("username", req.username.as_deref())?;
        let password = req.password.as_deref().unwrap_or_default();

        let user = match self.find_by_login(ctx, login).await {
            Ok(user) => user,
            Err(AegisError::NotFound { .. }) => {
                warn!("Login rejected: unknown user");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        if !password::verify_password(password, &user.password_hash, self.config.pepper.as_deref())? {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }
        check_status(&user)?;

        let menus = self.menus.menus_for_user(ctx, user.id).await?;
        info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse {
            user: Some(self.projector.project(&user)),
            menus,
        })
    }

    /// Create an active user with a hashed password and an empty profile.
    #[instrument(skip_all, fields(username = ?req.username))]
    pub async fn register(
        &self,
        ctx: &CallContext,
        req: RegisterUserRequest,
    ) -> AegisResult<UserInfo> {
        require_text("username", req.username.as_deref())?;
        let raw = req.password.as_deref().unwrap_or_default();
        password::check_policy(raw, &self.config)?;
        let hash = password::hash_password(raw, &self.config)?;

        let at = now();
        let user = self.projector.from_register(&req, hash, ctx.caller(), at);
        let created = ctx.run(self.users.create(user)).await?;
        let profile = UserProfile {
            user_id: created.id,
            created_at: at,
            updated_at: at,
            ..Default::default()
        };
        if let Err(e) = ctx.run(self.profiles.upsert(profile)).await {
            // Roll back outside the context so a cancelled call still cleans up.
            if let Err(cleanup) = self.users.delete(created.id).await {
                warn!(user_id = %created.id, error = %cleanup, "Failed to roll back user after profile error");
            }
            return Err(e);
        }

        info!(user_id = %created.id, username = %created.username, "User registered");
        Ok(self.projector.project(&created))
    }

    /// Change a password after verifying the current one.
    #[instrument(skip_all, fields(user_id = ?req.user_id))]
    pub async fn change_password(
        &self,
        ctx: &CallContext,
        req: ChangePasswordRequest,
    ) -> AegisResult<()> {
        let user_id = require_id("user_id", req.user_id.as_deref())?;
        let old = req.old_password.as_deref().unwrap_or_default();
        let new = req.new_password.as_deref().unwrap_or_default();
        password::check_policy(new, &self.config)?;

        let user = ctx.run(self.users.get_by_id(user_id)).await?;
        if !password::verify_password(old, &user.password_hash, self.config.pepper.as_deref())? {
            warn!(%user_id, "Password change rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.store_password(ctx, user, new).await?;
        info!(%user_id, "Password changed");
        Ok(())
    }

    /// Administrative reset; the current password is not required.
    #[instrument(skip_all, fields(user_id = ?req.user_id))]
    pub async fn reset_password(
        &self,
        ctx: &CallContext,
        req: ResetPasswordRequest,
    ) -> AegisResult<()> {
        let user_id = require_id("user_id", req.user_id.as_deref())?;
        let new = req.new_password.as_deref().unwrap_or_default();
        password::check_policy(new, &self.config)?;

        let user = ctx.run(self.users.get_by_id(user_id)).await?;
        self.store_password(ctx, user, new).await?;
        info!(%user_id, reset_by = ?ctx.caller(), "Password reset");
        Ok(())
    }

    async fn find_by_login(&self, ctx: &CallContext, login: &str) -> AegisResult<User> {
        match ctx.run(self.users.get_by_username(login)).await {
            Err(AegisError::NotFound { .. }) => ctx.run(self.users.get_by_email(login)).await,
            other => other,
        }
    }

    async fn store_password(&self, ctx: &CallContext, mut user: User, raw: &str) -> AegisResult<()> {
        user.password_hash = password::hash_password(raw, &self.config)?;
        user.updated_by = ctx.caller();
        user.updated_at = now();
        ctx.run(self.users.update(user)).await?;
        Ok(())
    }
}

fn check_status(user: &User) -> Result<(), AuthError> {
    match user.status {
        UserStatus::Active => Ok(()),
        UserStatus::Locked => Err(AuthError::AccountLocked),
        UserStatus::Inactive | UserStatus::Unspecified => Err(AuthError::AccountInactive),
    }
}
