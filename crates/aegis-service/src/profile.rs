//! User profile facade.

use aegis_core::error::{AegisError, AegisResult};
use aegis_core::repository::UserProfileRepository;
use aegis_core::{CallContext, now};
use aegis_rpc::convert::UserProfileProjector;
use aegis_rpc::wire::profile::{UpsertUserProfileRequest, UserProfileInfo};
use tracing::{info, instrument};

use crate::validate::require_id;

pub struct UserProfileService<P: UserProfileRepository> {
    repo: P,
    projector: UserProfileProjector,
}

impl<P: UserProfileRepository> UserProfileService<P> {
    pub fn new(repo: P, projector: UserProfileProjector) -> Self {
        Self { repo, projector }
    }

    pub async fn get(&self, ctx: &CallContext, user_id: &str) -> AegisResult<UserProfileInfo> {
        let user_id = require_id("user_id", Some(user_id))?;
        let profile = ctx.run(self.repo.get_by_user(user_id)).await?;
        Ok(self.projector.project(&profile))
    }

    /// Merge the request into the stored profile, creating it if needed.
    #[instrument(skip_all, fields(user_id = ?req.user_id))]
    pub async fn upsert(
        &self,
        ctx: &CallContext,
        req: UpsertUserProfileRequest,
    ) -> AegisResult<UserProfileInfo> {
        let user_id = require_id("user_id", req.user_id.as_deref())?;
        let existing = match ctx.run(self.repo.get_by_user(user_id)).await {
            Ok(profile) => Some(profile),
            Err(AegisError::NotFound { .. }) => None,
            Err(e) => return Err(e),
        };
        let created = existing.is_none();

        let profile = self.projector.apply_upsert(existing, &req, user_id, now());
        let stored = ctx.run(self.repo.upsert(profile)).await?;

        info!(%user_id, created, "User profile saved");
        Ok(self.projector.project(&stored))
    }
}
