//! User-to-role assignment facade.

use aegis_core::error::AegisResult;
use aegis_core::repository::UserRoleRepository;
use aegis_core::{CallContext, now};
use aegis_rpc::convert::{UserRoleProjector, normalize, to_page_response};
use aegis_rpc::wire::user_role::{
    AssignRoleRequest, ListUserRolesRequest, ListUserRolesResponse, UserRoleInfo,
};
use tracing::{debug, info, instrument};

use crate::validate::require_id;

pub struct UserRoleService<A: UserRoleRepository> {
    repo: A,
    projector: UserRoleProjector,
}

impl<A: UserRoleRepository> UserRoleService<A> {
    pub fn new(repo: A, projector: UserRoleProjector) -> Self {
        Self { repo, projector }
    }

    /// Assigning an already-held role is a conflict.
    #[instrument(skip_all, fields(user_id = ?req.user_id, role_id = ?req.role_id))]
    pub async fn assign(&self, ctx: &CallContext, req: AssignRoleRequest) -> AegisResult<UserRoleInfo> {
        let user_id = require_id("user_id", req.user_id.as_deref())?;
        let role_id = require_id("role_id", req.role_id.as_deref())?;

        let assignment = self
            .projector
            .new_assignment(user_id, role_id, ctx.caller(), now());
        let created = ctx.run(self.repo.create(assignment)).await?;

        info!(%user_id, %role_id, "Role assigned");
        Ok(self.projector.project(&created))
    }

    #[instrument(skip_all, fields(user_id = ?req.user_id, role_id = ?req.role_id))]
    pub async fn revoke(&self, ctx: &CallContext, req: AssignRoleRequest) -> AegisResult<()> {
        let user_id = require_id("user_id", req.user_id.as_deref())?;
        let role_id = require_id("role_id", req.role_id.as_deref())?;
        ctx.run(self.repo.delete(user_id, role_id)).await?;
        info!(%user_id, %role_id, "Role revoked");
        Ok(())
    }

    pub async fn list_by_user(
        &self,
        ctx: &CallContext,
        req: ListUserRolesRequest,
    ) -> AegisResult<ListUserRolesResponse> {
        let user_id = require_id("user_id", req.user_id.as_deref())?;
        let options = normalize(req.page.as_ref());
        debug!(%user_id, ?options, "Listing roles of user");
        let result = ctx.run(self.repo.list_by_user(user_id, &options)).await?;
        Ok(ListUserRolesResponse {
            assignments: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }

    pub async fn list_by_role(
        &self,
        ctx: &CallContext,
        req: ListUserRolesRequest,
    ) -> AegisResult<ListUserRolesResponse> {
        let role_id = require_id("role_id", req.role_id.as_deref())?;
        let options = normalize(req.page.as_ref());
        debug!(%role_id, ?options, "Listing holders of role");
        let result = ctx.run(self.repo.list_by_role(role_id, &options)).await?;
        Ok(ListUserRolesResponse {
            assignments: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }
}
