//! User administration facade.

use aegis_core::error::AegisResult;
use aegis_core::repository::UserRepository;
use aegis_core::{CallContext, now};
use aegis_rpc::convert::{UserProjector, normalize, to_page_response};
use aegis_rpc::wire::user::{ListUsersRequest, ListUsersResponse, UpdateUserRequest, UserInfo};
use tracing::{debug, info, instrument};

use crate::validate::require_id;

pub struct UserService<U: UserRepository> {
    repo: U,
    projector: UserProjector,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repo: U, projector: UserProjector) -> Self {
        Self { repo, projector }
    }

    pub async fn get(&self, ctx: &CallContext, id: &str) -> AegisResult<UserInfo> {
        let id = require_id("id", Some(id))?;
        let user = ctx.run(self.repo.get_by_id(id)).await?;
        Ok(self.projector.project(&user))
    }

    /// Update contact details and status. Usernames and passwords are
    /// changed elsewhere.
    #[instrument(skip_all, fields(user_id = ?req.id))]
    pub async fn update(&self, ctx: &CallContext, req: UpdateUserRequest) -> AegisResult<UserInfo> {
        let id = require_id("id", req.id.as_deref())?;
        let existing = ctx.run(self.repo.get_by_id(id)).await?;
        let user = self
            .projector
            .apply_update(existing, &req, ctx.caller(), now());
        let updated = ctx.run(self.repo.update(user)).await?;

        info!(user_id = %updated.id, status = ?updated.status, "User updated");
        Ok(self.projector.project(&updated))
    }

    pub async fn delete(&self, ctx: &CallContext, id: &str) -> AegisResult<()> {
        let id = require_id("id", Some(id))?;
        ctx.run(self.repo.delete(id)).await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    pub async fn list(&self, ctx: &CallContext, req: ListUsersRequest) -> AegisResult<ListUsersResponse> {
        let options = normalize(req.page.as_ref());
        debug!(?options, "Listing users");
        let result = ctx.run(self.repo.list(&options)).await?;
        Ok(ListUsersResponse {
            users: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }
}
