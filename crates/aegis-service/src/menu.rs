//! Menu facade.

use aegis_core::CallContext;
use aegis_core::error::AegisResult;
use aegis_core::repository::MenuRepository;
use aegis_rpc::convert::MenuProjector;
use aegis_rpc::wire::menu::MenuNode;
use tracing::debug;
use uuid::Uuid;

use crate::validate::require_id;

pub struct MenuService<M: MenuRepository> {
    repo: M,
    projector: MenuProjector,
}

impl<M: MenuRepository> MenuService<M> {
    pub fn new(repo: M, projector: MenuProjector) -> Self {
        Self { repo, projector }
    }

    /// The full navigation forest.
    pub async fn get_tree(&self, ctx: &CallContext) -> AegisResult<Vec<MenuNode>> {
        let menus = ctx.run(self.repo.get_tree()).await?;
        debug!(roots = menus.len(), "Loaded menu tree");
        Ok(self.projector.to_wire_forest(&menus))
    }

    pub async fn get_for_user(&self, ctx: &CallContext, user_id: &str) -> AegisResult<Vec<MenuNode>> {
        let user_id = require_id("user_id", Some(user_id))?;
        self.menus_for_user(ctx, user_id).await
    }

    pub(crate) async fn menus_for_user(
        &self,
        ctx: &CallContext,
        user_id: Uuid,
    ) -> AegisResult<Vec<MenuNode>> {
        let menus = ctx.run(self.repo.get_for_user(user_id)).await?;
        debug!(%user_id, roots = menus.len(), "Loaded user menus");
        Ok(self.projector.to_wire_forest(&menus))
    }
}
