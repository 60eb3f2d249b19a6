//! Role and permission facade.

use aegis_core::error::{AegisError, AegisResult};
use aegis_core::models::role::{Permission, RoleDefinition, RoleStatus};
use aegis_core::repository::RoleRepository;
use aegis_core::{CallContext, now};
use aegis_rpc::convert::{EnumConverter, PermissionProjector, RoleProjector, normalize, to_page_response};
use aegis_rpc::wire::role::{
    CreateRoleRequest, ListRolesRequest, ListRolesResponse, PermissionInfo, RoleInfo,
    SetRolePermissionsRequest, UpdateRoleRequest,
};
use tracing::{debug, info, instrument};

use crate::validate::{reject_blank, require_id, require_text};

pub struct RoleService<R: RoleRepository> {
    repo: R,
    projector: RoleProjector,
    permissions: PermissionProjector,
    enums: EnumConverter,
}

impl<R: RoleRepository> RoleService<R> {
    pub fn new(repo: R, projector: RoleProjector, enums: EnumConverter) -> Self {
        Self {
            repo,
            projector,
            permissions: PermissionProjector,
            enums,
        }
    }

    #[instrument(skip_all, fields(name = ?req.name))]
    pub async fn create(&self, ctx: &CallContext, req: CreateRoleRequest) -> AegisResult<RoleInfo> {
        require_text("name", req.name.as_deref())?;
        let permissions = self.parse_permissions(req.permissions.as_deref().unwrap_or_default())?;

        let role = self
            .projector
            .from_create(&req, permissions, ctx.caller(), now());
        let created = ctx.run(self.repo.create(role)).await?;

        info!(
            role_id = %created.id,
            name = %created.name,
            system = created.is_system_role,
            "Role created"
        );
        Ok(self.projector.project(&created))
    }

    pub async fn get(&self, ctx: &CallContext, id: &str) -> AegisResult<RoleInfo> {
        let role = self.load(ctx, id).await?;
        Ok(self.projector.project(&role))
    }

    /// System roles keep their flag and cannot be disabled.
    #[instrument(skip_all, fields(role_id = ?req.id))]
    pub async fn update(&self, ctx: &CallContext, req: UpdateRoleRequest) -> AegisResult<RoleInfo> {
        let id = require_id("id", req.id.as_deref())?;
        reject_blank("name", req.name.as_deref())?;

        let existing = ctx.run(self.repo.get_by_id(id)).await?;
        if existing.is_system_role
            && self.enums.from_wire::<RoleStatus>(req.status) == RoleStatus::Disabled
        {
            return Err(AegisError::forbidden("system roles cannot be disabled"));
        }

        let role = self
            .projector
            .apply_update(existing, &req, ctx.caller(), now());
        let updated = ctx.run(self.repo.update(role)).await?;

        info!(role_id = %updated.id, status = ?updated.status, "Role updated");
        Ok(self.projector.project(&updated))
    }

    pub async fn delete(&self, ctx: &CallContext, id: &str) -> AegisResult<()> {
        let role = self.load(ctx, id).await?;
        if role.is_system_role {
            return Err(AegisError::forbidden(format!(
                "system role {} cannot be deleted",
                role.name
            )));
        }
        ctx.run(self.repo.delete(role.id)).await?;
        info!(role_id = %role.id, "Role deleted");
        Ok(())
    }

    pub async fn list(&self, ctx: &CallContext, req: ListRolesRequest) -> AegisResult<ListRolesResponse> {
        let options = normalize(req.page.as_ref());
        debug!(?options, "Listing roles");
        let result = ctx.run(self.repo.list(&options)).await?;
        Ok(ListRolesResponse {
            roles: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }

    pub async fn get_permissions(
        &self,
        ctx: &CallContext,
        role_id: &str,
    ) -> AegisResult<Vec<PermissionInfo>> {
        let role_id = require_id("role_id", Some(role_id))?;
        let permissions = ctx.run(self.repo.get_permissions(role_id)).await?;
        Ok(self.permissions.to_wire_list(&permissions))
    }

    /// Replace the full permission set of a role.
    #[instrument(skip_all, fields(role_id = ?req.role_id, count = req.permissions.len()))]
    pub async fn set_permissions(
        &self,
        ctx: &CallContext,
        req: SetRolePermissionsRequest,
    ) -> AegisResult<Vec<PermissionInfo>> {
        let role_id = require_id("role_id", req.role_id.as_deref())?;
        let permissions = self.parse_permissions(&req.permissions)?;

        let stored = ctx
            .run(self.repo.set_permissions(role_id, permissions))
            .await?;

        info!(%role_id, count = stored.len(), "Role permissions replaced");
        Ok(self.permissions.to_wire_list(&stored))
    }

    async fn load(&self, ctx: &CallContext, id: &str) -> AegisResult<RoleDefinition> {
        let id = require_id("id", Some(id))?;
        ctx.run(self.repo.get_by_id(id)).await
    }

    /// Every permission needs a resource and an action; duplicates collapse.
    fn parse_permissions(&self, infos: &[PermissionInfo]) -> AegisResult<Vec<Permission>> {
        let mut out: Vec<Permission> = Vec::with_capacity(infos.len());
        for info in infos {
            require_text("permission resource", info.resource.as_deref())?;
            require_text("permission action", info.action.as_deref())?;
            let permission = self.permissions.from_wire(info);
            if !out.contains(&permission) {
                out.push(permission);
            }
        }
        Ok(out)
    }
}
