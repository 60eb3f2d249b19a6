//! Organization facade, including logo management through the object
//! store.

use aegis_core::error::{AegisError, AegisResult};
use aegis_core::models::organization::Organization;
use aegis_core::repository::OrganizationRepository;
use aegis_core::storage::LogoStorage;
use aegis_core::{CallContext, now};
use aegis_rpc::convert::{OrganizationProjector, normalize, to_page_response};
use aegis_rpc::wire::organization::{
    CreateOrganizationRequest, ListOrganizationsRequest, ListOrganizationsResponse, LogoResponse,
    OrganizationInfo, UpdateOrganizationRequest, UploadLogoRequest,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::validate::{optional_id, reject_blank, require_id, require_text};

pub struct OrganizationService<O: OrganizationRepository, L: LogoStorage> {
    repo: O,
    logos: L,
    projector: OrganizationProjector,
    logo_max_bytes: usize,
}

impl<O: OrganizationRepository, L: LogoStorage> OrganizationService<O, L> {
    pub fn new(repo: O, logos: L, projector: OrganizationProjector, config: &ServiceConfig) -> Self {
        Self {
            repo,
            logos,
            projector,
            logo_max_bytes: config.logo_max_bytes,
        }
    }

    #[instrument(skip_all, fields(code = ?req.code))]
    pub async fn create(
        &self,
        ctx: &CallContext,
        req: CreateOrganizationRequest,
    ) -> AegisResult<OrganizationInfo> {
        require_text("name", req.name.as_deref())?;
        require_text("code", req.code.as_deref())?;
        if let Some(parent_id) = optional_id("parent_id", req.parent_id.as_deref())? {
            self.check_parent(ctx, parent_id).await?;
        }

        let org = self.projector.from_create(&req, ctx.caller(), now());
        let created = ctx.run(self.repo.create(org)).await?;

        info!(org_id = %created.id, code = %created.code, "Organization created");
        Ok(self.projector.project(&created))
    }

    pub async fn get(&self, ctx: &CallContext, id: &str) -> AegisResult<OrganizationInfo> {
        let org = self.load(ctx, id).await?;
        Ok(self.projector.project(&org))
    }

    #[instrument(skip_all, fields(org_id = ?req.id))]
    pub async fn update(
        &self,
        ctx: &CallContext,
        req: UpdateOrganizationRequest,
    ) -> AegisResult<OrganizationInfo> {
        let id = require_id("id", req.id.as_deref())?;
        reject_blank("name", req.name.as_deref())?;
        reject_blank("code", req.code.as_deref())?;
        if let Some(parent_id) = optional_id("parent_id", req.parent_id.as_deref())? {
            if parent_id == id {
                return Err(AegisError::invalid_argument(
                    "an organization cannot be its own parent",
                ));
            }
            self.check_parent(ctx, parent_id).await?;
        }

        let existing = ctx.run(self.repo.get_by_id(id)).await?;
        let org = self
            .projector
            .apply_update(existing, &req, ctx.caller(), now());
        let updated = ctx.run(self.repo.update(org)).await?;

        info!(org_id = %updated.id, "Organization updated");
        Ok(self.projector.project(&updated))
    }

    /// Delete an organization together with its logo.
    ///
    /// The record goes first; a logo left behind by a failed object-store
    /// delete is only logged.
    pub async fn delete(&self, ctx: &CallContext, id: &str) -> AegisResult<()> {
        let org = self.load(ctx, id).await?;
        ctx.run(self.repo.delete(org.id)).await?;
        if org.has_logo() {
            if let Err(e) = ctx.run(self.logos.delete(org.id)).await {
                warn!(org_id = %org.id, key = %org.logo_key, error = %e, "Orphaned organization logo");
            }
        }
        info!(org_id = %org.id, "Organization deleted");
        Ok(())
    }

    pub async fn list(
        &self,
        ctx: &CallContext,
        req: ListOrganizationsRequest,
    ) -> AegisResult<ListOrganizationsResponse> {
        let options = normalize(req.page.as_ref());
        debug!(?options, "Listing organizations");
        let result = ctx.run(self.repo.list(&options)).await?;
        Ok(ListOrganizationsResponse {
            organizations: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }

    pub async fn list_children(
        &self,
        ctx: &CallContext,
        parent_id: &str,
    ) -> AegisResult<Vec<OrganizationInfo>> {
        let parent_id = require_id("parent_id", Some(parent_id))?;
        let children = ctx.run(self.repo.list_children(parent_id)).await?;
        Ok(self.projector.to_wire_list(&children))
    }

    // -----------------------------------------------------------------------
    // Logo
    // -----------------------------------------------------------------------

    #[instrument(skip_all, fields(org_id = ?req.organization_id, size = req.data.len()))]
    pub async fn upload_logo(
        &self,
        ctx: &CallContext,
        req: UploadLogoRequest,
    ) -> AegisResult<OrganizationInfo> {
        let id = require_id("organization_id", req.organization_id.as_deref())?;
        let content_type = require_text("content_type", req.content_type.as_deref())?;
        if !content_type.starts_with("image/") {
            return Err(AegisError::invalid_argument(format!(
                "unsupported logo content type {content_type}"
            )));
        }
        if req.data.is_empty() {
            return Err(AegisError::invalid_argument("logo data is empty"));
        }
        if req.data.len() > self.logo_max_bytes {
            return Err(AegisError::invalid_argument(format!(
                "logo exceeds {} bytes",
                self.logo_max_bytes
            )));
        }

        let mut org = ctx.run(self.repo.get_by_id(id)).await?;
        let content_type = content_type.to_owned();
        org.logo_key = ctx
            .run(self.logos.upload(id, &content_type, req.data))
            .await?;
        org.updated_by = ctx.caller();
        org.updated_at = now();
        let updated = ctx.run(self.repo.update(org)).await?;

        info!(org_id = %id, key = %updated.logo_key, "Organization logo uploaded");
        Ok(self.projector.project(&updated))
    }

    pub async fn get_logo(&self, ctx: &CallContext, id: &str) -> AegisResult<LogoResponse> {
        let org = self.load(ctx, id).await?;
        if !org.has_logo() {
            return Err(AegisError::not_found("organization logo", org.id));
        }
        let logo = ctx.run(self.logos.fetch(org.id)).await?;
        Ok(LogoResponse {
            organization_id: Some(org.id.to_string()),
            content_type: Some(logo.content_type),
            data: logo.bytes,
        })
    }

    pub async fn delete_logo(&self, ctx: &CallContext, id: &str) -> AegisResult<OrganizationInfo> {
        let mut org = self.load(ctx, id).await?;
        if !org.has_logo() {
            return Ok(self.projector.project(&org));
        }
        ctx.run(self.logos.delete(org.id)).await?;
        org.logo_key.clear();
        org.updated_by = ctx.caller();
        org.updated_at = now();
        let updated = ctx.run(self.repo.update(org)).await?;

        info!(org_id = %updated.id, "Organization logo removed");
        Ok(self.projector.project(&updated))
    }

    async fn load(&self, ctx: &CallContext, id: &str) -> AegisResult<Organization> {
        let id = require_id("id", Some(id))?;
        ctx.run(self.repo.get_by_id(id)).await
    }

    async fn check_parent(&self, ctx: &CallContext, parent_id: Uuid) -> AegisResult<()> {
        match ctx.run(self.repo.get_by_id(parent_id)).await {
            Ok(_) => Ok(()),
            Err(AegisError::NotFound { .. }) => Err(AegisError::invalid_argument(format!(
                "parent organization {parent_id} does not exist"
            ))),
            Err(e) => Err(e),
        }
    }
}
