//! Department facade.

use aegis_core::error::{AegisError, AegisResult};
use aegis_core::repository::DepartmentRepository;
use aegis_core::{CallContext, now};
use aegis_rpc::convert::{DepartmentProjector, normalize, to_page_response};
use aegis_rpc::wire::department::{
    CreateDepartmentRequest, DepartmentInfo, ListDepartmentsRequest, ListDepartmentsResponse,
    UpdateDepartmentRequest,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::validate::{optional_id, reject_blank, require_id, require_ids, require_text};

pub struct DepartmentService<D: DepartmentRepository> {
    repo: D,
    projector: DepartmentProjector,
}

impl<D: DepartmentRepository> DepartmentService<D> {
    pub fn new(repo: D, projector: DepartmentProjector) -> Self {
        Self { repo, projector }
    }

    #[instrument(skip_all, fields(organization_id = ?req.organization_id))]
    pub async fn create(
        &self,
        ctx: &CallContext,
        req: CreateDepartmentRequest,
    ) -> AegisResult<DepartmentInfo> {
        let organization_id = require_id("organization_id", req.organization_id.as_deref())?;
        require_text("name", req.name.as_deref())?;
        require_text("code", req.code.as_deref())?;
        optional_id("manager_id", req.manager_id.as_deref())?;
        require_ids("equipment_ids", req.equipment_ids.as_deref())?;
        if let Some(parent_id) = optional_id("parent_id", req.parent_id.as_deref())? {
            self.check_parent(ctx, organization_id, parent_id).await?;
        }

        let dept = self
            .projector
            .from_create(&req, organization_id, ctx.caller(), now());
        let created = ctx.run(self.repo.create(dept)).await?;

        info!(department_id = %created.id, %organization_id, "Department created");
        Ok(self.projector.project(&created))
    }

    pub async fn get(&self, ctx: &CallContext, id: &str) -> AegisResult<DepartmentInfo> {
        let id = require_id("id", Some(id))?;
        let dept = ctx.run(self.repo.get_by_id(id)).await?;
        Ok(self.projector.project(&dept))
    }

    #[instrument(skip_all, fields(department_id = ?req.id))]
    pub async fn update(
        &self,
        ctx: &CallContext,
        req: UpdateDepartmentRequest,
    ) -> AegisResult<DepartmentInfo> {
        let id = require_id("id", req.id.as_deref())?;
        reject_blank("name", req.name.as_deref())?;
        reject_blank("code", req.code.as_deref())?;
        optional_id("manager_id", req.manager_id.as_deref())?;
        require_ids("equipment_ids", req.equipment_ids.as_deref())?;
        let parent_id = optional_id("parent_id", req.parent_id.as_deref())?;

        let existing = ctx.run(self.repo.get_by_id(id)).await?;
        if let Some(parent_id) = parent_id {
            if parent_id == id {
                return Err(AegisError::invalid_argument(
                    "a department cannot be its own parent",
                ));
            }
            self.check_parent(ctx, existing.organization_id, parent_id)
                .await?;
        }

        let dept = self
            .projector
            .apply_update(existing, &req, ctx.caller(), now());
        let updated = ctx.run(self.repo.update(dept)).await?;

        info!(department_id = %updated.id, "Department updated");
        Ok(self.projector.project(&updated))
    }

    pub async fn delete(&self, ctx: &CallContext, id: &str) -> AegisResult<()> {
        let id = require_id("id", Some(id))?;
        ctx.run(self.repo.delete(id)).await?;
        info!(department_id = %id, "Department deleted");
        Ok(())
    }

    pub async fn list_by_organization(
        &self,
        ctx: &CallContext,
        req: ListDepartmentsRequest,
    ) -> AegisResult<ListDepartmentsResponse> {
        let organization_id = require_id("organization_id", req.organization_id.as_deref())?;
        let options = normalize(req.page.as_ref());
        debug!(%organization_id, ?options, "Listing departments");

        let result = ctx
            .run(self.repo.list_by_organization(organization_id, &options))
            .await?;
        Ok(ListDepartmentsResponse {
            departments: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }

    /// The parent must exist and belong to the same organization.
    async fn check_parent(
        &self,
        ctx: &CallContext,
        organization_id: Uuid,
        parent_id: Uuid,
    ) -> AegisResult<()> {
        let parent = match ctx.run(self.repo.get_by_id(parent_id)).await {
            Ok(parent) => parent,
            Err(AegisError::NotFound { .. }) => {
                return Err(AegisError::invalid_argument(format!(
                    "parent department {parent_id} does not exist"
                )));
            }
            Err(e) => return Err(e),
        };
        if parent.organization_id != organization_id {
            return Err(AegisError::invalid_argument(
                "parent department belongs to another organization",
            ));
        }
        Ok(())
    }
}
