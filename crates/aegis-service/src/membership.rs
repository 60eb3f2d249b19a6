//! Organization membership facade.

use aegis_core::error::{AegisError, AegisResult};
use aegis_core::models::membership::UserMembership;
use aegis_core::repository::MembershipRepository;
use aegis_core::{CallContext, now};
use aegis_rpc::convert::{MembershipKeys, MembershipProjector, normalize, to_page_response};
use aegis_rpc::wire::membership::{
    CreateMembershipRequest, ListMembershipsRequest, ListMembershipsResponse, MembershipInfo,
    UpdateMembershipRequest,
};
use tracing::{debug, info, instrument};

use crate::validate::{optional_id, require_id};

pub struct MembershipService<M: MembershipRepository> {
    repo: M,
    projector: MembershipProjector,
}

impl<M: MembershipRepository> MembershipService<M> {
    pub fn new(repo: M, projector: MembershipProjector) -> Self {
        Self { repo, projector }
    }

    #[instrument(skip_all, fields(user_id = ?req.user_id, organization_id = ?req.organization_id))]
    pub async fn create(
        &self,
        ctx: &CallContext,
        req: CreateMembershipRequest,
    ) -> AegisResult<MembershipInfo> {
        let keys = MembershipKeys {
            user_id: require_id("user_id", req.user_id.as_deref())?,
            role_id: require_id("role_id", req.role_id.as_deref())?,
            organization_id: require_id("organization_id", req.organization_id.as_deref())?,
        };
        optional_id("department_id", req.department_id.as_deref())?;

        let membership = self.projector.from_create(&req, keys, ctx.caller(), now());
        check_window(&membership)?;
        let created = ctx.run(self.repo.create(membership)).await?;

        info!(
            membership_id = %created.id,
            user_id = %created.user_id,
            organization_id = %created.organization_id,
            "Membership created"
        );
        Ok(self.projector.project(&created))
    }

    pub async fn get(&self, ctx: &CallContext, id: &str) -> AegisResult<MembershipInfo> {
        let id = require_id("id", Some(id))?;
        let membership = ctx.run(self.repo.get_by_id(id)).await?;
        Ok(self.projector.project(&membership))
    }

    #[instrument(skip_all, fields(membership_id = ?req.id))]
    pub async fn update(
        &self,
        ctx: &CallContext,
        req: UpdateMembershipRequest,
    ) -> AegisResult<MembershipInfo> {
        let id = require_id("id", req.id.as_deref())?;
        optional_id("role_id", req.role_id.as_deref())?;
        optional_id("department_id", req.department_id.as_deref())?;

        let existing = ctx.run(self.repo.get_by_id(id)).await?;
        let membership = self
            .projector
            .apply_update(existing, &req, ctx.caller(), now());
        check_window(&membership)?;
        let updated = ctx.run(self.repo.update(membership)).await?;

        info!(membership_id = %updated.id, status = ?updated.membership_status, "Membership updated");
        Ok(self.projector.project(&updated))
    }

    pub async fn delete(&self, ctx: &CallContext, id: &str) -> AegisResult<()> {
        let id = require_id("id", Some(id))?;
        ctx.run(self.repo.delete(id)).await?;
        info!(membership_id = %id, "Membership deleted");
        Ok(())
    }

    pub async fn list_by_user(
        &self,
        ctx: &CallContext,
        req: ListMembershipsRequest,
    ) -> AegisResult<ListMembershipsResponse> {
        let user_id = require_id("user_id", req.user_id.as_deref())?;
        let options = normalize(req.page.as_ref());
        debug!(%user_id, ?options, "Listing memberships of user");
        let result = ctx.run(self.repo.list_by_user(user_id, &options)).await?;
        Ok(ListMembershipsResponse {
            memberships: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }

    pub async fn list_by_organization(
        &self,
        ctx: &CallContext,
        req: ListMembershipsRequest,
    ) -> AegisResult<ListMembershipsResponse> {
        let organization_id = require_id("organization_id", req.organization_id.as_deref())?;
        let options = normalize(req.page.as_ref());
        debug!(%organization_id, ?options, "Listing memberships of organization");
        let result = ctx
            .run(self.repo.list_by_organization(organization_id, &options))
            .await?;
        Ok(ListMembershipsResponse {
            memberships: self.projector.to_wire_list(&result.items),
            page: to_page_response(Some(&result.page)),
        })
    }
}

fn check_window(m: &UserMembership) -> AegisResult<()> {
    if let (Some(from), Some(to)) = (m.valid_from, m.valid_to) {
        if to < from {
            return Err(AegisError::invalid_argument(format!(
                "valid_to {to} is before valid_from {from}"
            )));
        }
    }
    Ok(())
}
