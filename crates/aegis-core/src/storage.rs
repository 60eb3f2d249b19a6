//! Object-store collaborator for organization logos.

use uuid::Uuid;

use crate::error::StorageResult;

/// A stored logo image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoObject {
    pub key: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub trait LogoStorage: Send + Sync {
    /// Store `bytes` under the organization's logo key, returning the key.
    fn upload(
        &self,
        organization_id: Uuid,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = StorageResult<String>> + Send;
    fn fetch(
        &self,
        organization_id: Uuid,
    ) -> impl Future<Output = StorageResult<LogoObject>> + Send;
    fn delete(&self, organization_id: Uuid) -> impl Future<Output = StorageResult<()>> + Send;
}

/// Object key under which an organization's logo is stored.
pub fn logo_key(organization_id: Uuid) -> String {
    format!("organizations/{organization_id}/logo")
}
