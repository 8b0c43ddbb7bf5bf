use crate::domain::model::{JobTemplate, JobTemplateCreate};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Name-to-record resolution for a related resource type (credential,
/// inventory, project). Implementations fail with `AwxError::NotFound` when
/// no record carries the given name.
#[async_trait]
pub trait Lookup: Send + Sync {
    type Record: Send;

    async fn get(&self, name: &str) -> Result<Self::Record>;
}

/// CRUD operations the remote service exposes for job templates.
#[async_trait]
pub trait JobTemplateResource: Send + Sync {
    async fn list(&self) -> Result<Vec<JobTemplate>>;
    async fn create(&self, request: &JobTemplateCreate) -> Result<JobTemplate>;
    async fn get(&self, name: &str) -> Result<JobTemplate>;
    async fn delete(&self, name: &str, project: u64) -> Result<()>;
}
