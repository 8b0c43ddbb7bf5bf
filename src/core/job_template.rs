use crate::domain::model::{
    Credential, Inventory, JobTemplate, JobTemplateCreate, NewJobTemplate, Project,
};
use crate::domain::ports::{JobTemplateResource, Lookup};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty;

/// Name-based façade over the job template resource. Resolves credential,
/// inventory and project names to ids through the lookup collaborators before
/// any mutating request is issued; if a name does not resolve, the resource
/// client is never contacted.
pub struct JobTemplateClient<R, C, I, P> {
    resource: R,
    credentials: C,
    inventories: I,
    projects: P,
}

impl<R, C, I, P> JobTemplateClient<R, C, I, P>
where
    R: JobTemplateResource,
    C: Lookup<Record = Credential>,
    I: Lookup<Record = Inventory>,
    P: Lookup<Record = Project>,
{
    pub fn new(resource: R, credentials: C, inventories: I, projects: P) -> Self {
        Self {
            resource,
            credentials,
            inventories,
            projects,
        }
    }

    /// All job templates known to the service, in the order it returns them.
    pub async fn list(&self) -> Result<Vec<JobTemplate>> {
        self.resource.list().await
    }

    /// Create a job template, resolving the credential, inventory and project
    /// names first. Fails with `AwxError::Duplicate` when the name is already
    /// taken.
    pub async fn create(&self, template: NewJobTemplate) -> Result<JobTemplate> {
        validate_non_empty("name", &template.name)?;
        validate_non_empty("playbook", &template.playbook)?;

        let credential = self.credentials.get(&template.credential).await?;
        let inventory = self.inventories.get(&template.inventory).await?;
        let project = self.projects.get(&template.project).await?;

        tracing::debug!(
            "resolved {:?}: credential={} inventory={} project={}",
            template.name,
            credential.id,
            inventory.id,
            project.id
        );

        // The service treats "no overrides" differently from an empty list,
        // and only the former is ever sent: an empty list collapses to None.
        let extra_vars = match &template.extra_vars {
            Some(vars) if !vars.is_empty() => Some(
                vars.iter()
                    .map(serde_json::to_string)
                    .collect::<std::result::Result<Vec<_>, _>>()?,
            ),
            _ => None,
        };

        let request = JobTemplateCreate {
            name: template.name,
            description: template.description,
            job_type: template.job_type,
            inventory: inventory.id,
            project: project.id,
            playbook: template.playbook,
            credential: credential.id,
            extra_vars,
        };

        self.resource.create(&request).await
    }

    /// Delete the job template with this name under the named project. The
    /// project name is resolved first; an unresolved project aborts the call.
    pub async fn delete(&self, name: &str, project: &str) -> Result<()> {
        let project = self.projects.get(project).await?;

        tracing::debug!("deleting {:?} in project {}", name, project.id);
        self.resource.delete(name, project.id).await
    }

    /// Fetch a single job template by name.
    pub async fn get(&self, name: &str) -> Result<JobTemplate> {
        validate_non_empty("name", name)?;
        self.resource.get(name).await
    }
}
