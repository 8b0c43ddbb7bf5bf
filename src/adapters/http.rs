use crate::config::AwxConfig;
use crate::core::job_template::JobTemplateClient;
use crate::domain::model::{Credential, Inventory, JobTemplate, JobTemplateCreate, Project};
use crate::domain::ports::{JobTemplateResource, Lookup};
use crate::utils::error::{AwxError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One page of an AWX list response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

/// Shared transport for the AWX v2 REST API. Carries the caller-supplied
/// token on every request; token acquisition and refresh are up to the
/// caller.
#[derive(Clone)]
pub struct AwxApi {
    client: Client,
    base_url: String,
    token: String,
}

impl AwxApi {
    pub fn new(config: &AwxConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            base_url: config.host.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/api/v2/{}/", self.base_url, resource)
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<Page<T>> {
        tracing::debug!("GET {} {:?}", self.url(resource), query);
        let response = self
            .client
            .get(self.url(resource))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn find_by_name<T: DeserializeOwned>(
        &self,
        resource: &str,
        label: &str,
        name: &str,
    ) -> Result<T> {
        let mut page: Page<T> = self.get_page(resource, &[("name", name)]).await?;
        if page.results.is_empty() {
            return Err(AwxError::not_found(format!(
                "no {} named {:?}",
                label, name
            )));
        }
        Ok(page.results.remove(0))
    }
}

/// Translate a non-success status into the boundary error taxonomy,
/// preserving the service's diagnostic body.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body.trim())
    };

    match status {
        StatusCode::NOT_FOUND => Err(AwxError::not_found(message)),
        StatusCode::BAD_REQUEST if body.contains("already exists") => {
            Err(AwxError::duplicate(message))
        }
        _ => Err(AwxError::service(message)),
    }
}

pub struct HttpCredentials {
    api: AwxApi,
}

impl HttpCredentials {
    pub fn new(api: AwxApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Lookup for HttpCredentials {
    type Record = Credential;

    async fn get(&self, name: &str) -> Result<Credential> {
        self.api.find_by_name("credentials", "credential", name).await
    }
}

pub struct HttpInventories {
    api: AwxApi,
}

impl HttpInventories {
    pub fn new(api: AwxApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Lookup for HttpInventories {
    type Record = Inventory;

    async fn get(&self, name: &str) -> Result<Inventory> {
        self.api.find_by_name("inventories", "inventory", name).await
    }
}

pub struct HttpProjects {
    api: AwxApi,
}

impl HttpProjects {
    pub fn new(api: AwxApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Lookup for HttpProjects {
    type Record = Project;

    async fn get(&self, name: &str) -> Result<Project> {
        self.api.find_by_name("projects", "project", name).await
    }
}

pub struct HttpJobTemplates {
    api: AwxApi,
}

impl HttpJobTemplates {
    pub fn new(api: AwxApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl JobTemplateResource for HttpJobTemplates {
    async fn list(&self) -> Result<Vec<JobTemplate>> {
        let page: Page<JobTemplate> = self.api.get_page("job_templates", &[]).await?;
        tracing::debug!("listed {} of {} job templates", page.results.len(), page.count);
        Ok(page.results)
    }

    async fn create(&self, request: &JobTemplateCreate) -> Result<JobTemplate> {
        tracing::debug!("POST {} name={:?}", self.api.url("job_templates"), request.name);
        let response = self
            .api
            .client
            .post(self.api.url("job_templates"))
            .bearer_auth(&self.api.token)
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, name: &str) -> Result<JobTemplate> {
        self.api
            .find_by_name("job_templates", "job template", name)
            .await
    }

    async fn delete(&self, name: &str, project: u64) -> Result<()> {
        // The API deletes by id, so locate the template under this project
        // first.
        let project_id = project.to_string();
        let page: Page<JobTemplate> = self
            .api
            .get_page(
                "job_templates",
                &[("name", name), ("project", project_id.as_str())],
            )
            .await?;
        let template = page.results.first().ok_or_else(|| {
            AwxError::not_found(format!(
                "no job template named {:?} in project {}",
                name, project
            ))
        })?;

        tracing::debug!("DELETE job template id={}", template.id);
        let response = self
            .api
            .client
            .delete(format!(
                "{}{}/",
                self.api.url("job_templates"),
                template.id
            ))
            .bearer_auth(&self.api.token)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Wire a [`JobTemplateClient`] to the HTTP adapter in one call.
pub fn connect(
    config: &AwxConfig,
) -> Result<JobTemplateClient<HttpJobTemplates, HttpCredentials, HttpInventories, HttpProjects>> {
    let api = AwxApi::new(config)?;
    Ok(JobTemplateClient::new(
        HttpJobTemplates::new(api.clone()),
        HttpCredentials::new(api.clone()),
        HttpInventories::new(api.clone()),
        HttpProjects::new(api),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::JobType;
    use httpmock::prelude::*;

    fn test_api(server: &MockServer) -> AwxApi {
        let config = AwxConfig {
            host: server.base_url(),
            token: "test-token".to_string(),
            timeout_seconds: Some(5),
        };
        AwxApi::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_by_name_returns_first_result() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/credentials/")
                .query_param("name", "machine-cred")
                .header("Authorization", "Bearer test-token");
            then.status(200).json_body(serde_json::json!({
                "count": 1,
                "results": [{"id": 7, "name": "machine-cred", "kind": "ssh"}]
            }));
        });

        let credentials = HttpCredentials::new(test_api(&server));
        let credential = credentials.get("machine-cred").await.unwrap();

        api_mock.assert();
        assert_eq!(credential.id, 7);
        assert_eq!(credential.kind.as_deref(), Some("ssh"));
    }

    #[tokio::test]
    async fn test_lookup_empty_results_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/projects/");
            then.status(200)
                .json_body(serde_json::json!({"count": 0, "results": []}));
        });

        let projects = HttpProjects::new(test_api(&server));
        let err = projects.get("missing-proj").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("missing-proj"));
    }

    #[tokio::test]
    async fn test_list_returns_results_in_page_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/job_templates/");
            then.status(200).json_body(serde_json::json!({
                "count": 2,
                "results": [
                    {"id": 2, "name": "b", "job_type": "run", "inventory": 1,
                     "project": 1, "playbook": "site.yml", "credential": 1},
                    {"id": 1, "name": "a", "job_type": "check", "inventory": 1,
                     "project": 1, "playbook": "site.yml", "credential": 1}
                ]
            }));
        });

        let templates = HttpJobTemplates::new(test_api(&server));
        let listed = templates.list().await.unwrap();

        let ids: Vec<u64> = listed.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_create_posts_request_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/job_templates/")
                .header("Authorization", "Bearer test-token")
                .json_body(serde_json::json!({
                    "name": "tmpl1",
                    "description": "test",
                    "job_type": "run",
                    "inventory": 11,
                    "project": 13,
                    "playbook": "site.yml",
                    "credential": 7,
                }));
            then.status(201).json_body(serde_json::json!({
                "id": 42, "name": "tmpl1", "description": "test",
                "job_type": "run", "inventory": 11, "project": 13,
                "playbook": "site.yml", "credential": 7
            }));
        });

        let templates = HttpJobTemplates::new(test_api(&server));
        let created = templates
            .create(&JobTemplateCreate {
                name: "tmpl1".to_string(),
                description: "test".to_string(),
                job_type: JobType::Run,
                inventory: 11,
                project: 13,
                playbook: "site.yml".to_string(),
                credential: 7,
                extra_vars: None,
            })
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_maps_to_duplicate() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/v2/job_templates/");
            then.status(400).json_body(serde_json::json!({
                "name": ["Job template with this name already exists."]
            }));
        });

        let templates = HttpJobTemplates::new(test_api(&server));
        let err = templates
            .create(&JobTemplateCreate {
                name: "tmpl1".to_string(),
                description: String::new(),
                job_type: JobType::Run,
                inventory: 1,
                project: 1,
                playbook: "site.yml".to_string(),
                credential: 1,
                extra_vars: None,
            })
            .await
            .unwrap_err();

        assert!(err.is_duplicate());
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_delete_locates_template_then_deletes_by_id() {
        let server = MockServer::start();
        let list_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/job_templates/")
                .query_param("name", "tmpl1")
                .query_param("project", "13");
            then.status(200).json_body(serde_json::json!({
                "count": 1,
                "results": [{"id": 42, "name": "tmpl1", "job_type": "run",
                             "inventory": 11, "project": 13,
                             "playbook": "site.yml", "credential": 7}]
            }));
        });
        let delete_mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/v2/job_templates/42/");
            then.status(204);
        });

        let templates = HttpJobTemplates::new(test_api(&server));
        templates.delete("tmpl1", 13).await.unwrap();

        list_mock.assert();
        delete_mock.assert();
    }

    #[tokio::test]
    async fn test_delete_missing_template_is_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/job_templates/");
            then.status(200)
                .json_body(serde_json::json!({"count": 0, "results": []}));
        });

        let templates = HttpJobTemplates::new(test_api(&server));
        let err = templates.delete("tmpl1", 13).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_service() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/job_templates/");
            then.status(500).body("internal server error");
        });

        let templates = HttpJobTemplates::new(test_api(&server));
        let err = templates.list().await.unwrap_err();

        assert!(matches!(err, AwxError::Service { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_service() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/credentials/");
            then.status(401)
                .json_body(serde_json::json!({"detail": "Authentication credentials were not provided."}));
        });

        let credentials = HttpCredentials::new(test_api(&server));
        let err = credentials.get("machine-cred").await.unwrap_err();

        assert!(matches!(err, AwxError::Service { .. }));
    }
}
