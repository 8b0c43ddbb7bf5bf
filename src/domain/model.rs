use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AWX job kind. The service only accepts these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Run,
    Check,
}

/// A job template record as returned by the service. Identifiers for the
/// related inventory, project and credential are service-assigned numeric ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTemplate {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub job_type: JobType,
    pub inventory: u64,
    pub project: u64,
    pub playbook: String,
    pub credential: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_vars: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub organization: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub scm_type: Option<String>,
    #[serde(default)]
    pub scm_url: Option<String>,
}

/// Caller-facing description of a job template to create. Related resources
/// are referenced by name; the client resolves them to ids before the request
/// is sent.
#[derive(Debug, Clone)]
pub struct NewJobTemplate {
    pub name: String,
    pub description: String,
    pub job_type: JobType,
    pub inventory: String,
    pub project: String,
    pub playbook: String,
    pub credential: String,
    pub extra_vars: Option<Vec<serde_json::Value>>,
}

/// Wire-level create request with names already resolved to ids and each
/// extra-vars entry serialized to its own JSON string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobTemplateCreate {
    pub name: String,
    pub description: String,
    pub job_type: JobType,
    pub inventory: u64,
    pub project: u64,
    pub playbook: String,
    pub credential: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_vars: Option<Vec<String>>,
}
