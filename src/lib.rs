pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::{
    connect, AwxApi, HttpCredentials, HttpInventories, HttpJobTemplates, HttpProjects,
};
pub use crate::config::AwxConfig;
pub use crate::core::job_template::JobTemplateClient;
pub use crate::domain::model::{Credential, Inventory, JobTemplate, JobType, NewJobTemplate, Project};
pub use crate::utils::error::{AwxError, Result};
