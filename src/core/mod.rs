pub mod job_template;

pub use crate::domain::model::{JobTemplate, NewJobTemplate};
pub use crate::domain::ports::{JobTemplateResource, Lookup};
pub use crate::utils::error::Result;
