use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    /// Template asset missing or unparseable
    #[error("Failed to load templates from {source_name}: {reason}")]
    TemplateLoad { source_name: String, reason: String },

    #[error("Unsupported template schema_version {found} (expected {expected})")]
    UnsupportedSchema { found: u32, expected: u32 },
}

impl ReportError {
    /// Create a template load error
    pub fn template_load(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::TemplateLoad {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
