use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("analysis input must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("malformed `{section}` section: {source}")]
    MalformedSection {
        section: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid threshold configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = AdvisorError> = std::result::Result<T, E>;
