use uuid::Uuid;

pub type ResourceResult<T> = Result<T, ResourceException>;

#[derive(Debug, thiserror::Error)]
pub enum ResourceException {
    #[error("No resource with id: {id}.")]
    NotFound { id: Uuid },

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Resource internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for ResourceException {
    fn from(e: anyhow::Error) -> Self {
        ResourceException::InternalError { source: e }
    }
}
