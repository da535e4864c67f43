use crate::utils::errors::credential_errors::CredentialError;
use crate::utils::errors::upload_errors::UploadError;
use crate::utils::errors::worker_errors::WorkerError;
use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    // Caller/input at fault
    #[error("{0}")]
    Upload(#[from] UploadError),

    #[error("cannot authorize import: {0}")]
    Credential(#[from] CredentialError),

    // Worker lifecycle failures (spawn / stream plumbing)
    #[error("{0}")]
    Worker(#[from] WorkerError),

    // Worker ran and reported failure
    #[error("Failed to process statement: {stderr}")]
    WorkerFailed {
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("import worker timed out after {timeout_secs}s")]
    WorkerTimedOut { timeout_secs: u64, stderr: String },

    #[error("Error: {0}")]
    ServerBusy(String),

    #[error("unexpected import failure: {0}")]
    Unexpected(#[from] anyhow::Error),

    // Function context (preserves typed inner error)
    #[error("{func}: {source}")]
    Context {
        func: &'static str,
        #[source]
        source: Box<ImportError>,
    },
}

impl ImportError {
    pub fn is_client_fault(&self) -> bool {
        match self {
            // Failing to write the scratch file is on us, not the caller.
            ImportError::Upload(UploadError::PersistFailure { .. }) => false,
            ImportError::Upload(_) => true,
            ImportError::Credential(CredentialError::NoPrincipal) => true,
            ImportError::Context { source, .. } => source.is_client_fault(),
            _ => false,
        }
    }

    pub fn error_code(&self) -> i32 {
        match self {
            ImportError::ServerBusy(_) => 1001,
            ImportError::Unexpected(_) => 1002,
            ImportError::Worker(_) => 1003,
            ImportError::Upload(UploadError::PersistFailure { .. }) => 1004,

            ImportError::Upload(_) => 2001,
            ImportError::Credential(CredentialError::NoPrincipal) => 2002,
            ImportError::Credential(_) => 2003,
            ImportError::WorkerFailed { .. } => 2004,
            ImportError::WorkerTimedOut { .. } => 2005,

            ImportError::Context { source, .. } => source.error_code(),
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            ImportError::Upload(UploadError::PersistFailure { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ImportError::Upload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ImportError::Credential(CredentialError::NoPrincipal) => StatusCode::UNAUTHORIZED,
            ImportError::Credential(_) => StatusCode::BAD_GATEWAY,
            ImportError::WorkerFailed { .. } => StatusCode::BAD_GATEWAY,
            ImportError::WorkerTimedOut { .. } => StatusCode::BAD_GATEWAY,
            ImportError::ServerBusy(_) => StatusCode::TOO_MANY_REQUESTS,
            ImportError::Context { source, .. } => source.http_status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub trait ErrCtx<T> {
    fn ctx(self, func: &'static str) -> Result<T, ImportError>;
}

impl<T, E> ErrCtx<T> for Result<T, E>
where
    E: Into<ImportError>,
{
    fn ctx(self, func: &'static str) -> Result<T, ImportError> {
        self.map_err(|e| ImportError::Context {
            func,
            source: Box::new(e.into()),
        })
    }
}
