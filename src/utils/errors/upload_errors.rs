use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported bank code: {0}")]
    UnsupportedBank(String),

    #[error("unsupported media type '{0}', expected application/pdf")]
    UnsupportedMediaType(String),

    #[error("file too large: {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("uploaded document is empty")]
    EmptyDocument,

    #[error("can not persist upload to '{path}': {source}")]
    PersistFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Function context (preserves typed inner error)
    #[error("{func}: {source}")]
    Context {
        func: &'static str,
        #[source]
        source: Box<UploadError>,
    },
}

pub trait ErrCtx<T> {
    fn ctx(self, func: &'static str) -> Result<T, UploadError>;
}

impl<T, E> ErrCtx<T> for Result<T, E>
where
    E: Into<UploadError>,
{
    fn ctx(self, func: &'static str) -> Result<T, UploadError> {
        self.map_err(|e| UploadError::Context {
            func,
            source: Box::new(e.into()),
        })
    }
}
