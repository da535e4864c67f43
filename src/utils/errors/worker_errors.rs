use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("can not spawn import worker '{command}': {source}")]
    SpawnFailure {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("can not wait for import worker: {0}")]
    WaitFailure(#[from] std::io::Error),

    // Function context (preserves typed inner error)
    #[error("{func}: {source}")]
    Context {
        func: &'static str,
        #[source]
        source: Box<WorkerError>,
    },
}

pub trait ErrCtx<T> {
    fn ctx(self, func: &'static str) -> Result<T, WorkerError>;
}

impl<T, E> ErrCtx<T> for Result<T, E>
where
    E: Into<WorkerError>,
{
    fn ctx(self, func: &'static str) -> Result<T, WorkerError> {
        self.map_err(|e| WorkerError::Context {
            func,
            source: Box::new(e.into()),
        })
    }
}
