use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no authenticated principal and no configured import token")]
    NoPrincipal,

    #[error("token mint request failed: {0}")]
    MintRequest(#[from] reqwest::Error),

    #[error("token mint rejected with status {status}: {detail}")]
    MintRejected { status: u16, detail: String },

    #[error("token mint returned an empty secret")]
    MintEmptySecret,

    // Function context (preserves typed inner error)
    #[error("{func}: {source}")]
    Context {
        func: &'static str,
        #[source]
        source: Box<CredentialError>,
    },
}

impl CredentialError {
    /// Everything except a missing principal is a mint failure.
    pub fn is_mint_failure(&self) -> bool {
        match self {
            CredentialError::NoPrincipal => false,
            CredentialError::Context { source, .. } => source.is_mint_failure(),
            _ => true,
        }
    }
}

pub trait ErrCtx<T> {
    fn ctx(self, func: &'static str) -> Result<T, CredentialError>;
}

impl<T, E> ErrCtx<T> for Result<T, E>
where
    E: Into<CredentialError>,
{
    fn ctx(self, func: &'static str) -> Result<T, CredentialError> {
        self.map_err(|e| CredentialError::Context {
            func,
            source: Box::new(e.into()),
        })
    }
}
