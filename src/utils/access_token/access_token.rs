use crate::utils::config::server_config::ServerConfig;
use crate::utils::errors::credential_errors::{CredentialError, ErrCtx as CredentialErrCtx};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope label stamped on every minted import token.
pub const IMPORT_TOKEN_LABEL: &str = "Statement Import";

/// The authenticated caller, as established by the fronting auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    pub email: String,
}

/// A scoped, single-import access token. The secret lives in memory for the
/// duration of one import only and never reaches a log line.
#[derive(Clone)]
pub struct AccessCredential {
    pub token: String,
    pub principal_id: Option<i64>,
    pub scope_label: &'static str,
}

impl fmt::Debug for AccessCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessCredential")
            .field("token", &"<redacted>")
            .field("principal_id", &self.principal_id)
            .field("scope_label", &self.scope_label)
            .finish()
    }
}

#[derive(Clone)]
pub enum Minter {
    Ledger(LedgerTokenMinter),
    Fixed(FixedTokenMinter),
}

impl Minter {
    pub async fn mint(
        &self,
        principal: &Principal,
        label: &str,
    ) -> Result<String, CredentialError> {
        match self {
            Minter::Ledger(m) => m.mint(principal, label).await,
            Minter::Fixed(m) => m.mint(principal, label),
        }
    }
}

#[derive(Serialize)]
struct MintTokenBody<'a> {
    name: &'a str,
    user_id: i64,
    scopes: [&'a str; 0],
}

#[derive(Deserialize)]
struct MintTokenResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Mints personal access tokens against the ledger API.
#[derive(Debug, Clone)]
pub struct LedgerTokenMinter {
    base_url: String,
    client: reqwest::Client,
}

impl LedgerTokenMinter {
    pub fn new(base_url: &str) -> Result<LedgerTokenMinter, CredentialError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(CredentialError::from)
            .ctx("LedgerTokenMinter::new")?;
        Ok(LedgerTokenMinter {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Always mints a fresh token. There is no lookup-by-label reuse path:
    /// the ledger stores only a hash, so an issued secret can never be read
    /// back.
    pub async fn mint(
        &self,
        principal: &Principal,
        label: &str,
    ) -> Result<String, CredentialError> {
        let url = format!("{}/oauth/personal-access-tokens", self.base_url);
        let body = MintTokenBody {
            name: label,
            user_id: principal.id,
            scopes: [],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(CredentialError::from)
            .ctx("LedgerTokenMinter::mint:send")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(CredentialError::MintRejected {
                status: status.as_u16(),
                detail,
            });
        }

        let minted: MintTokenResponse = response
            .json()
            .await
            .map_err(CredentialError::from)
            .ctx("LedgerTokenMinter::mint:json")?;

        if minted.access_token.is_empty() {
            return Err(CredentialError::MintEmptySecret);
        }
        Ok(minted.access_token)
    }
}

/// Hands out one preconfigured token. Used by tests and by harnesses that
/// drive the pipeline without a ledger.
#[derive(Clone)]
pub struct FixedTokenMinter {
    token: String,
}

impl FixedTokenMinter {
    pub fn new(token: &str) -> FixedTokenMinter {
        FixedTokenMinter {
            token: token.to_string(),
        }
    }

    pub fn mint(&self, _principal: &Principal, _label: &str) -> Result<String, CredentialError> {
        Ok(self.token.clone())
    }
}

/// Credential policy, in order: configured override token, then a fresh mint
/// for the authenticated principal, otherwise `NoPrincipal`.
pub async fn resolve_access_token(
    config: &ServerConfig,
    minter: &Minter,
    principal: Option<&Principal>,
) -> Result<AccessCredential, CredentialError> {
    if let Some(token) = &config.import_access_token {
        return Ok(AccessCredential {
            token: token.clone(),
            principal_id: None,
            scope_label: IMPORT_TOKEN_LABEL,
        });
    }

    let Some(principal) = principal else {
        eprintln!("❌ No authenticated principal for statement import");
        return Err(CredentialError::NoPrincipal);
    };

    let token = minter.mint(principal, IMPORT_TOKEN_LABEL).await?;
    println!("✅ Minted import token for principal {}", principal.id);

    Ok(AccessCredential {
        token,
        principal_id: Some(principal.id),
        scope_label: IMPORT_TOKEN_LABEL,
    })
}
