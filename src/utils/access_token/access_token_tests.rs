use crate::utils::access_token::access_token::{
    resolve_access_token, AccessCredential, FixedTokenMinter, Minter, Principal,
    IMPORT_TOKEN_LABEL,
};
use crate::utils::config::server_config::ServerConfig;
use crate::utils::errors::credential_errors::CredentialError;
use std::path::PathBuf;
use std::time::Duration;

fn config_with_override(token: Option<&str>) -> ServerConfig {
    ServerConfig {
        ledger_base_url: "http://localhost:8080".to_string(),
        import_access_token: token.map(|t| t.to_string()),
        worker_command: "python3".to_string(),
        worker_script: PathBuf::from("data-importer/firefly_service.py"),
        scratch_dir: std::env::temp_dir().join("temp_statements"),
        worker_timeout: Duration::from_secs(60),
        max_upload_bytes: 20 * 1024 * 1024,
        max_concurrent_imports: 4,
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

fn principal() -> Principal {
    Principal {
        id: 7,
        email: "user@example.com".to_string(),
    }
}

#[tokio::test]
async fn configured_override_token_bypasses_minting() {
    let config = config_with_override(Some("cfg-token"));
    let minter = Minter::Fixed(FixedTokenMinter::new("minted-token"));

    let credential = resolve_access_token(&config, &minter, None).await.unwrap();
    assert_eq!(credential.token, "cfg-token");
    assert_eq!(credential.principal_id, None);
    assert_eq!(credential.scope_label, IMPORT_TOKEN_LABEL);
}

#[tokio::test]
async fn missing_principal_without_override_is_rejected() {
    let config = config_with_override(None);
    let minter = Minter::Fixed(FixedTokenMinter::new("minted-token"));

    let err = resolve_access_token(&config, &minter, None)
        .await
        .unwrap_err();
    assert!(matches!(err, CredentialError::NoPrincipal));
}

#[tokio::test]
async fn authenticated_principal_gets_a_fresh_token() {
    let config = config_with_override(None);
    let minter = Minter::Fixed(FixedTokenMinter::new("minted-token"));

    let credential = resolve_access_token(&config, &minter, Some(&principal()))
        .await
        .unwrap();
    assert_eq!(credential.token, "minted-token");
    assert_eq!(credential.principal_id, Some(7));
    assert_eq!(credential.scope_label, "Statement Import");
}

#[test]
fn debug_output_never_contains_the_secret() {
    let credential = AccessCredential {
        token: "super-secret-token".to_string(),
        principal_id: Some(7),
        scope_label: IMPORT_TOKEN_LABEL,
    };

    let printed = format!("{:?}", credential);
    assert!(!printed.contains("super-secret-token"));
    assert!(printed.contains("<redacted>"));
}

#[test]
fn mint_failures_are_distinguished_from_missing_principal() {
    assert!(!CredentialError::NoPrincipal.is_mint_failure());
    assert!(CredentialError::MintEmptySecret.is_mint_failure());
    assert!(CredentialError::MintRejected {
        status: 500,
        detail: "boom".to_string()
    }
    .is_mint_failure());
}
