use crate::utils::bank_catalog::bank_catalog::BankType;
use crate::utils::config::server_config::ServerConfig;
use crate::utils::errors::worker_errors::WorkerError;
use crate::utils::import_worker::worker_invocation::{run_worker, worker_argv, WorkerOutcome};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

fn sh(script: &str) -> Vec<String> {
    vec!["-c".to_string(), script.to_string()]
}

#[tokio::test]
async fn successful_worker_captures_stdout() {
    let invocation = run_worker("/bin/sh", &sh("echo 'total : 3'"), Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(invocation.outcome, WorkerOutcome::Succeeded);
    assert!(invocation.stdout.contains("total : 3"));
    assert!(invocation.stderr.is_empty());
}

#[tokio::test]
async fn nonzero_exit_is_reported_with_drained_stderr() {
    let invocation = run_worker(
        "/bin/sh",
        &sh("echo 'bank format mismatch' >&2; exit 3"),
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    assert_eq!(invocation.outcome, WorkerOutcome::Failed(3));
    assert!(invocation.stderr.contains("bank format mismatch"));
}

#[tokio::test]
async fn timeout_kills_the_child_and_keeps_prior_output() {
    let started = Instant::now();
    let invocation = run_worker(
        "/bin/sh",
        &sh("echo early; sleep 30"),
        Duration::from_millis(500),
    )
    .await
    .unwrap();

    assert_eq!(invocation.outcome, WorkerOutcome::TimedOut);
    // The child was killed, not waited for in full.
    assert!(started.elapsed() < Duration::from_secs(10));
    // Output produced before the kill is still drained.
    assert!(invocation.stdout.contains("early"));
}

#[tokio::test]
async fn missing_program_is_a_spawn_failure() {
    let err = run_worker(
        "/nonexistent-import-worker",
        &sh("echo nope"),
        Duration::from_secs(1),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, WorkerError::SpawnFailure { .. }));
}

#[test]
fn argv_contract_is_positional_and_order_significant() {
    let config = ServerConfig {
        ledger_base_url: "http://ledger:8080".to_string(),
        import_access_token: None,
        worker_command: "python3".to_string(),
        worker_script: PathBuf::from("data-importer/firefly_service.py"),
        scratch_dir: std::env::temp_dir(),
        worker_timeout: Duration::from_secs(60),
        max_upload_bytes: 20 * 1024 * 1024,
        max_concurrent_imports: 4,
        bind_addr: "127.0.0.1:0".to_string(),
    };

    let argv = worker_argv(
        BankType::IngOrange,
        Path::new("/tmp/temp_statements/1_stmt.pdf"),
        &config,
        "secret-token",
        true,
        false,
    );

    assert_eq!(
        argv,
        vec![
            "ing_orange",
            "/tmp/temp_statements/1_stmt.pdf",
            "http://ledger:8080",
            "secret-token",
            "1",
            "0",
        ]
    );
}
