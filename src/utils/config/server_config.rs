use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Explicit runtime configuration, assembled once in `main` and handed to the
/// pipeline instead of being read from ambient globals.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the ledger API the worker submits transactions to.
    pub ledger_base_url: String,
    /// Statically configured override token for non-interactive operation.
    /// When set, per-principal minting is bypassed entirely.
    pub import_access_token: Option<String>,
    /// Interpreter for the import worker.
    pub worker_command: String,
    /// Worker entry point, passed as the first argument to the interpreter.
    pub worker_script: PathBuf,
    /// Scratch directory for uploaded statements awaiting processing.
    pub scratch_dir: PathBuf,
    pub worker_timeout: Duration,
    pub max_upload_bytes: u64,
    pub max_concurrent_imports: usize,
    pub bind_addr: String,
}

const DEFAULT_WORKER_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;
const DEFAULT_MAX_CONCURRENT_IMPORTS: usize = 8;

impl ServerConfig {
    pub fn from_env() -> Self {
        let scratch_dir = env::var("IMPORT_SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join("temp_statements"));

        ServerConfig {
            ledger_base_url: env::var("LEDGER_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            import_access_token: env::var("IMPORT_ACCESS_TOKEN").ok().filter(|t| !t.is_empty()),
            worker_command: env::var("IMPORT_WORKER_CMD").unwrap_or_else(|_| "python3".to_string()),
            worker_script: env::var("IMPORT_WORKER_SCRIPT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data-importer/firefly_service.py")),
            scratch_dir,
            worker_timeout: Duration::from_secs(DEFAULT_WORKER_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_concurrent_imports: DEFAULT_MAX_CONCURRENT_IMPORTS,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3090".to_string()),
        }
    }
}
