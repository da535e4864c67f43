use crate::utils::access_token::access_token::{resolve_access_token, Minter, Principal};
use crate::utils::bank_catalog::bank_catalog::BankType;
use crate::utils::config::server_config::ServerConfig;
use crate::utils::errors::import_errors::{ErrCtx as ImportErrCtx, ImportError};
use crate::utils::errors::upload_errors::UploadError;
use crate::utils::import_worker::worker_invocation::{run_worker, worker_argv, WorkerOutcome};
use crate::utils::import_worker::worker_report::parse_worker_report;
use crate::utils::rest_handlers::statement_import_handler::StatementImportReq;
use crate::utils::statement_upload::statement_upload::{
    scratch_file_name, TempStatement, ACCEPTED_MEDIA_TYPE,
};
use chrono::Utc;

/// A validated-in-progress statement import. One instance owns exactly one
/// worker invocation and one staged scratch file.
#[derive(Debug, Clone)]
pub struct StatementImport {
    pub file_name: String,
    pub media_type: String,
    pub content: Vec<u8>,
    pub bank_type: String,
    pub detect_duplicates: bool,
    pub detect_transfers: bool,
}

impl From<StatementImportReq> for StatementImport {
    fn from(req: StatementImportReq) -> Self {
        StatementImport {
            file_name: req.file_name,
            media_type: req.media_type,
            content: req.file,
            bank_type: req.bank_type,
            detect_duplicates: req.detect_duplicates,
            detect_transfers: req.detect_transfers,
        }
    }
}

/// Import result: the five counters plus both raw worker streams for
/// diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub total: u64,
    pub created: u64,
    pub duplicates: u64,
    pub transfers: u64,
    pub errors: u64,
    pub raw_output: String,
    pub raw_error_output: String,
}

impl StatementImport {
    /// Input validation: registered bank code, accepted media type, non-empty
    /// content under the size ceiling. Runs before anything is persisted and
    /// before any credential is resolved.
    pub fn validate(&self, config: &ServerConfig) -> Result<BankType, UploadError> {
        let bank = BankType::from_code(&self.bank_type)
            .ok_or_else(|| UploadError::UnsupportedBank(self.bank_type.clone()))?;

        if self.media_type != ACCEPTED_MEDIA_TYPE {
            return Err(UploadError::UnsupportedMediaType(self.media_type.clone()));
        }
        if self.content.is_empty() {
            return Err(UploadError::EmptyDocument);
        }
        if self.content.len() as u64 > config.max_upload_bytes {
            return Err(UploadError::FileTooLarge {
                size: self.content.len() as u64,
                limit: config.max_upload_bytes,
            });
        }
        Ok(bank)
    }

    /// The whole pipeline: validate, stage, resolve credential, invoke the
    /// worker, interpret its report. The staged file is removed on every exit
    /// path before this returns.
    pub async fn do_process(
        &self,
        config: &ServerConfig,
        minter: &Minter,
        principal: Option<&Principal>,
    ) -> Result<ImportReport, ImportError> {
        let bank = self.validate(config)?;

        let file_name = scratch_file_name(&self.file_name, Utc::now());
        let staged = TempStatement::persist(&config.scratch_dir, &file_name, &self.content)
            .map_err(ImportError::from)
            .ctx("do_process:persist")?;

        let result = self.run_staged(bank, &staged, config, minter, principal).await;
        staged.remove();
        result
    }

    async fn run_staged(
        &self,
        bank: BankType,
        staged: &TempStatement,
        config: &ServerConfig,
        minter: &Minter,
        principal: Option<&Principal>,
    ) -> Result<ImportReport, ImportError> {
        let credential = resolve_access_token(config, minter, principal).await?;

        let mut args = vec![config.worker_script.display().to_string()];
        args.extend(worker_argv(
            bank,
            staged.path(),
            config,
            &credential.token,
            self.detect_duplicates,
            self.detect_transfers,
        ));

        let invocation = run_worker(&config.worker_command, &args, config.worker_timeout).await?;
        println!(
            "✅ Import worker finished: outcome={:?}, stdout={} bytes, stderr={} bytes",
            invocation.outcome,
            invocation.stdout.len(),
            invocation.stderr.len()
        );

        match invocation.outcome {
            WorkerOutcome::Succeeded => {
                let counters = parse_worker_report(&invocation.stdout);
                Ok(ImportReport {
                    total: counters.total,
                    created: counters.created,
                    duplicates: counters.duplicates,
                    transfers: counters.transfers,
                    errors: counters.errors,
                    raw_output: invocation.stdout,
                    raw_error_output: invocation.stderr,
                })
            }
            WorkerOutcome::Failed(code) => Err(ImportError::WorkerFailed {
                code,
                stdout: invocation.stdout,
                stderr: invocation.stderr,
            }),
            WorkerOutcome::TimedOut => Err(ImportError::WorkerTimedOut {
                timeout_secs: config.worker_timeout.as_secs(),
                stderr: invocation.stderr,
            }),
        }
    }
}
