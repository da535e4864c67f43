use crate::utils::bank_catalog::bank_catalog::BankType;
use crate::utils::config::server_config::ServerConfig;
use crate::utils::errors::worker_errors::WorkerError;
use std::path::Path;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerOutcome {
    Succeeded,
    Failed(i32),
    TimedOut,
}

/// One finished (or killed) worker run: the exact argv, both streams drained,
/// and the unified outcome.
#[derive(Debug)]
pub struct WorkerInvocation {
    pub argv: Vec<String>,
    pub timeout: Duration,
    pub stdout: String,
    pub stderr: String,
    pub outcome: WorkerOutcome,
}

/// Positional worker argument contract, order-significant:
/// bank code, absolute statement path, ledger base URL, access token,
/// detect-duplicates flag, detect-transfers flag.
pub fn worker_argv(
    bank: BankType,
    statement_path: &Path,
    config: &ServerConfig,
    token: &str,
    detect_duplicates: bool,
    detect_transfers: bool,
) -> Vec<String> {
    vec![
        bank.code().to_string(),
        statement_path.display().to_string(),
        config.ledger_base_url.clone(),
        token.to_string(),
        if detect_duplicates { "1" } else { "0" }.to_string(),
        if detect_transfers { "1" } else { "0" }.to_string(),
    ]
}

// A killed worker can leave grandchildren holding the pipe write ends; the
// readers are given this long after the outcome is decided before we take
// whatever has arrived.
const DRAIN_GRACE: Duration = Duration::from_secs(2);

/// Copies a pipe into a shared buffer as output arrives, so partial output
/// survives even when the reader never reaches EOF.
fn drain_pipe<R>(pipe: Option<R>) -> (Arc<Mutex<Vec<u8>>>, tokio::task::JoinHandle<()>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let buf = Arc::new(Mutex::new(Vec::new()));
    let sink = buf.clone();
    let handle = tokio::spawn(async move {
        let Some(mut pipe) = pipe else { return };
        let mut chunk = [0u8; 4096];
        loop {
            match pipe.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => match sink.lock() {
                    Ok(mut guard) => guard.extend_from_slice(&chunk[..n]),
                    Err(_) => break,
                },
            }
        }
    });
    (buf, handle)
}

fn take_buffer(buf: &Arc<Mutex<Vec<u8>>>) -> String {
    let bytes = buf.lock().map(|guard| guard.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Runs the worker to completion or kills it at the timeout. Both output
/// streams are drained even when the child is killed, so diagnostics are
/// never silently lost. The content of the streams is not inspected here.
pub async fn run_worker(
    program: &str,
    args: &[String],
    timeout: Duration,
) -> Result<WorkerInvocation, WorkerError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| WorkerError::SpawnFailure {
            command: program.to_string(),
            source: e,
        })?;

    let (stdout_buf, stdout_task) = drain_pipe(child.stdout.take());
    let (stderr_buf, stderr_task) = drain_pipe(child.stderr.take());

    let outcome = match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => match status.code() {
            Some(0) => WorkerOutcome::Succeeded,
            Some(code) => WorkerOutcome::Failed(code),
            // Killed by a signal before exiting.
            None => WorkerOutcome::Failed(-1),
        },
        Ok(Err(e)) => return Err(WorkerError::WaitFailure(e)),
        Err(_) => {
            //log::warn!("import worker exceeded {}s, killing", timeout.as_secs());
            let _ = child.start_kill();
            let _ = child.wait().await;
            WorkerOutcome::TimedOut
        }
    };

    let _ = tokio::time::timeout(DRAIN_GRACE, stdout_task).await;
    let _ = tokio::time::timeout(DRAIN_GRACE, stderr_task).await;

    Ok(WorkerInvocation {
        argv: args.to_vec(),
        timeout,
        stdout: take_buffer(&stdout_buf),
        stderr: take_buffer(&stderr_buf),
        outcome,
    })
}
