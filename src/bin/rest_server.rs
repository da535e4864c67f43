use libs::utils::access_token::access_token::{LedgerTokenMinter, Minter};
use libs::utils::appstate::appstate::{create_app, AppState};
use libs::utils::config::server_config::ServerConfig;

use std::sync::Arc;
use tokio::sync::Semaphore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("statement import server");

    let config = ServerConfig::from_env();
    println!(
        "✅ Config: ledger={}, worker={} {}, scratch_dir={}",
        config.ledger_base_url,
        config.worker_command,
        config.worker_script.display(),
        config.scratch_dir.display()
    );
    if config.import_access_token.is_some() {
        println!("✅ Using configured import access token (minting bypassed).");
    }

    let minter = match LedgerTokenMinter::new(&config.ledger_base_url) {
        Ok(m) => Minter::Ledger(m),
        Err(err) => {
            eprintln!("❌ Token minter initialization failed: {err}");
            std::process::exit(1);
        }
    };

    let bind_addr = config.bind_addr.clone();
    let app_state = Arc::new(AppState {
        import_limiter: Arc::new(Semaphore::new(config.max_concurrent_imports)),
        minter,
        config,
    });

    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();

    Ok(())
}
