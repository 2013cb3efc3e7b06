use clap::Parser;
use program_ingest::{config::Config, db, ingest, rpc::client::RpcClient, validation};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ingest one transaction and the owned-account snapshot for a program.
#[derive(Parser, Debug)]
#[command(name = "program-ingest")]
struct Cli {
    /// Program address whose activity is being ingested
    program_id: String,

    /// Transaction signature to fetch and normalize
    signature: String,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        error!("ingestion failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Reject malformed arguments before any network or storage access
    validation::validate_program_id(&cli.program_id)?;
    validation::validate_signature(&cli.signature)?;

    let config = Config::from_env()?;
    info!("configuration loaded");

    let client = RpcClient::new(&config.solana_rpc_url)?;

    let pool = db::connection::establish_connection(&config.database_url).await?;
    info!("database connection verified");

    // The two pipelines run sequentially, never concurrently
    let ixn_rows =
        ingest::transaction::ingest_transaction(&client, &pool, &cli.program_id, &cli.signature)
            .await?;
    let account_rows = ingest::account::ingest_accounts(&client, &pool, &cli.program_id).await?;

    info!(
        "ingestion complete: {} instruction rows, {} account rows",
        ixn_rows, account_rows
    );

    Ok(())
}
