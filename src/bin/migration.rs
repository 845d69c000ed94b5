use clap::Parser;
use tracing::{error, info};

use daedalosys::{config, db};

/// Creates the daedalosys schema and exits.
#[derive(Debug, Parser)]
#[command(name = "migration", version)]
struct Args {
    /// Database URL; falls back to the loaded configuration
    #[arg(long)]
    database_url: Option<String>,

    /// Record applied steps in the migration history table instead of
    /// creating missing tables directly
    #[arg(long)]
    tracked: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut cfg = config::load_config()?;
    config::init_tracing(cfg.log_level(), cfg.log_json);

    if let Some(url) = args.database_url {
        cfg.database_url = url;
    }

    info!("Starting database migration");
    let pool = db::establish_connection_from_app_config(&cfg).await?;

    let result = if args.tracked {
        db::run_migrations(&pool).await
    } else {
        db::ensure_schema(&pool).await
    };
    if let Err(e) = &result {
        error!("Migration failed: {}", e);
    }
    result?;

    let missing = db::missing_tables(&pool).await?;
    info!(
        tables = migrations::TABLES.len() - missing.len(),
        "Migration completed successfully"
    );

    db::close_pool(pool).await?;
    Ok(())
}
