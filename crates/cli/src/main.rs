mod cli;
mod logging;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use tabrs_core::config::constants;
use tabrs_store::commands::{build_command, save_tabset, update_tabset};
use tabrs_store::{JsonFileStore, TabSetStore};

#[tokio::main]
async fn main() {
    constants::init_constants();

    let log_file = logging::create_log_file().expect("Failed to create log file");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .with(
            fmt::layer()
                .with_writer(log_file)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(EnvFilter::new("debug")),
        )
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Cli::parse();
    match args.cmd {
        Commands::Build {
            source,
            watch,
            output_path,
        } => {
            build_command(source, output_path, watch).await?;
        }
        Commands::Save {
            source,
            title,
            store,
        } => {
            let store = JsonFileStore::new(store);
            let record = save_tabset(&store, &source, title).await?;
            info!(
                "Saved tab set '{}' ({} tabs) to {:?}",
                record.title,
                record.tabs.len(),
                store.path()
            );
            println!("{}", record.id);
        }
        Commands::List { store } => {
            let store = JsonFileStore::new(store);
            let rows = store.list().await?;
            if rows.is_empty() {
                info!("Store {:?} is empty", store.path());
            }
            for row in rows {
                println!(
                    "{}  {}  ({} tabs, updated {})",
                    row.id,
                    row.title,
                    row.tabs.len(),
                    row.updated_at
                );
            }
        }
        Commands::Show { id, html, store } => {
            let store = JsonFileStore::new(store);
            let record = store.get(&id).await?;
            if html {
                println!("{}", record.html);
            } else {
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
        }
        Commands::Update {
            id,
            source,
            title,
            store,
        } => {
            let store = JsonFileStore::new(store);
            let record = update_tabset(&store, &id, &source, title).await?;
            info!(
                "Updated tab set '{}' ({} tabs)",
                record.title,
                record.tabs.len()
            );
        }
        Commands::Delete { id, store } => {
            let store = JsonFileStore::new(store);
            store.delete(&id).await?;
            info!("Deleted tab set {}", id);
        }
    }
    Ok(())
}
