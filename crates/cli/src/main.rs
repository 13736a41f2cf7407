use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use model::config::QueryConfig;
use tracing::{Level, info};

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "hqlify", version = "0.1.0", about = "Declarative HQL query generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config, output } => {
            let config = load_config(&config).await?;
            let query = query_builder::build_query(&config)?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, &query).await?;
                    info!("Wrote query to {path}");
                }
                None => println!("{query}"),
            }
        }
        Commands::Plan { config } => {
            let config = load_config(&config).await?;
            let select = query_builder::plan::plan(&config)?;
            let json = serde_json::to_string_pretty(&select).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
    }

    Ok(())
}

async fn load_config(path: &str) -> Result<QueryConfig, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let config = serde_json::from_str(&source)?;
    Ok(config)
}
