use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use museum_visitors::config::Config;
use museum_visitors::dashboard::format_thousands;
use museum_visitors::logging;
use museum_visitors::metrics::init_metrics;
use museum_visitors::pipeline::{get_museum_dataset, make_predictions, AppContext};
use museum_visitors::server::{start_server, ServerState};
use museum_visitors::table::StaticPageFetcher;
use museum_visitors::types::CleanedDataset;

#[derive(Parser)]
#[command(name = "museum_visitors")]
#[command(about = "Most-visited museums vs. city population")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (default: museums.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference city CSV with city_ascii, iso2 and population columns
    #[arg(long, global = true)]
    reference_csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the predict endpoint and the dashboard
    Serve {
        #[arg(long)]
        port: Option<u16>,
        /// Expose Prometheus metrics on this port
        #[arg(long)]
        metrics_port: Option<u16>,
    },
    /// Build and print the cleaned museums table
    Table {
        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
        /// Read the museums page from a saved HTML file instead of fetching it
        #[arg(long)]
        html_file: Option<PathBuf>,
    },
    /// Fit the model and predict visitors for comma-separated populations
    Predict {
        #[arg(long)]
        pops: Option<String>,
        #[arg(long)]
        html_file: Option<PathBuf>,
    },
}

fn context(config: &Config, html_file: Option<PathBuf>) -> anyhow::Result<AppContext> {
    let ctx = AppContext::from_config(config).with_context(|| {
        format!(
            "loading reference table from {}",
            config.reference_csv.display()
        )
    })?;
    Ok(match html_file {
        Some(path) => ctx.with_fetcher(Arc::new(StaticPageFetcher::from_file(&path)?)),
        None => ctx,
    })
}

async fn build_dataset(ctx: AppContext) -> anyhow::Result<CleanedDataset> {
    let dataset = tokio::task::spawn_blocking(move || get_museum_dataset(&ctx)).await??;
    Ok(dataset)
}

fn print_dataset(dataset: &CleanedDataset) {
    println!(
        "{:<4} {:<48} {:>12} {:<20} {:<4} {:>12} {:>8}",
        "#", "Name", "Visitors", "City", "ISO", "Population", "Ratio"
    );
    for (idx, record) in dataset.iter().enumerate() {
        println!(
            "{:<4} {:<48} {:>12} {:<20} {:<4} {:>12} {:>8.4}",
            idx,
            record.name,
            format_thousands(record.visitors.round() as i64),
            record.city,
            record.country_code.as_deref().unwrap_or("-"),
            format_thousands(record.population),
            record.ratio
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.reference_csv {
        config.reference_csv = path;
    }

    match cli.command {
        Commands::Serve { port, metrics_port } => {
            let port = port.unwrap_or(config.server.port);
            if let Some(metrics_port) = metrics_port.or(config.server.metrics_port) {
                init_metrics(metrics_port);
            }

            let state = Arc::new(ServerState {
                ctx: context(&config, None)?,
                default_populations: config.server.default_populations.clone(),
            });
            start_server(state, port)
                .await
                .map_err(|e| anyhow::anyhow!("server error: {}", e))?;
        }
        Commands::Table { json, html_file } => {
            let dataset = build_dataset(context(&config, html_file)?).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dataset)?);
            } else {
                print_dataset(&dataset);
            }
        }
        Commands::Predict { pops, html_file } => {
            let pops = pops.unwrap_or_else(|| config.server.default_populations.clone());
            let dataset = build_dataset(context(&config, html_file)?).await?;
            let report = make_predictions(&dataset, &pops)?;
            info!(rows = dataset.len(), "Predictions ready");
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
