mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vitrine_core::{AppConfig, Category, ConfigError, GroupingMode, PriceBand, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "vitrine")]
#[command(about = "Abrasives catalog loader and variant grouping")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Count grouping signals in a product file and show the strategy they select
    Scan {
        /// Product list (bare array or any supported envelope)
        #[arg(long)]
        input: PathBuf,
    },
    /// Group a product file and print the result as JSON
    Group {
        #[arg(long)]
        input: PathBuf,
        /// Grouping entry point (sku-prefix or adaptive); defaults to VITRINE_GROUPING_MODE
        #[arg(long)]
        mode: Option<GroupingMode>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Group, filter, and print one page of the storefront catalog
    Browse {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        mode: Option<GroupingMode>,
        /// herramientas, equipos, componentes, software or outros
        #[arg(long)]
        category: Option<Category>,
        /// 0-100, 100-300, 300-500 or 500+
        #[arg(long)]
        price: Option<PriceBand>,
        /// Case-insensitive match on name, description or SKU
        #[arg(long)]
        search: Option<String>,
        /// name, price-low, price-high or stock
        #[arg(long, default_value = "name")]
        sort: SortOrder,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Products per page; defaults to VITRINE_ITEMS_PER_PAGE
        #[arg(long)]
        per_page: Option<usize>,
    },
    /// Fetch the catalog from the ERP, group it, and write JSON
    Fetch {
        #[arg(long)]
        mode: Option<GroupingMode>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
}

/// Environment settings; only the commands that read them fail on a bad value.
type LoadedConfig = Result<AppConfig, ConfigError>;

fn settings(config: &LoadedConfig) -> anyhow::Result<&AppConfig> {
    config
        .as_ref()
        .map_err(|err| anyhow::anyhow!("invalid configuration: {err}"))
}

fn resolve_mode(flag: Option<GroupingMode>, config: &LoadedConfig) -> anyhow::Result<GroupingMode> {
    match flag {
        Some(mode) => Ok(mode),
        None => Ok(settings(config)?.grouping_mode),
    }
}

fn resolve_per_page(flag: Option<usize>, config: &LoadedConfig) -> anyhow::Result<usize> {
    match flag {
        Some(per_page) => Ok(per_page),
        None => Ok(settings(config)?.items_per_page),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = vitrine_core::load_app_config();
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan { input } => commands::run_scan(&input).await,
        Commands::Group {
            input,
            mode,
            pretty,
        } => {
            let mode = resolve_mode(mode, &config)?;
            commands::run_group(&input, mode, pretty).await
        }
        Commands::Browse {
            input,
            mode,
            category,
            price,
            search,
            sort,
            page,
            per_page,
        } => {
            let filter = vitrine_core::ShopFilter {
                category,
                price_band: price,
                search,
                sort,
            };
            let options = commands::BrowseOptions {
                mode: resolve_mode(mode, &config)?,
                filter,
                page,
                per_page: resolve_per_page(per_page, &config)?,
            };
            commands::run_browse(&input, &options).await
        }
        Commands::Fetch {
            mode,
            output,
            pretty,
        } => {
            let config = settings(&config)?;
            let mode = mode.unwrap_or(config.grouping_mode);
            commands::run_fetch(config, mode, output.as_deref(), pretty).await
        }
    }
}

#[cfg(test)]
mod tests;
