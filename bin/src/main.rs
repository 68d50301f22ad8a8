//! Fundus CLI binary.
//!
//! Loads a ticker's annual statements and prints the dashboard model.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{chart::ChartArg, export::ExportFormat, table::StatementArg};
use fundus_fmp::{DATA_ROOT_ENV, DEFAULT_DATA_ROOT};
use fundus_metrics::{FormatConfig, Formatter, FractionPolicy};
use std::{path::PathBuf, process};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundus")]
#[command(about = "Annual statement metrics and dashboards", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory or http(s) base URL holding `{TICKER}/*_annual.json`
    #[arg(long, global = true, env = DATA_ROOT_ENV, default_value = DEFAULT_DATA_ROOT)]
    data_root: String,

    /// Show two decimals for abbreviated values below 10 (e.g. $1.23M)
    #[arg(long, global = true)]
    decimals_below_ten: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show key metrics for the latest year
    Summary {
        /// Ticker symbol
        ticker: String,
    },

    /// Show statement and ratio tables, latest year first
    Table {
        /// Ticker symbol
        ticker: String,

        /// Which table to show
        #[arg(short, long, value_enum, default_value_t = StatementArg::All)]
        statement: StatementArg,
    },

    /// Show chart series by year
    Chart {
        /// Ticker symbol
        ticker: String,

        /// Which chart to show
        #[arg(short, long, value_enum, default_value_t = ChartArg::Revenue)]
        chart: ChartArg,
    },

    /// Export the whole dashboard model
    Export {
        /// Ticker symbol
        ticker: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    const fn formatter(&self) -> Formatter {
        let fraction_policy = if self.decimals_below_ten {
            FractionPolicy::TwoBelowTen
        } else {
            FractionPolicy::Whole
        };
        Formatter::new(FormatConfig { fraction_policy })
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // .env must be loaded before parsing so clap sees FUNDUS_DATA_ROOT
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let fmt = cli.formatter();

    match cli.command {
        Commands::Summary { ticker } => {
            cmd::summary::show_summary(&cli.data_root, &ticker, &fmt).await?;
        }
        Commands::Table { ticker, statement } => {
            cmd::table::show_tables(&cli.data_root, &ticker, statement, &fmt).await?;
        }
        Commands::Chart { ticker, chart } => {
            cmd::chart::show_chart(&cli.data_root, &ticker, chart, &fmt).await?;
        }
        Commands::Export {
            ticker,
            format,
            output,
        } => {
            cmd::export::export(&cli.data_root, &ticker, format, output.as_deref(), &fmt).await?;
        }
    }

    Ok(())
}
