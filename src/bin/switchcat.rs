//! Command-line front end for the switch catalog.
//!
//! Usage:
//!   switchcat --vendor Cisco --min-ports 24 --poe yes
//!   switchcat --keyword campus --include-cli
//!   switchcat --ask "48 port PoE Cisco stackable L3"
//!   switchcat --output json --poe yes
//!   switchcat --catalog my_switches.json --group-by-vendor --include-cli
//!
//! Diagnostics go to stderr and are controlled by `SWITCHCAT_LOG`
//! (an `EnvFilter` directive, default `warn`).

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use switchcat::{
    Criteria, Layer, OutputFormat, QueryRequest, RenderOptions, TriState, load_catalog,
    resolve_catalog_path, run_query,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const ENV_LOG_FILTER: &str = "SWITCHCAT_LOG";

#[derive(Parser, Debug)]
#[command(name = "switchcat", version)]
#[command(about = "Search and explore switch models with example CLI configurations")]
struct Cli {
    /// JSON catalog (array of switches) to use instead of the built-in sample.
    /// Falls back to SWITCHCAT_CATALOG when unset.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Exact vendor match (e.g. Cisco, Juniper), case-insensitive.
    #[arg(long)]
    vendor: Option<String>,
    /// Substring match on the model name.
    #[arg(long)]
    model: Option<String>,
    /// Case-insensitive keyword searched across names, notes, uplinks, and commands.
    #[arg(long)]
    keyword: Option<String>,
    /// Layer capability filter: L2 or L3.
    #[arg(long)]
    layer: Option<Layer>,
    /// Minimum port count (inclusive).
    #[arg(long)]
    min_ports: Option<u32>,
    /// Maximum port count (inclusive).
    #[arg(long)]
    max_ports: Option<u32>,
    /// Filter by Power-over-Ethernet support: yes, no, or any.
    #[arg(long, default_value_t = TriState::Any)]
    poe: TriState,
    /// Filter by managed vs unmanaged: yes, no, or any.
    #[arg(long, default_value_t = TriState::Any)]
    managed: TriState,
    /// Filter by stacking capability: yes, no, or any.
    #[arg(long, default_value_t = TriState::Any)]
    stackable: TriState,
    /// Output format: table or json.
    #[arg(long, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// Include sample CLI configuration snippets in table output.
    #[arg(long)]
    include_cli: bool,
    /// Group table output by vendor.
    #[arg(long)]
    group_by_vendor: bool,
    /// Limit the number of results shown (after filtering).
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,
    /// Free-text question; ignores every filter flag.
    #[arg(long)]
    ask: Option<String>,
}

impl Cli {
    fn request(&self) -> QueryRequest {
        QueryRequest {
            criteria: Criteria {
                vendor: self.vendor.clone(),
                model: self.model.clone(),
                keyword: self.keyword.clone(),
                min_ports: self.min_ports,
                max_ports: self.max_ports,
                layer: self.layer,
                poe: self.poe,
                managed: self.managed,
                stackable: self.stackable,
            },
            limit: self.limit,
            ask: self.ask.clone(),
            render: RenderOptions {
                format: self.output,
                include_cli: self.include_cli,
                group_by_vendor: self.group_by_vendor,
            },
        }
    }
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let catalog_path = resolve_catalog_path(cli.catalog.clone());
    let records = load_catalog(catalog_path.as_deref())?;

    let output = run_query(&records, &cli.request())?;
    println!("{output}");
    Ok(())
}
