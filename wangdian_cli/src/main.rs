mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wangdian_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "wangdian")]
#[command(about = "Call the WangDian warehouse-management open API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API endpoint, overriding WANGDIAN_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke any remote method and print its data as JSON
    Call(commands::call::CallArgs),
    /// Invoke a paginated remote method and print its data as JSON
    PageCall(commands::call::PageCallArgs),
    /// List warehouses
    Warehouses(commands::warehouses::WarehousesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wangdian_api=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url)?;
    }
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Call(args) => commands::call::run_call(args, &client).await?,
        Commands::PageCall(args) => commands::call::run_page_call(args, &client).await?,
        Commands::Warehouses(args) => commands::warehouses::run(args, &client, &format).await?,
    }

    Ok(())
}
