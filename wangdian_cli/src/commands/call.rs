use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use wangdian_api::{Client, Pager};

use crate::output::print_json;

#[derive(Args)]
pub struct CallArgs {
    /// Remote method name (e.g. setting.Warehouse.queryWarehouse)
    pub method: String,

    /// Request parameters as a JSON document
    #[arg(long, default_value = "{}")]
    pub params: String,
}

#[derive(Args)]
pub struct PageCallArgs {
    /// Remote method name (e.g. setting.Warehouse.queryWarehouse)
    pub method: String,

    /// Request parameters as a JSON object; sent wrapped in a one-element array
    #[arg(long, default_value = "{}")]
    pub params: String,

    /// Page number, starting at 0
    #[arg(long, default_value = "0")]
    pub page_no: u32,

    /// Rows per page
    #[arg(long, default_value = "10")]
    pub page_size: u32,

    /// Do not ask the server to count total rows
    #[arg(long)]
    pub no_total: bool,
}

pub async fn run_call(args: &CallArgs, client: &Client) -> Result<()> {
    let params = parse_params(&args.params)?;
    let data: Value = client.call(&args.method, &params).await?;
    print_json(&data);
    Ok(())
}

pub async fn run_page_call(args: &PageCallArgs, client: &Client) -> Result<()> {
    let params = parse_params(&args.params)?;
    let pager = Pager::new(args.page_no, args.page_size, !args.no_total);
    let data: Value = client.page_call(&args.method, &pager, &params).await?;
    print_json(&data);
    Ok(())
}

fn parse_params(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("--params is not valid JSON: {}", raw))
}
