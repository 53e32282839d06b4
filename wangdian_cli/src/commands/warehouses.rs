use anyhow::Result;
use clap::Args;
use wangdian_api::types::WarehouseQuery;
use wangdian_api::{Client, Pager};

use crate::output::{
    print_json, print_warehouses_csv, print_warehouses_markdown, print_warehouses_table,
    OutputFormat,
};

#[derive(Args)]
pub struct WarehousesArgs {
    /// Page number, starting at 0
    #[arg(long, default_value = "0")]
    pub page_no: u32,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: u32,

    /// Also list deleted warehouses
    #[arg(long)]
    pub include_deleted: bool,

    /// Only the warehouse with this code
    #[arg(long)]
    pub warehouse_no: Option<String>,
}

pub async fn run(args: &WarehousesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = if args.include_deleted {
        WarehouseQuery::default()
    } else {
        WarehouseQuery::active_only()
    };
    if let Some(warehouse_no) = &args.warehouse_no {
        query = query.with_warehouse_no(warehouse_no);
    }

    let pager = Pager::default()
        .with_page_no(args.page_no)
        .with_page_size(args.page_size);
    let page = client.query_warehouses(&pager, &query).await?;

    match format {
        OutputFormat::Table => print_warehouses_table(&page.details),
        OutputFormat::Json => print_json(&page),
        OutputFormat::Csv => print_warehouses_csv(&page.details)?,
        OutputFormat::Markdown => print_warehouses_markdown(&page.details),
    }

    if let Some(total) = page.total_count {
        eprintln!(
            "Page {}: {} of {} warehouses",
            args.page_no,
            page.details.len(),
            total
        );
    }
    Ok(())
}
