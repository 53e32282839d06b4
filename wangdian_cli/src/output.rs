use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use wangdian_api::types::Warehouse;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct WarehouseRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    warehouse_no: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    warehouse_type: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Modified")]
    #[serde(rename = "Modified")]
    modified: String,
}

fn build_warehouse_rows(warehouses: &[Warehouse]) -> Vec<WarehouseRow> {
    warehouses
        .iter()
        .map(|w| WarehouseRow {
            warehouse_no: w.warehouse_no.clone().unwrap_or_default(),
            name: w.name.clone().unwrap_or_default(),
            warehouse_type: w
                .warehouse_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
            location: format_location(w),
            status: if w.is_disabled() { "disabled" } else { "active" }.to_string(),
            modified: w
                .modified_at()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn format_location(w: &Warehouse) -> String {
    [&w.province, &w.city, &w.district]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_warehouses_table(warehouses: &[Warehouse]) {
    println!("{}", Table::new(build_warehouse_rows(warehouses)));
}

pub fn print_warehouses_markdown(warehouses: &[Warehouse]) {
    let mut table = Table::new(build_warehouse_rows(warehouses));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_warehouses_csv(warehouses: &[Warehouse]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_warehouse_rows(warehouses) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wangdian_api::types::{ResponseEnvelope, WarehousePage};

    fn load_warehouses_fixture() -> Vec<Warehouse> {
        let json_str = include_str!("../../wangdian_api/tests/fixtures/warehouses.json");
        let resp: ResponseEnvelope<WarehousePage> = serde_json::from_str(json_str).unwrap();
        resp.data.unwrap().details
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_build_warehouse_rows() {
        let rows = build_warehouse_rows(&load_warehouses_fixture());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].warehouse_no, "WH001");
        assert_eq!(rows[0].location, "上海 上海市 浦东新区");
        assert_eq!(rows[0].status, "active");
        assert_eq!(rows[0].modified, "2023-06-01 12:30");
        assert_eq!(rows[1].status, "disabled");
        assert_eq!(rows[1].location, "");
        assert_eq!(rows[2].warehouse_type, "11");
        assert_eq!(rows[2].modified, "");
    }

    #[test]
    fn test_warehouse_csv_headers() {
        let csv = csv_from_rows(&build_warehouse_rows(&load_warehouses_fixture()));
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Code,Name,Type,Location,Status,Modified");
        assert_eq!(csv.lines().count(), 4);
    }

    #[test]
    fn test_markdown_table_has_pipes() {
        let mut table = Table::new(build_warehouse_rows(&load_warehouses_fixture()));
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.lines().all(|line| line.starts_with('|')));
        assert!(rendered.contains("WH002"));
    }
}
