//! Warehouse records returned by `setting.Warehouse.queryWarehouse`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Remote method name for the warehouse listing.
pub const QUERY_WAREHOUSE_METHOD: &str = "setting.Warehouse.queryWarehouse";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filter for the warehouse listing.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct WarehouseQuery {
    /// `1` hides warehouses that were deleted, `0` lists them too.
    pub hide_delete: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_no: Option<String>,
}

impl WarehouseQuery {
    /// Lists only warehouses that have not been deleted.
    pub fn active_only() -> Self {
        Self {
            hide_delete: 1,
            warehouse_no: None,
        }
    }

    /// Restricts the listing to one warehouse code.
    pub fn with_warehouse_no(mut self, warehouse_no: &str) -> Self {
        self.warehouse_no = Some(warehouse_no.to_string());
        self
    }
}

/// One page of warehouses.
#[derive(Serialize, Deserialize, Debug)]
pub struct WarehousePage {
    /// Present when the pager asked for `calc_total`.
    pub total_count: Option<i64>,
    #[serde(default)]
    pub details: Vec<Warehouse>,
}

/// A warehouse as configured in the WangDian account.
#[derive(Serialize, Deserialize, Debug)]
pub struct Warehouse {
    pub warehouse_id: Option<i64>,
    /// Warehouse code, unique within the account.
    pub warehouse_no: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub warehouse_type: Option<i64>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub mobile: Option<String>,
    pub is_disabled: Option<i64>,
    /// Last modification time as `YYYY-MM-DD HH:MM:SS`, server local time.
    pub modified: Option<String>,
    /// Fields this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Warehouse {
    pub fn is_disabled(&self) -> bool {
        self.is_disabled.unwrap_or(0) != 0
    }

    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        self.modified
            .as_deref()
            .and_then(|s| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok())
    }
}
