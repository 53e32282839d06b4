use chrono::NaiveDate;
use serde_json::Value;
use wangdian_api::types::{ResponseEnvelope, WarehousePage, WarehouseQuery};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_warehouses_full() {
    let json = load_fixture("warehouses.json");
    let resp: ResponseEnvelope<WarehousePage> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.status, 0);
    assert!(!resp.is_error());
    assert!(resp.message.is_none());

    let page = resp.data.unwrap();
    assert_eq!(page.total_count, Some(5));
    assert_eq!(page.details.len(), 3);

    let main = &page.details[0];
    assert_eq!(main.warehouse_id, Some(1));
    assert_eq!(main.warehouse_type, Some(1));
    assert_eq!(main.city.as_deref(), Some("上海市"));
    assert!(!main.is_disabled());
    assert_eq!(
        main.modified_at(),
        NaiveDate::from_ymd_opt(2023, 6, 1).and_then(|d| d.and_hms_opt(12, 30, 0))
    );
    assert_eq!(main.extra.get("remark"), Some(&Value::from("default")));

    let returns = &page.details[1];
    assert!(returns.is_disabled());
    assert!(returns.province.is_none());

    let canton = &page.details[2];
    assert_eq!(canton.warehouse_type, Some(11));
    assert!(canton.modified_at().is_none());
}

#[test]
fn deserialize_warehouses_empty() {
    let json = load_fixture("warehouses_empty.json");
    let resp: ResponseEnvelope<WarehousePage> = serde_json::from_str(&json).unwrap();
    let page = resp.data.unwrap();
    assert!(page.details.is_empty());
    assert!(page.total_count.is_none());
}

#[test]
fn deserialize_remote_error() {
    let json = load_fixture("remote_error.json");
    let resp: ResponseEnvelope<Value> = serde_json::from_str(&json).unwrap();
    assert!(resp.is_error());
    assert_eq!(resp.status, 5);
    assert_eq!(resp.message.as_deref(), Some("bad sid"));
    assert!(resp.data.is_none());
}

#[test]
fn serialize_warehouse_query() {
    let query = WarehouseQuery::default();
    assert_eq!(serde_json::to_string(&query).unwrap(), r#"{"hide_delete":0}"#);

    let query = WarehouseQuery::active_only().with_warehouse_no("WH001");
    assert_eq!(
        serde_json::to_string(&query).unwrap(),
        r#"{"hide_delete":1,"warehouse_no":"WH001"}"#
    );
}
