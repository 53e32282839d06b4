mod envelope;
pub use self::envelope::ResponseEnvelope;

mod warehouse;
pub use self::warehouse::{Warehouse, WarehousePage, WarehouseQuery, QUERY_WAREHOUSE_METHOD};
