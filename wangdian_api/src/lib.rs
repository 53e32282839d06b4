mod client;
mod config;
mod errors;
mod pager;
pub mod signing;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_API_URL};
pub use self::errors::Error;
pub use self::pager::Pager;
