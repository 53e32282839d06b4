//! The status envelope wrapped around every API response.

use serde::{Deserialize, Serialize};

/// The `{status, data, message}` wrapper around every API response.
///
/// `status == 0` means success; any positive value is an error code and
/// `message` explains it.
#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseEnvelope<T> {
    pub status: i64,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    pub fn is_error(&self) -> bool {
        self.status > 0
    }
}
