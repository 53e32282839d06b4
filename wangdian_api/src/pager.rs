//! Pagination parameters for list methods.

use crate::signing::RequestParams;
use crate::Error;

/// Page selection for paginated methods.
///
/// Pages are 0-indexed. `calc_total` asks the server to include a total row
/// count in the response, which costs an extra query on their side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page_no: u32,
    page_size: u32,
    calc_total: bool,
}

impl Default for Pager {
    fn default() -> Pager {
        Pager {
            page_no: 0,
            page_size: 10,
            calc_total: true,
        }
    }
}

impl Pager {
    pub fn new(page_no: u32, page_size: u32, calc_total: bool) -> Self {
        Self {
            page_no,
            page_size,
            calc_total,
        }
    }

    /// Sets the page number (0-indexed).
    pub fn with_page_no(mut self, page_no: u32) -> Self {
        self.page_no = page_no;
        self
    }

    /// Sets the number of rows per page. Must be positive.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Toggles total-count calculation.
    pub fn with_calc_total(mut self, calc_total: bool) -> Self {
        self.calc_total = calc_total;
        self
    }

    pub fn page_no(&self) -> u32 {
        self.page_no
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn calc_total(&self) -> bool {
        self.calc_total
    }

    /// The wire form of `calc_total`: `1` or `0`.
    pub fn calc_total_flag(&self) -> u8 {
        u8::from(self.calc_total)
    }

    /// Appends `page_no`, `page_size` and `calc_total` to the signed parameters.
    pub fn add_to_params(&self, params: &mut RequestParams) -> Result<(), Error> {
        if self.page_size == 0 {
            return Err(Error::InvalidPager(
                "page size must be positive".to_string(),
            ));
        }
        params.push("page_no", self.page_no.to_string());
        params.push("page_size", self.page_size.to_string());
        params.push("calc_total", self.calc_total_flag().to_string());
        Ok(())
    }
}
