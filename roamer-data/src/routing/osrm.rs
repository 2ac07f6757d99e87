//! OSRM Table API response types.
//!
//! With `annotations=duration,distance` the Table service returns two
//! square matrices indexed by the order of the requested coordinates.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#table-service>

use serde::Deserialize;

/// A square matrix of optional cells; `None` marks an unreachable pair.
pub type Matrix = Vec<Vec<Option<f64>>>;

/// OSRM Table API response.
#[derive(Debug, Deserialize)]
pub struct TableResponse {
    /// Status code, `"Ok"` on success.
    pub code: String,

    /// Error description when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Travel times in seconds.
    pub durations: Option<Matrix>,

    /// Travel distances in metres.
    pub distances: Option<Matrix>,
}

impl TableResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}
