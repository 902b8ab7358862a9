//! Request and response bodies for the summary endpoints.

pub mod incidents;
pub mod traffic;
pub mod weather;

pub use incidents::{IncidentRecord, IncidentSet};
pub use traffic::{TrafficReading, TrafficRequest};
pub use weather::{TimeValue, WeatherReading, WeatherRequest};

use serde::{Deserialize, Serialize};

/// Body returned by every summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Body returned by the liveness endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeResponse {
    pub message: String,
}
