//! Prompt templates sent to the summarization model.
//!
//! Every renderer is a pure function of its input: the same reading always
//! yields byte-identical prompt text.

mod incidents;
mod traffic;
mod weather;

pub use incidents::render_incidents_prompt;
pub use traffic::render_traffic_prompt;
pub use weather::render_weather_prompt;

use serde_json::Value;

/// Text written in place of a value the caller did not send.
pub const MISSING_VALUE: &str = "None";

/// Render a loosely typed field: text unquoted, booleans as `True`/`False`,
/// numbers as received, absent or `null` as [`MISSING_VALUE`].
fn describe(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
