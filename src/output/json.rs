//! JSON output.

use crate::models::NetworkInfo;

/// Pretty JSON of `info`; `null` when there is no result.
pub fn render_json(info: Option<&NetworkInfo>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&info)
}
