//! Provider timestamp parsing.

use chrono::NaiveDateTime;

use hyperlet_core::error::{BridgeError, Result};

/// The only layout the provider emits.
const TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parse a provider timestamp into unix seconds.
///
/// An empty string means "never" and maps to 0, the Unix epoch. This is
/// deliberately not a zero calendar date in local time, whose unix value
/// depends on the host timezone. Anything else must match
/// `YYYY-MM-DDThh:mm:ssZ` exactly.
pub fn parse_timestamp(value: &str) -> Result<i64> {
    if value.is_empty() {
        return Ok(0);
    }

    NaiveDateTime::parse_from_str(value, TIME_LAYOUT)
        .map(|t| t.and_utc().timestamp())
        .map_err(|e| BridgeError::Validation(format!("invalid timestamp '{}': {}", value, e)))
}
