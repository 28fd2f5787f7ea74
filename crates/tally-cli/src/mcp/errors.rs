//! Error conversion for MCP tool results

use rmcp::ErrorData;
use tally_core::TrackerError;

/// Convert a tracker error into an MCP error.
///
/// Validation and lookup failures are the caller's fault and map to
/// `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        TrackerError::InvalidInput { .. }
        | TrackerError::TaskNotFound { .. }
        | TrackerError::HabitNotFound { .. }
        | TrackerError::BookmarkNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
