//! Default values that do not belong to a single focused subsystem.

use crate::layout_constants::TRANSIENT_ERROR_TIMEOUT;

pub fn transient_error_timeout_ms() -> u64 {
    TRANSIENT_ERROR_TIMEOUT.as_millis() as u64
}

pub fn github_api_base() -> String {
    "https://api.github.com".to_string()
}
