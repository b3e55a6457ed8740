//! Pre-flight checks before talking to the model.

use crate::error::{RecapError, Result};
use crate::llm;

/// Run pre-flight checks for summarizing.
///
/// Returns Ok(()) if the API key is present, or an error with a hint on how to set it.
pub fn check() -> Result<()> {
    llm::api_key().map(|_| ()).map_err(|_| {
        RecapError::Config(format!(
            "{} is missing. Set it with: export {}='...'",
            llm::API_KEY_ENV,
            llm::API_KEY_ENV
        ))
    })
}
