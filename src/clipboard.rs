//! Clipboard Helper
//!
//! Copies text via the async clipboard API, falling back to a hidden textarea
//! on browsers or origins where that API is unavailable.

use crate::error::PlatformError;
use crate::platform::Platform;

/// Copy `text`; fails only when both the API and the fallback fail
pub async fn copy_to_clipboard(platform: &dyn Platform, text: &str) -> Result<(), PlatformError> {
    match platform.write_clipboard(text).await {
        Ok(()) => Ok(()),
        Err(api_err) => {
            log::debug!("[Clipboard] API copy failed ({}), using textarea fallback", api_err);
            platform.copy_with_textarea(text).map_err(|e| {
                log::error!("[Clipboard] Failed to copy text: {}", e);
                e
            })
        }
    }
}
