//! System clipboard integration.

use arboard::Clipboard;

use crate::error::CliError;

/// Copy a single line of text to the system clipboard.
///
/// Fails when no clipboard is available (e.g. a headless session); the
/// failure maps to the same non-zero exit as any other operation error.
pub fn copy_line(text: &str) -> Result<(), CliError> {
    let mut clipboard = Clipboard::new().map_err(|e| CliError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| CliError::Clipboard(e.to_string()))
}
