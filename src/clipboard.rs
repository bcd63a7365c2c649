//! System clipboard access for chosen items.

use anyhow::Result;
use arboard::Clipboard;

/// Copy text to the system clipboard
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Normalize pasted text for the editor buffer.
///
/// Terminals deliver pasted line breaks as `\r` or `\r\n`.
pub fn normalize_paste(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
