//! Clipboard handling for the share shortcut

use arboard::Clipboard;

use crate::error::Result;

/// Copy the page link to the system clipboard
pub fn copy_link(url: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(url.to_string())?;
    Ok(())
}

/// Build the shareable link for a language, e.g. `https://host/ko`
pub fn localized_link(base: &str, language_code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), language_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_link() {
        assert_eq!(
            localized_link("https://example.org/", "ko"),
            "https://example.org/ko"
        );
        assert_eq!(localized_link("https://example.org", "en"), "https://example.org/en");
    }
}
