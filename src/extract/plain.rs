// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Plain text and legacy Word decoders

use std::path::Path;
use tracing::info;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::TextDecoder;
use crate::Result;

/// UTF-8 text files; undecodable bytes are dropped
pub struct PlainTextDecoder;

impl TextDecoder for PlainTextDecoder {
    fn name(&self) -> &'static str {
        "text"
    }

    fn decode(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(decode_utf8_ignoring_errors(&bytes))
    }
}

/// Legacy binary `.doc` salvage.
///
/// This is not a Word parser. It keeps whatever runs of the file happen to
/// decode as UTF-8 and strips non-printable characters, which recovers plain ASCII
/// text from many simple documents and produces noise for the rest.
pub struct LegacyDocDecoder;

impl TextDecoder for LegacyDocDecoder {
    fn name(&self) -> &'static str {
        "doc-salvage"
    }

    fn decode(&self, path: &Path) -> Result<String> {
        info!(
            ".doc format not fully supported for {:?}, trying as text",
            path.file_name().unwrap_or_default()
        );
        let bytes = std::fs::read(path)?;
        Ok(salvage_text(&bytes))
    }
}

/// Decode UTF-8, silently skipping invalid sequences
pub fn decode_utf8_ignoring_errors(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Decode as UTF-8 and keep only printable or whitespace characters
pub fn salvage_text(bytes: &[u8]) -> String {
    decode_utf8_ignoring_errors(bytes)
        .chars()
        .filter(|c| c.is_whitespace() || is_printable(*c))
        .collect()
}

/// Everything outside the Other and Separator categories, plus ASCII space
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invalid_utf8_is_dropped() {
        let bytes = b"Java\xff\xfe developer";
        assert_eq!(decode_utf8_ignoring_errors(bytes), "Java developer");
    }

    #[test]
    fn test_literal_replacement_character_is_kept() {
        let mut bytes = "Go \u{fffd} Rust".as_bytes().to_vec();
        bytes.extend_from_slice(b"\xff\xc3");
        assert_eq!(decode_utf8_ignoring_errors(&bytes), "Go \u{fffd} Rust");
    }

    #[test]
    fn test_salvage_strips_control_bytes() {
        let bytes = b"\x00\x01Scrum\x07 Master\x1b\n\tAgile\x00";
        assert_eq!(salvage_text(bytes), "Scrum Master\n\tAgile");
    }

    #[test]
    fn test_salvage_strips_format_and_private_use_chars() {
        let text = salvage_text("py\u{ad}thon \u{200b}django\u{feff}\u{e000}".as_bytes());
        assert_eq!(text, "python django");

        let taxonomy = crate::Taxonomy::builtin().unwrap();
        assert_eq!(crate::scorer::score(&text, &taxonomy).get("Python"), 2);
    }

    #[test]
    fn test_salvage_keeps_unicode_whitespace() {
        assert_eq!(salvage_text("Java\u{a0}EE\u{2028}Spring".as_bytes()), "Java\u{a0}EE\u{2028}Spring");
    }

    #[test]
    fn test_salvage_keeps_non_ascii_text() {
        let bytes = "Logística\u{0}".as_bytes();
        assert_eq!(salvage_text(bytes), "Logística");
    }

    #[test]
    fn test_text_decoder_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.txt");
        std::fs::write(&path, b"Ruby on Rails\xc3").unwrap();
        assert_eq!(PlainTextDecoder.decode(&path).unwrap(), "Ruby on Rails");
    }

    #[test]
    fn test_doc_decoder_salvages_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.doc");
        std::fs::write(&path, b"\xd0\xcf\x11\xe0\x00\x00Salesforce Apex\x00").unwrap();
        let text = LegacyDocDecoder.decode(&path).unwrap();
        assert!(text.contains("Salesforce Apex"));
    }
}
