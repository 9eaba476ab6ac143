// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Text extraction for resume documents
//!
//! Each supported format resolves to a [`DocumentFormat`] and is read by a
//! pluggable [`TextDecoder`]. A decoder slot may be empty (the backend is
//! disabled), in which case extraction yields empty text with a warning.
//! Extraction never fails the caller: every error becomes `""`.

pub mod docx;
pub mod pdf;
pub mod plain;

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::{ExtractionConfig, PdfBackend};
use crate::{Result, SorterError};

/// Resume formats the sorter can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Doc,
}

impl DocumentFormat {
    /// Resolve a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Like [`DocumentFormat::from_path`], but an unknown extension is an error
    pub fn detect(path: &Path) -> Result<Self> {
        Self::from_path(path).ok_or_else(|| SorterError::UnsupportedFileType(path.display().to_string()))
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            "doc" => Some(Self::Doc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
            Self::Doc => "DOC",
        }
    }
}

/// A strategy that turns one document format into plain text
pub trait TextDecoder: Send + Sync {
    /// Name of this decoder, for diagnostics
    fn name(&self) -> &'static str;

    /// Read the file and return its text
    fn decode(&self, path: &Path) -> Result<String>;
}

/// Dispatches files to the decoder registered for their format
pub struct TextExtractor {
    pdf: Option<Box<dyn TextDecoder>>,
    docx: Option<Box<dyn TextDecoder>>,
    txt: Option<Box<dyn TextDecoder>>,
    doc: Option<Box<dyn TextDecoder>>,
}

impl TextExtractor {
    /// Extractor with the default decoder for every format
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Extractor with decoders chosen by configuration
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let pdf: Option<Box<dyn TextDecoder>> = match config.pdf_backend {
            PdfBackend::Pages => Some(Box::new(pdf::PagedPdfDecoder)),
            PdfBackend::Layout => Some(Box::new(pdf::LayoutPdfDecoder)),
            PdfBackend::None => None,
        };
        let docx: Option<Box<dyn TextDecoder>> = if config.docx_enabled {
            Some(Box::new(docx::DocxDecoder))
        } else {
            None
        };

        Self {
            pdf,
            docx,
            txt: Some(Box::new(plain::PlainTextDecoder)),
            doc: Some(Box::new(plain::LegacyDocDecoder)),
        }
    }

    /// Replace (or remove) the decoder for a format
    pub fn with_decoder(mut self, format: DocumentFormat, decoder: Option<Box<dyn TextDecoder>>) -> Self {
        *self.slot_mut(format) = decoder;
        self
    }

    /// Decoder currently registered for a format
    pub fn decoder(&self, format: DocumentFormat) -> Option<&dyn TextDecoder> {
        match format {
            DocumentFormat::Pdf => self.pdf.as_deref(),
            DocumentFormat::Docx => self.docx.as_deref(),
            DocumentFormat::Txt => self.txt.as_deref(),
            DocumentFormat::Doc => self.doc.as_deref(),
        }
    }

    fn slot_mut(&mut self, format: DocumentFormat) -> &mut Option<Box<dyn TextDecoder>> {
        match format {
            DocumentFormat::Pdf => &mut self.pdf,
            DocumentFormat::Docx => &mut self.docx,
            DocumentFormat::Txt => &mut self.txt,
            DocumentFormat::Doc => &mut self.doc,
        }
    }

    /// Best-effort plain text for `path`; empty on any failure
    pub fn extract(&self, path: &Path) -> String {
        let format = match DocumentFormat::detect(path) {
            Ok(f) => f,
            Err(e) => {
                debug!("{}", e);
                return String::new();
            }
        };

        let decoder = match self.decoder(format) {
            Some(d) => d,
            None => {
                warn!(
                    "No {} decoder available, skipping content of {:?}",
                    format.as_str(),
                    file_name(path)
                );
                return String::new();
            }
        };

        // Third-party decoders can panic on malformed input
        match panic::catch_unwind(AssertUnwindSafe(|| decoder.decode(path))) {
            Ok(Ok(text)) => {
                debug!("{} extracted {} chars from {:?}", decoder.name(), text.len(), file_name(path));
                text
            }
            Ok(Err(e)) => {
                warn!("Error reading {} {:?}: {}", format.as_str(), file_name(path), e);
                String::new()
            }
            Err(_) => {
                warn!("{} decoder crashed on {:?}", decoder.name(), file_name(path));
                String::new()
            }
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixed(&'static str);

    impl TextDecoder for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn decode(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl TextDecoder for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }
        fn decode(&self, _path: &Path) -> Result<String> {
            Err(SorterError::Pdf("broken xref".to_string()))
        }
    }

    struct Panicking;

    impl TextDecoder for Panicking {
        fn name(&self) -> &'static str {
            "panicking"
        }
        fn decode(&self, _path: &Path) -> Result<String> {
            panic!("decoder bug")
        }
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.PDF")), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_path(Path::new("a.Docx")), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_path(Path::new("a.doc")), Some(DocumentFormat::Doc));
        assert_eq!(DocumentFormat::from_path(Path::new("a.txt")), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_path(Path::new("a.xyz")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_detect_rejects_unknown_extension() {
        assert_eq!(DocumentFormat::detect(Path::new("cv.PDF")).unwrap(), DocumentFormat::Pdf);
        assert!(matches!(
            DocumentFormat::detect(Path::new("weird.xyz")),
            Err(SorterError::UnsupportedFileType(name)) if name.ends_with("weird.xyz")
        ));
    }

    #[test]
    fn test_unknown_extension_is_empty() {
        let extractor = TextExtractor::new();
        assert_eq!(extractor.extract(&PathBuf::from("/nowhere/weird.xyz")), "");
    }

    #[test]
    fn test_missing_decoder_is_empty() {
        let extractor = TextExtractor::new()
            .with_decoder(DocumentFormat::Pdf, Some(Box::new(Fixed("python"))))
            .with_decoder(DocumentFormat::Pdf, None);
        assert!(extractor.decoder(DocumentFormat::Pdf).is_none());
        assert_eq!(extractor.extract(Path::new("cv.pdf")), "");
    }

    #[test]
    fn test_disabled_backends_from_config() {
        let config = ExtractionConfig {
            pdf_backend: PdfBackend::None,
            docx_enabled: false,
        };
        let extractor = TextExtractor::from_config(&config);
        assert!(extractor.decoder(DocumentFormat::Pdf).is_none());
        assert!(extractor.decoder(DocumentFormat::Docx).is_none());
        assert!(extractor.decoder(DocumentFormat::Txt).is_some());
    }

    #[test]
    fn test_decoder_errors_become_empty() {
        let extractor = TextExtractor::new().with_decoder(DocumentFormat::Pdf, Some(Box::new(Failing)));
        assert_eq!(extractor.extract(Path::new("cv.pdf")), "");
    }

    #[test]
    fn test_decoder_panic_becomes_empty() {
        let extractor = TextExtractor::new().with_decoder(DocumentFormat::Pdf, Some(Box::new(Panicking)));
        assert_eq!(extractor.extract(Path::new("cv.pdf")), "");
    }

    #[test]
    fn test_injected_decoder_is_used() {
        let extractor = TextExtractor::new().with_decoder(DocumentFormat::Pdf, Some(Box::new(Fixed("Rust and Go"))));
        assert_eq!(extractor.extract(Path::new("CV.PDF")), "Rust and Go");
    }

    #[test]
    fn test_txt_roundtrip_through_extractor() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "Kotlin and Android").unwrap();
        assert_eq!(TextExtractor::new().extract(&path), "Kotlin and Android");
    }

    #[test]
    fn test_unreadable_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let extractor = TextExtractor::new();
        assert_eq!(extractor.extract(&dir.path().join("missing.txt")), "");
        assert_eq!(extractor.extract(&dir.path().join("missing.docx")), "");
        assert_eq!(extractor.extract(&dir.path().join("missing.pdf")), "");
    }
}
