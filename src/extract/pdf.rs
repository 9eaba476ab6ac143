// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! PDF text decoders

use std::path::Path;

use super::TextDecoder;
use crate::{Result, SorterError};

/// Reads text page by page through lopdf, one line break between pages
pub struct PagedPdfDecoder;

impl TextDecoder for PagedPdfDecoder {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn decode(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        let doc = lopdf::Document::load_mem(&bytes)
            .map_err(|e| SorterError::Pdf(format!("Failed to load PDF: {}", e)))?;

        let mut text = String::new();
        for page_number in doc.get_pages().keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::debug!("Page {} of {:?} has no extractable text: {}", page_number, path, e);
                }
            }
            text.push('\n');
        }

        Ok(text)
    }
}

/// Reads the whole document through pdf-extract's layout engine
pub struct LayoutPdfDecoder;

impl TextDecoder for LayoutPdfDecoder {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn decode(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| SorterError::Pdf(format!("Text extraction failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};
    use tempfile::TempDir;

    /// One Courier text line per page
    fn write_pdf(path: &Path, pages: &[&str]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_pages_are_read_in_order_and_newline_separated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cv.pdf");
        write_pdf(&path, &["Senior Python Developer", "Kubernetes and Docker"]);

        let text = PagedPdfDecoder.decode(&path).unwrap();

        let first = text.find("Senior Python Developer").unwrap();
        let second = text.find("Kubernetes and Docker").unwrap();
        assert!(first < second);
        assert!(text[first + "Senior Python Developer".len()..second].contains('\n'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_single_page_ends_with_line_break() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.pdf");
        write_pdf(&path, &["Scrum"]);

        let text = PagedPdfDecoder.decode(&path).unwrap();
        assert_eq!(text.trim(), "Scrum");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_corrupt_pdf_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4 this is not really a pdf").unwrap();

        assert!(matches!(PagedPdfDecoder.decode(&path), Err(SorterError::Pdf(_))));
    }

    #[test]
    fn test_missing_pdf_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = LayoutPdfDecoder.decode(&dir.path().join("absent.pdf"));
        assert!(matches!(result, Err(SorterError::FileSystem(_))));
    }
}
