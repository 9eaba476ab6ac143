// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! DOCX text decoder
//!
//! Body paragraphs come first, one per line, followed by every table cell in
//! row-major order. Nested tables are skipped, as are drawings and text boxes
//! anchored inside a run.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;

use super::TextDecoder;
use crate::{Result, SorterError};

/// Reads `word/document.xml` out of the DOCX zip container
pub struct DocxDecoder;

impl TextDecoder for DocxDecoder {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn decode(&self, path: &Path) -> Result<String> {
        let file = std::fs::File::open(path)?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| SorterError::Docx(format!("Failed to open DOCX: {}", e)))?;

        let mut document_xml = archive
            .by_name("word/document.xml")
            .map_err(|_| SorterError::Docx("No document.xml found".to_string()))?;

        let mut content = String::new();
        document_xml.read_to_string(&mut content)?;

        document_text(&content)
    }
}

/// Flatten WordprocessingML into paragraph text followed by table cell text
pub fn document_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut body = String::new();
    let mut cells = String::new();

    let mut paragraph = String::new();
    let mut cell_paragraphs: Vec<String> = Vec::new();
    let mut table_depth = 0usize;
    // Open elements inside a drawing or text box; their paragraphs are not body text
    let mut skip_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| SorterError::Docx(format!("Malformed document.xml at {}: {}", reader.buffer_position(), e)))?;

        match event {
            Event::Start(_) if skip_depth > 0 => skip_depth += 1,
            Event::End(_) if skip_depth > 0 => skip_depth -= 1,
            Event::Empty(_) | Event::Text(_) if skip_depth > 0 => {}
            Event::Start(e) => match e.name().as_ref() {
                b"mc:AlternateContent" | b"w:drawing" | b"w:pict" | b"w:object" | b"w:txbxContent" => {
                    skip_depth = 1
                }
                b"w:p" => paragraph.clear(),
                b"w:t" => in_text = true,
                b"w:tbl" => table_depth += 1,
                b"w:tc" if table_depth == 1 => cell_paragraphs.clear(),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => paragraph.push('\t'),
                b"w:br" | b"w:cr" => paragraph.push('\n'),
                b"w:p" => finish_paragraph("", table_depth, &mut body, &mut cell_paragraphs),
                b"w:tc" if table_depth == 1 => cells.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| SorterError::Docx(format!("Bad text run: {}", e)))?;
                paragraph.push_str(&text);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => finish_paragraph(&paragraph, table_depth, &mut body, &mut cell_paragraphs),
                b"w:tc" if table_depth == 1 => {
                    cells.push_str(&cell_paragraphs.join("\n"));
                    cells.push('\n');
                }
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    body.push_str(&cells);
    Ok(body)
}

fn finish_paragraph(paragraph: &str, table_depth: usize, body: &mut String, cell_paragraphs: &mut Vec<String>) {
    match table_depth {
        0 => {
            body.push_str(paragraph);
            body.push('\n');
        }
        1 => cell_paragraphs.push(paragraph.to_string()),
        _ => {}
    }
}
