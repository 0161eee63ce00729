//! Shared test utilities for integration tests.
//!
//! Container fixtures are built in memory with the `zip` crate so every test
//! controls entry names, content and compression methods exactly.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};

use docx_template::DOCUMENT_XML_PATH;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#;

pub const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Not a real image; only needs to be binary and stored uncompressed.
pub const IMAGE_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0xFF];

/// Creates an in-memory zip container.
///
/// # Arguments
///
/// * `entries` - (name, data, compression method) tuples, written in order
pub fn create_container(
    entries: &[(&str, &[u8], CompressionMethod)],
) -> docx_template::Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data, method) in entries {
        let options = SimpleFileOptions::default().compression_method(*method);
        zip.start_file(*name, options)?;
        zip.write_all(data)?;
    }
    Ok(zip.finish()?.into_inner())
}

/// Wraps paragraphs of text in a minimal WordprocessingML body.
pub fn document_xml(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    )
}

/// Creates a docx-like container whose document body is `body`.
///
/// Entries: content types, package rels, the body, a stored image, and a
/// trailing properties part, so the body sits in the middle of the table.
pub fn create_docx(body: &str) -> Vec<u8> {
    create_container(&[
        (
            "[Content_Types].xml",
            CONTENT_TYPES_XML.as_bytes(),
            CompressionMethod::Deflated,
        ),
        ("_rels/.rels", RELS_XML.as_bytes(), CompressionMethod::Deflated),
        (DOCUMENT_XML_PATH, body.as_bytes(), CompressionMethod::Deflated),
        ("word/media/image1.png", IMAGE_BYTES, CompressionMethod::Stored),
        (
            "docProps/core.xml",
            "<cp:coreProperties/>".as_bytes(),
            CompressionMethod::Deflated,
        ),
    ])
    .expect("fixture container")
}

/// Snapshot of an entry as stored in the container.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub name: String,
    pub compression: CompressionMethod,
    pub crc32: u32,
    pub compressed_size: u64,
    /// Stored (still compressed) bytes.
    pub raw: Vec<u8>,
}

/// Returns every entry of `container` in table order, without decompressing.
pub fn raw_entries(container: &[u8]) -> Vec<RawEntry> {
    let mut archive = ZipArchive::new(Cursor::new(container)).expect("valid container");
    let count = archive.len();
    (0..count)
        .map(|index| {
            let mut file = archive.by_index_raw(index).expect("entry");
            let mut raw = Vec::new();
            file.read_to_end(&mut raw).expect("raw entry bytes");
            RawEntry {
                name: file.name().to_string(),
                compression: file.compression(),
                crc32: file.crc32(),
                compressed_size: file.compressed_size(),
                raw,
            }
        })
        .collect()
}

/// Reads and decompresses one entry as text.
pub fn read_entry(container: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(container)).expect("valid container");
    let mut file = archive.by_name(name).expect("entry present");
    let mut text = String::new();
    file.read_to_string(&mut text).expect("utf-8 entry");
    text
}

/// Asserts that every entry except `changed` is identical in both containers.
pub fn assert_untouched_except(source: &[u8], output: &[u8], changed: &str) {
    let before = raw_entries(source);
    let after = raw_entries(output);

    let names_before: Vec<_> = before.iter().map(|e| e.name.as_str()).collect();
    let names_after: Vec<_> = after.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names_before, names_after, "entry table order changed");

    for (old, new) in before.iter().zip(&after) {
        if old.name == changed {
            continue;
        }
        assert_eq!(old, new, "entry {} was modified", old.name);
    }
}
