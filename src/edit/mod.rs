//! Container editing.
//!
//! This module rewrites entries of an existing zip container while leaving
//! every other entry untouched.
//!
//! # Example
//!
//! ```rust,no_run
//! use docx_template::edit::{DOCUMENT_XML_PATH, DocumentEditor};
//! use std::fs::File;
//!
//! let mut editor = DocumentEditor::new(File::open("template.docx")?)?;
//!
//! let body = editor.read_text(DOCUMENT_XML_PATH)?;
//! editor.update(DOCUMENT_XML_PATH, body.replace("draft", "final"))?;
//!
//! let result = editor.apply(File::create("final.docx")?)?;
//! println!("Kept {} entries, updated {}", result.entries_kept, result.entries_updated);
//! # Ok::<(), docx_template::Error>(())
//! ```
//!
//! # Implementation Notes
//!
//! The editor works by:
//! 1. Queueing replacements keyed by entry name
//! 2. When `apply()` is called, walking the original entry table in order
//! 3. Copying unchanged entries raw (no decompression, same bytes, CRC and method)
//! 4. Writing replaced entries at their original position
//!
//! The new container is assembled in memory and written to the output in one
//! go, so the output only needs to implement [`Write`](std::io::Write).

mod editor;

pub use editor::{DocumentEditor, EditResult};

/// Path of the main document body inside a word-processing container.
pub const DOCUMENT_XML_PATH: &str = "word/document.xml";
