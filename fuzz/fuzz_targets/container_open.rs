//! Fuzz target for opening and filling containers from arbitrary bytes.
//!
//! Exercises container parsing, the bounded read of the document body and the
//! rewrite path with potentially malformed input. Only panics and hangs are
//! of interest; errors are expected.
//!
//! Run with: cargo +nightly fuzz run container_open

#![no_main]

use docx_template::edit::{DOCUMENT_XML_PATH, DocumentEditor};
use docx_template::{ProcessOptions, TemplateEngine};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    if let Ok(editor) = DocumentEditor::new(Cursor::new(data)) {
        let mut editor = editor.max_entry_size(1 << 20);
        let names: Vec<String> = editor.entry_names().map(str::to_string).collect();
        for name in names {
            let _ = editor.read_text(&name);
        }
        let _ = editor.read_text(DOCUMENT_XML_PATH);
    }

    let engine = TemplateEngine::with_options(ProcessOptions::new().max_document_size(1 << 20));
    let _ = engine.render_container(data, &[("Name", "fuzz")]);
});
