//! Template processing entry points.
//!
//! [`TemplateEngine`] fills the document body of a word-processing container
//! and writes a copy in which every other entry is byte-for-byte unchanged.
//! The three entry points only differ in how the source and destination are
//! supplied:
//!
//! | Method | Source | Destination |
//! |--------|--------|-------------|
//! | [`process`](TemplateEngine::process) | reader | writer |
//! | [`process_file_to_writer`](TemplateEngine::process_file_to_writer) | file path | writer |
//! | [`process_file`](TemplateEngine::process_file) | file path | file path |
//!
//! The source is validated (parsed, document body located and decoded) before
//! anything is written, so a failed run leaves the destination untouched.

mod options;

pub use options::ProcessOptions;

use std::fs;
use std::io::{self, Cursor, Read, Write};
use std::path::Path;

use crate::Result;
use crate::edit::{DOCUMENT_XML_PATH, DocumentEditor, EditResult};
use crate::template::{DataSource, RenderStats, render_with_stats};

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// What the substitution pass did.
    pub render: RenderStats,
    /// What the container rewrite did.
    pub edit: EditResult,
}

/// Fills `«token»` placeholders in a container's document body.
///
/// # Example
///
/// ```rust,no_run
/// use docx_template::{ProcessOptions, TemplateEngine, XmlHandling};
///
/// let data = [("Name", "Ada"), ("Age", "36")];
/// let engine = TemplateEngine::with_options(
///     ProcessOptions::new().xml_handling(XmlHandling::AutoEscape),
/// );
///
/// let result = engine.process_file("letter.docx", "letter-ada.docx", &data)?;
/// println!("Replaced {} tokens", result.render.tokens_replaced);
/// # Ok::<(), docx_template::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    options: ProcessOptions,
}

impl TemplateEngine {
    /// Creates an engine with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given options.
    pub fn with_options(options: ProcessOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Rewrites an in-memory container and returns the new container bytes.
    pub fn render_container<D: DataSource + ?Sized>(
        &self,
        container: &[u8],
        data: &D,
    ) -> Result<(Vec<u8>, ProcessResult)> {
        let mut editor = DocumentEditor::new(Cursor::new(container))?
            .max_entry_size(self.options.max_document_size);

        let document = editor.read_text(DOCUMENT_XML_PATH)?;
        let (rendered, render) = render_with_stats(&document, data, self.options.xml_handling);
        log::debug!(
            "Rendered {}: {} of {} members matched, {} tokens replaced",
            DOCUMENT_XML_PATH,
            render.members_matched,
            render.members_visited,
            render.tokens_replaced
        );
        if !render.is_complete() {
            log::debug!("Unresolved tokens: {}", render.unresolved.join(", "));
        }

        editor.update(DOCUMENT_XML_PATH, rendered)?;
        let mut output = Vec::with_capacity(container.len());
        let edit = editor.apply(&mut output)?;

        Ok((output, ProcessResult { render, edit }))
    }

    /// Reads a container from `source` and writes the filled copy to
    /// `destination`.
    pub fn process<R, W, D>(
        &self,
        mut source: R,
        mut destination: W,
        data: &D,
    ) -> Result<ProcessResult>
    where
        R: Read,
        W: Write,
        D: DataSource + ?Sized,
    {
        let mut container = Vec::new();
        source.read_to_end(&mut container)?;
        self.write_rendered(&container, &mut destination, data)
    }

    /// Reads a container from a file and writes the filled copy to
    /// `destination`.
    pub fn process_file_to_writer<P, W, D>(
        &self,
        source: P,
        mut destination: W,
        data: &D,
    ) -> Result<ProcessResult>
    where
        P: AsRef<Path>,
        W: Write,
        D: DataSource + ?Sized,
    {
        let container = fs::read(source.as_ref())?;
        self.write_rendered(&container, &mut destination, data)
    }

    /// Reads a container from a file and writes the filled copy to another
    /// file, replacing it if present.
    pub fn process_file<P, Q, D>(
        &self,
        source: P,
        destination: Q,
        data: &D,
    ) -> Result<ProcessResult>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        D: DataSource + ?Sized,
    {
        let container = fs::read(source.as_ref())?;
        let (output, result) = self.render_container(&container, data)?;

        let destination = destination.as_ref();
        match fs::remove_file(destination) {
            Ok(()) => log::debug!("Replacing existing {}", destination.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        fs::write(destination, &output)?;

        Ok(result)
    }

    fn write_rendered<W, D>(
        &self,
        container: &[u8],
        destination: &mut W,
        data: &D,
    ) -> Result<ProcessResult>
    where
        W: Write,
        D: DataSource + ?Sized,
    {
        let (output, result) = self.render_container(container, data)?;
        destination.write_all(&output)?;
        destination.flush()?;
        Ok(result)
    }
}
