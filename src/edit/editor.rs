//! Document editor for rewriting entries of an existing container.

use std::collections::BTreeMap;
use std::io::{Cursor, Read, Seek, Write};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use crate::safety::{DEFAULT_MAX_DOCUMENT_SIZE, read_to_end_limited};
use crate::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of an edit operation.
#[must_use = "edit result should be checked to verify operation completed as expected"]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditResult {
    /// Number of entries copied unchanged (raw).
    pub entries_kept: usize,
    /// Number of entries whose content was replaced.
    pub entries_updated: usize,
    /// Size of the written container in bytes.
    pub archive_size: u64,
}

impl EditResult {
    /// Returns the total number of entries in the resulting container.
    pub fn total_entries(&self) -> usize {
        self.entries_kept + self.entries_updated
    }
}

/// An editor that replaces the content of existing entries.
///
/// Replacements are queued and only applied when [`apply`](Self::apply) is
/// called. Entries that were not replaced are copied raw, so their name,
/// compressed bytes, CRC and compression method are preserved exactly.
///
/// # Example
///
/// ```rust
/// use docx_template::edit::DocumentEditor;
/// use std::io::{Cursor, Write};
///
/// # let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
/// # zip.start_file("notes.txt", zip::write::SimpleFileOptions::default())?;
/// # zip.write_all(b"old")?;
/// # let container = zip.finish()?.into_inner();
/// let mut editor = DocumentEditor::new(Cursor::new(container))?;
/// assert_eq!(editor.read_text("notes.txt")?, "old");
///
/// editor.update("notes.txt", "new")?;
/// let mut output = Vec::new();
/// let result = editor.apply(&mut output)?;
/// assert_eq!(result.entries_updated, 1);
/// # Ok::<(), docx_template::Error>(())
/// ```
pub struct DocumentEditor<R: Read + Seek> {
    archive: ZipArchive<R>,
    updates: BTreeMap<String, Vec<u8>>,
    max_entry_size: u64,
}

impl<R: Read + Seek> DocumentEditor<R> {
    /// Opens a container for editing.
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        log::debug!("Opened container with {} entries", archive.len());
        Ok(Self {
            archive,
            updates: BTreeMap::new(),
            max_entry_size: DEFAULT_MAX_DOCUMENT_SIZE,
        })
    }

    /// Sets the cap on the inflated size of entries read with
    /// [`read_text`](Self::read_text).
    pub fn max_entry_size(mut self, max: u64) -> Self {
        self.max_entry_size = max;
        self
    }

    /// Returns the number of entries in the container.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Returns `true` if the container holds an entry named `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.archive.file_names().any(|name| name == path)
    }

    /// Returns the entry names of the container.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }

    /// Reads an entry as UTF-8 text.
    ///
    /// A leading byte-order mark is skipped.
    pub fn read_text(&mut self, path: &str) -> Result<String> {
        let file = match self.archive.by_name(path) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Err(Error::missing_entry(path)),
            Err(e) => return Err(e.into()),
        };

        let mut bytes = read_to_end_limited(file, self.max_entry_size)?;
        log::debug!("Read {} ({} bytes)", path, bytes.len());

        if bytes.starts_with(UTF8_BOM) {
            bytes.drain(..UTF8_BOM.len());
        }
        String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
            path: path.to_string(),
        })
    }

    /// Queues a replacement of an existing entry's content.
    ///
    /// A later update of the same entry overrides an earlier one.
    pub fn update(&mut self, path: &str, data: impl Into<Vec<u8>>) -> Result<()> {
        if !self.contains(path) {
            return Err(Error::missing_entry(path));
        }

        self.updates.insert(path.to_string(), data.into());
        Ok(())
    }

    /// Returns the number of pending replacements.
    pub fn pending_updates(&self) -> usize {
        self.updates.len()
    }

    /// Applies all pending replacements and writes the new container.
    pub fn apply<W: Write>(mut self, mut output: W) -> Result<EditResult> {
        let mut result = EditResult::default();
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.set_raw_comment(self.archive.comment().into());

        for index in 0..self.archive.len() {
            let file = self.archive.by_index_raw(index)?;

            let Some(data) = self.updates.get(file.name()) else {
                writer.raw_copy_file(file)?;
                result.entries_kept += 1;
                continue;
            };

            let name = file.name().to_string();
            let options = replacement_options(
                &name,
                file.compression(),
                file.last_modified(),
                file.unix_mode(),
            );
            writer.start_file(name, options)?;
            writer.write_all(data)?;
            result.entries_updated += 1;
        }

        let archive = writer.finish()?.into_inner();
        result.archive_size = archive.len() as u64;

        output.write_all(&archive)?;
        output.flush()?;
        log::debug!(
            "Wrote container: {} entries kept, {} updated, {} bytes",
            result.entries_kept,
            result.entries_updated,
            result.archive_size
        );

        Ok(result)
    }
}

/// Options for a replaced entry: same method where it can be written, same
/// timestamp and permissions.
fn replacement_options(
    name: &str,
    method: CompressionMethod,
    modified: Option<DateTime>,
    unix_mode: Option<u32>,
) -> SimpleFileOptions {
    let method = match method {
        CompressionMethod::Stored => CompressionMethod::Stored,
        CompressionMethod::Deflated => CompressionMethod::Deflated,
        other => {
            log::warn!(
                "Entry {} uses {:?}, which cannot be written; falling back to Deflate",
                name,
                other
            );
            CompressionMethod::Deflated
        }
    };

    let mut options = SimpleFileOptions::default().compression_method(method);
    if let Some(modified) = modified {
        options = options.last_modified_time(modified);
    }
    if let Some(mode) = unix_mode {
        options = options.unix_permissions(mode);
    }
    options
}
