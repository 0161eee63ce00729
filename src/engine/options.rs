//! Options for template processing.

use crate::safety::DEFAULT_MAX_DOCUMENT_SIZE;
use crate::template::XmlHandling;

/// Options for filling a template container.
///
/// # Example
///
/// ```rust
/// use docx_template::{ProcessOptions, TemplateEngine, XmlHandling};
///
/// let options = ProcessOptions::new()
///     .xml_handling(XmlHandling::AutoEscape)
///     .max_document_size(16 * 1024 * 1024);
///
/// let engine = TemplateEngine::with_options(options);
/// assert_eq!(engine.options().xml_handling, XmlHandling::AutoEscape);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Escaping policy applied to every substituted value.
    pub xml_handling: XmlHandling,
    /// Cap on the inflated size of the document entry in bytes.
    pub max_document_size: u64,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            xml_handling: XmlHandling::Ignore,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }
}

impl ProcessOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the escaping policy.
    pub fn xml_handling(mut self, handling: XmlHandling) -> Self {
        self.xml_handling = handling;
        self
    }

    /// Sets the cap on the inflated document size.
    pub fn max_document_size(mut self, bytes: u64) -> Self {
        self.max_document_size = bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ProcessOptions::default();
        assert_eq!(options.xml_handling, XmlHandling::Ignore);
        assert_eq!(options.max_document_size, 256 * 1024 * 1024);
        assert_eq!(options, ProcessOptions::new());
    }

    #[test]
    fn test_builder_chain() {
        let options = ProcessOptions::new()
            .xml_handling(XmlHandling::AutoEscape)
            .max_document_size(10);
        assert_eq!(options.xml_handling, XmlHandling::AutoEscape);
        assert_eq!(options.max_document_size, 10);
    }
}
