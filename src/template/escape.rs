//! Escaping policy for substituted values.

use std::borrow::Cow;

/// How substituted values are written into the document markup.
///
/// The policy applies uniformly to every token of a single render; it is not
/// configurable per token.
///
/// # Example
///
/// ```rust
/// use docx_template::XmlHandling;
///
/// assert_eq!(XmlHandling::default(), XmlHandling::Ignore);
/// assert_eq!(XmlHandling::AutoEscape.apply("A & B"), "A &amp; B");
/// assert_eq!(XmlHandling::Ignore.apply("A & B"), "A & B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XmlHandling {
    /// Insert the raw textual form of each value.
    #[default]
    Ignore,
    /// Insert the XML-text-escaped form of each value.
    AutoEscape,
}

impl XmlHandling {
    /// Applies this policy to a value's textual form.
    pub fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Self::Ignore => Cow::Borrowed(value),
            Self::AutoEscape => escape_xml(value),
        }
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` as XML character entities.
///
/// No other characters are touched. Returns the input unchanged (borrowed)
/// when nothing needs escaping.
pub fn escape_xml(value: &str) -> Cow<'_, str> {
    let Some(first) = value.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(value);
    };

    let mut escaped = String::with_capacity(value.len() + 16);
    escaped.push_str(&value[..first]);
    for c in value[first..].chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
