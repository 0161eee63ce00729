//! Token substitution.
//!
//! A token is a member name wrapped in the fixed delimiters [`TOKEN_START`]
//! and [`TOKEN_END`], for example `«Name»`. Rendering is plain literal text
//! replacement over the whole document: it knows nothing about XML structure,
//! never fails, and leaves tokens that match no member verbatim.
//!
//! # Example
//!
//! ```rust
//! use docx_template::{XmlHandling, render};
//!
//! let data = [("Name", "A & B"), ("Age", "36")];
//! let doc = "Hello «Name», you are «Age». «Unknown»";
//!
//! assert_eq!(
//!     render(doc, &data, XmlHandling::Ignore),
//!     "Hello A & B, you are 36. «Unknown»"
//! );
//! assert_eq!(
//!     render(doc, &data, XmlHandling::AutoEscape),
//!     "Hello A &amp; B, you are 36. «Unknown»"
//! );
//! ```
//!
//! # Resolution order
//!
//! Members are applied one at a time, fields first, then properties, then
//! mapping entries (see [`DataSource`]). Each member performs one global
//! find-and-replace of its own token over the current text, so once a token
//! has been consumed a later member with the same name finds nothing left to
//! replace.

mod escape;
#[cfg(feature = "serde")]
mod serialized;
mod source;

pub use escape::{XmlHandling, escape_xml};
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use serialized::Serialized;
pub use source::{DataSource, Member, Resolution, members};

/// Opening token delimiter.
pub const TOKEN_START: &str = "«";

/// Closing token delimiter.
pub const TOKEN_END: &str = "»";

/// Builds the token text for a member name.
///
/// ```rust
/// assert_eq!(docx_template::template::token("Name"), "«Name»");
/// ```
pub fn token(name: &str) -> String {
    let mut token = String::with_capacity(TOKEN_START.len() + name.len() + TOKEN_END.len());
    token.push_str(TOKEN_START);
    token.push_str(name);
    token.push_str(TOKEN_END);
    token
}

/// Counters collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Members offered by the data source.
    pub members_visited: usize,
    /// Members whose token was found at least once.
    pub members_matched: usize,
    /// Token occurrences replaced across all members.
    pub tokens_replaced: usize,
    /// Distinct token names still present in the output, in document order.
    pub unresolved: Vec<String>,
}

impl RenderStats {
    /// Returns `true` if the output contains no tokens.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Replaces every occurrence of `name`'s token with `value`.
///
/// An absent value substitutes the empty string. The policy is applied to the
/// value before substitution.
pub fn replace_field(
    document: &str,
    name: &str,
    value: Option<&str>,
    handling: XmlHandling,
) -> String {
    let value = handling.apply(value.unwrap_or(""));
    document.replace(&token(name), &value)
}

/// Renders `document` against `data`.
///
/// Pure and deterministic for a data source with a stable member order.
pub fn render<D: DataSource + ?Sized>(document: &str, data: &D, handling: XmlHandling) -> String {
    render_with_stats(document, data, handling).0
}

/// Renders `document` against `data` and reports what happened.
pub fn render_with_stats<D: DataSource + ?Sized>(
    document: &str,
    data: &D,
    handling: XmlHandling,
) -> (String, RenderStats) {
    let mut text = document.to_owned();
    let mut stats = RenderStats::default();

    for (resolution, member) in members(data) {
        stats.members_visited += 1;

        let token = token(member.name());
        let count = text.matches(token.as_str()).count();
        if count == 0 {
            continue;
        }

        text = text.replace(&token, &handling.apply(member.text()));
        log::trace!("Replaced {} x{} from {}", token, count, resolution);

        stats.members_matched += 1;
        stats.tokens_replaced += count;
    }

    for name in tokens(&text) {
        if !stats.unresolved.iter().any(|n| n == name) {
            stats.unresolved.push(name.to_string());
        }
    }

    (text, stats)
}

/// Returns the names of the tokens in `document`, in order.
///
/// A name runs from the last start delimiter before a closing delimiter, so
/// `««Name»` yields `Name`. An unclosed start delimiter ends the scan.
///
/// ```rust
/// use docx_template::template::tokens;
///
/// let names: Vec<_> = tokens("«a» and «b» but not «c").collect();
/// assert_eq!(names, ["a", "b"]);
/// ```
pub fn tokens(document: &str) -> Tokens<'_> {
    Tokens { rest: document }
}

/// Iterator over token names, created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(TOKEN_START)?;
        let after = &self.rest[start + TOKEN_START.len()..];
        let Some(end) = after.find(TOKEN_END) else {
            self.rest = "";
            return None;
        };

        let candidate = &after[..end];
        let name = match candidate.rfind(TOKEN_START) {
            Some(nested) => &candidate[nested + TOKEN_START.len()..],
            None => candidate,
        };
        self.rest = &after[end + TOKEN_END.len()..];
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Same name exposed by a field and a property.
    struct Ambiguous;

    impl DataSource for Ambiguous {
        fn fields(&self) -> Vec<Member<'_>> {
            vec![Member::new("X", "a")]
        }

        fn properties(&self) -> Vec<Member<'_>> {
            vec![Member::new("X", "b")]
        }
    }

    struct Person {
        name: &'static str,
        age: u32,
    }

    impl DataSource for Person {
        fn fields(&self) -> Vec<Member<'_>> {
            vec![Member::new("Name", self.name), Member::new("Age", self.age)]
        }
    }

    #[test]
    fn test_hello_scenario() {
        let doc = "Hello «Name», you are «Age».";
        let ada = Person {
            name: "Ada",
            age: 36,
        };
        assert_eq!(
            render(doc, &ada, XmlHandling::Ignore),
            "Hello Ada, you are 36."
        );

        let ab = Person {
            name: "A & B",
            age: 36,
        };
        assert_eq!(
            render(doc, &ab, XmlHandling::AutoEscape),
            "Hello A &amp; B, you are 36."
        );
    }

    #[test]
    fn test_zero_tokens_unchanged() {
        let doc = "<w:t>No placeholders here &amp; there</w:t>";
        let ada = Person {
            name: "Ada",
            age: 36,
        };
        assert_eq!(render(doc, &ada, XmlHandling::AutoEscape), doc);
    }

    #[test]
    fn test_unknown_token_verbatim() {
        let (text, stats) =
            render_with_stats("«Name» «Unknown»", &[("Name", "x")], XmlHandling::Ignore);
        assert_eq!(text, "x «Unknown»");
        assert_eq!(stats.unresolved, vec!["Unknown".to_string()]);
        assert!(!stats.is_complete());
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let (text, stats) =
            render_with_stats("«a»«a»-«a»", &[("a", "1")], XmlHandling::Ignore);
        assert_eq!(text, "11-1");
        assert_eq!(stats.tokens_replaced, 3);
        assert_eq!(stats.members_matched, 1);
        assert!(stats.is_complete());
    }

    #[test]
    fn test_field_consumes_before_property() {
        let (text, stats) = render_with_stats("«X» «X»", &Ambiguous, XmlHandling::Ignore);
        assert_eq!(text, "a a");
        assert_eq!(stats.members_visited, 2);
        assert_eq!(stats.members_matched, 1);
    }

    #[test]
    fn test_later_member_sees_earlier_output() {
        let data = [("first", "«second»"), ("second", "done")];
        assert_eq!(render("«first»", &data, XmlHandling::Ignore), "done");
    }

    #[test]
    fn test_value_is_not_rescanned_for_own_token() {
        let data = [("loop", "«loop»")];
        assert_eq!(render("«loop»", &data, XmlHandling::Ignore), "«loop»");
    }

    #[test]
    fn test_names_are_case_sensitive_and_literal() {
        let data = [("name", "x"), ("a.b", "y")];
        assert_eq!(
            render("«Name» «name» «a.b» «a*b»", &data, XmlHandling::Ignore),
            "«Name» x y «a*b»"
        );
    }

    #[test]
    fn test_whitespace_inside_delimiters_does_not_match() {
        let data = [("Name", "x")];
        assert_eq!(render("« Name »", &data, XmlHandling::Ignore), "« Name »");
    }

    #[test]
    fn test_absent_value_renders_empty() {
        struct Sparse;
        impl DataSource for Sparse {
            fn properties(&self) -> Vec<Member<'_>> {
                vec![Member::absent("Middle")]
            }
        }
        assert_eq!(render("A«Middle»B", &Sparse, XmlHandling::AutoEscape), "AB");
    }

    #[test]
    fn test_unit_source_leaves_document() {
        assert_eq!(render("«Name»", &(), XmlHandling::Ignore), "«Name»");
    }

    #[test]
    fn test_map_source() {
        let mut map = BTreeMap::new();
        map.insert("Quote".to_string(), r#"5 > 3 "really""#.to_string());
        assert_eq!(
            render("«Quote»", &map, XmlHandling::AutoEscape),
            "5 &gt; 3 &quot;really&quot;"
        );
        assert_eq!(
            render("«Quote»", &map, XmlHandling::Ignore),
            r#"5 > 3 "really""#
        );
    }

    #[test]
    fn test_replace_field() {
        assert_eq!(
            replace_field("«a» «b»", "a", Some("<x>"), XmlHandling::AutoEscape),
            "&lt;x&gt; «b»"
        );
        assert_eq!(replace_field("«a»", "a", None, XmlHandling::Ignore), "");
    }

    #[test]
    fn test_tokens_scan() {
        let names: Vec<_> = tokens("x «one» y ««two» »three« «").collect();
        assert_eq!(names, vec!["one", "two"]);
        assert_eq!(tokens("no tokens").count(), 0);
        assert_eq!(tokens("«»").collect::<Vec<_>>(), vec![""]);
    }
}
