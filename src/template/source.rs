//! Data sources for template rendering.
//!
//! A [`DataSource`] exposes named textual values through up to three
//! resolution strategies. [`render`](super::render) consumes them in a fixed
//! order, each strategy feeding its output into the next:
//!
//! 1. [`fields`](DataSource::fields), in declaration order
//! 2. [`properties`](DataSource::properties), in declaration order
//! 3. [`entries`](DataSource::entries), in the mapping's iteration order
//!
//! Every strategy defaults to "no members", so an implementation only
//! overrides the ones it has.
//!
//! # Example
//!
//! ```rust
//! use docx_template::{DataSource, Member, XmlHandling, render};
//!
//! struct Invoice {
//!     number: u32,
//!     customer: String,
//!     note: Option<String>,
//! }
//!
//! impl DataSource for Invoice {
//!     fn fields(&self) -> Vec<Member<'_>> {
//!         vec![
//!             Member::new("number", self.number),
//!             Member::new("customer", &self.customer),
//!             Member::optional("note", self.note.as_ref()),
//!         ]
//!     }
//! }
//!
//! let invoice = Invoice { number: 7, customer: "Ada".into(), note: None };
//! let text = render("«number» for «customer»«note»", &invoice, XmlHandling::Ignore);
//! assert_eq!(text, "7 for Ada");
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Which strategy exposed a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// A publicly readable field.
    Field,
    /// A publicly readable property or getter.
    Property,
    /// A key of a string-keyed ordered mapping.
    Entry,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field => write!(f, "field"),
            Self::Property => write!(f, "property"),
            Self::Entry => write!(f, "entry"),
        }
    }
}

/// A named value exposed by a [`DataSource`].
///
/// An absent value (`None`) renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<'a> {
    name: Cow<'a, str>,
    value: Option<String>,
}

impl<'a> Member<'a> {
    /// Creates a member from a value's [`Display`](fmt::Display) form.
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            value: Some(value.to_string()),
        }
    }

    /// Creates a member whose value may be absent.
    pub fn optional<V: fmt::Display>(name: impl Into<Cow<'a, str>>, value: Option<V>) -> Self {
        Self {
            name: name.into(),
            value: value.map(|v| v.to_string()),
        }
    }

    /// Creates a member with no value.
    pub fn absent(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Returns the member name used to build its token.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value, if present.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the textual form used for substitution.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// A caller-supplied bag of named values.
///
/// Implementations must return members in a stable, reproducible order: the
/// order decides which pass consumes a token when several strategies expose
/// the same name.
pub trait DataSource {
    /// Members exposed as fields.
    fn fields(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    /// Members exposed as properties.
    fn properties(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    /// Members exposed through string-keyed mapping behavior.
    fn entries(&self) -> Vec<Member<'_>> {
        Vec::new()
    }
}

/// Returns every member of `data` tagged with its strategy, in resolution order.
pub fn members<D: DataSource + ?Sized>(data: &D) -> Vec<(Resolution, Member<'_>)> {
    let fields = data.fields().into_iter().map(|m| (Resolution::Field, m));
    let properties = data
        .properties()
        .into_iter()
        .map(|m| (Resolution::Property, m));
    let entries = data.entries().into_iter().map(|m| (Resolution::Entry, m));
    fields.chain(properties).chain(entries).collect()
}

impl DataSource for () {}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn fields(&self) -> Vec<Member<'_>> {
        (**self).fields()
    }

    fn properties(&self) -> Vec<Member<'_>> {
        (**self).properties()
    }

    fn entries(&self) -> Vec<Member<'_>> {
        (**self).entries()
    }
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn fields(&self) -> Vec<Member<'_>> {
        (**self).fields()
    }

    fn properties(&self) -> Vec<Member<'_>> {
        (**self).properties()
    }

    fn entries(&self) -> Vec<Member<'_>> {
        (**self).entries()
    }
}

impl<K: AsRef<str>, V: fmt::Display> DataSource for BTreeMap<K, V> {
    fn entries(&self) -> Vec<Member<'_>> {
        self.iter()
            .map(|(k, v)| Member::new(k.as_ref(), v))
            .collect()
    }
}

impl<K: AsRef<str>, V: fmt::Display> DataSource for [(K, V)] {
    fn entries(&self) -> Vec<Member<'_>> {
        self.iter()
            .map(|(k, v)| Member::new(k.as_ref(), v))
            .collect()
    }
}

impl<K: AsRef<str>, V: fmt::Display, const N: usize> DataSource for [(K, V); N] {
    fn entries(&self) -> Vec<Member<'_>> {
        self.as_slice().entries()
    }
}

impl<K: AsRef<str>, V: fmt::Display> DataSource for Vec<(K, V)> {
    fn entries(&self) -> Vec<Member<'_>> {
        self.as_slice().entries()
    }
}
