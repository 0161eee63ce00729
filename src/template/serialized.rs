//! Data sources backed by `serde`.
//!
//! [`Serialized`] turns any [`Serialize`] value into an ordered field list,
//! standing in for runtime member introspection: a struct's fields come out in
//! declaration order. `serde_json::Map` and `serde_json::Value` act as
//! mapping sources.
//!
//! # Example
//!
//! ```rust
//! use docx_template::{Serialized, XmlHandling, render};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[allow(non_snake_case)]
//! struct Person {
//!     Name: &'static str,
//!     Age: u32,
//! }
//!
//! let data = Serialized::new(&Person { Name: "Ada", Age: 36 })?;
//! let text = render("Hello «Name», you are «Age».", &data, XmlHandling::Ignore);
//! assert_eq!(text, "Hello Ada, you are 36.");
//! # Ok::<(), docx_template::Error>(())
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use super::source::{DataSource, Member};
use crate::Result;

/// Field list captured from a serialized value.
///
/// Values that do not serialize to a JSON object (numbers, strings,
/// sequences) expose no members.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Serialized {
    fields: Map<String, Value>,
}

impl Serialized {
    /// Serializes `value` and captures its top-level fields.
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let fields = match serde_json::to_value(value)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(Self { fields })
    }

    /// Returns the number of captured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields were captured.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl DataSource for Serialized {
    fn fields(&self) -> Vec<Member<'_>> {
        map_members(&self.fields)
    }
}

impl DataSource for Map<String, Value> {
    fn entries(&self) -> Vec<Member<'_>> {
        map_members(self)
    }
}

impl DataSource for Value {
    fn entries(&self) -> Vec<Member<'_>> {
        match self {
            Value::Object(map) => map_members(map),
            _ => Vec::new(),
        }
    }
}

fn map_members(map: &Map<String, Value>) -> Vec<Member<'_>> {
    map.iter()
        .map(|(name, value)| Member::optional(name.as_str(), value_text(value)))
        .collect()
}

/// Textual form of a JSON value: `null` is absent, strings are verbatim,
/// everything else uses its compact JSON form.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
