//! # docx-template
//!
//! Fill `«placeholder»` tokens in the body of word-processing (`.docx`)
//! containers.
//!
//! The library rewrites exactly one entry of a zip container, the document
//! body at [`DOCUMENT_XML_PATH`](edit::DOCUMENT_XML_PATH), replacing every
//! `«Name»` token with a value from a caller-supplied [`DataSource`]. Every
//! other entry is copied raw, keeping its name, bytes and compression method.
//!
//! ## Quick Start
//!
//! ### Filling a Template File
//!
//! ```rust,no_run
//! use docx_template::{Result, TemplateEngine};
//! use std::collections::BTreeMap;
//!
//! fn main() -> Result<()> {
//!     let mut data = BTreeMap::new();
//!     data.insert("Name", "Ada");
//!     data.insert("Age", "36");
//!
//!     let engine = TemplateEngine::new();
//!     let result = engine.process_file("letter.docx", "letter-ada.docx", &data)?;
//!     println!("Replaced {} tokens", result.render.tokens_replaced);
//!     Ok(())
//! }
//! ```
//!
//! ### Rendering Text Directly
//!
//! The substitution engine is a pure function and can be used without any
//! container:
//!
//! ```rust
//! use docx_template::{XmlHandling, render};
//!
//! let data = [("Name", "A & B"), ("Age", "36")];
//! let text = render("Hello «Name», you are «Age».", &data, XmlHandling::AutoEscape);
//! assert_eq!(text, "Hello A &amp; B, you are 36.");
//! ```
//!
//! ## Data Sources
//!
//! A [`DataSource`] exposes members through three strategies applied in a
//! fixed order: fields, then properties, then mapping entries. Implement the
//! trait for your own types, or use the provided adapters:
//!
//! | Source | Strategy |
//! |--------|----------|
//! | `BTreeMap<K, V>` | entries, sorted by key |
//! | `Vec<(K, V)>`, `[(K, V)]`, `[(K, V); N]` | entries, in order |
//! | [`Serialized`] (feature `serde`) | fields, in declaration order |
//! | `serde_json::Map`, `serde_json::Value` (feature `serde`) | entries, in order |
//!
//! ## Escaping
//!
//! [`XmlHandling::Ignore`] (the default) inserts values as-is.
//! [`XmlHandling::AutoEscape`] escapes `&`, `<`, `>`, `"` and `'` as XML
//! entities so values cannot break the surrounding markup.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | Yes | Data sources built from `serde::Serialize` values |
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`]. Unknown tokens and unused members are
//! not errors. A container without a document body fails with
//! [`Error::MissingEntry`]; I/O failures surface as [`Error::Io`].
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod edit;
pub mod engine;
pub mod error;
pub mod safety;
pub mod template;

pub use error::{Error, Result};

// Re-export template API at crate root for convenience
pub use template::{
    DataSource, Member, RenderStats, Resolution, TOKEN_END, TOKEN_START, XmlHandling,
    render, render_with_stats, replace_field, tokens,
};

#[cfg(feature = "serde")]
pub use template::Serialized;

// Re-export processing API
pub use engine::{ProcessOptions, ProcessResult, TemplateEngine};

// Re-export edit API
pub use edit::{DOCUMENT_XML_PATH, DocumentEditor, EditResult};
