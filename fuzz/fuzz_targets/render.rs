//! Fuzz target for token substitution on arbitrary text.
//!
//! The first line of the input is used as a member value, the remainder as
//! the document.
//!
//! Run with: cargo +nightly fuzz run render

#![no_main]

use docx_template::template::tokens;
use docx_template::{XmlHandling, render_with_stats};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (value, document) = text.split_once('\n').unwrap_or(("", text));

    let names: Vec<&str> = tokens(document).collect();
    let members: Vec<(&str, &str)> = names.iter().map(|name| (*name, value)).collect();

    for handling in [XmlHandling::Ignore, XmlHandling::AutoEscape] {
        let (_, stats) = render_with_stats(document, &members, handling);
        assert!(stats.members_matched <= stats.members_visited);
    }
});
