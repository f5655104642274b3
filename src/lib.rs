// src/lib.rs
//
// richtext-guard: whitelist HTML sanitizer for work-item and pull-request
// descriptions fetched from a tracking service.
//
// - sanitize_html: rewrite arbitrary text into the allowlisted markup subset.
// - strip_html: reduce markup to plain text.
// - sanitize_pr_description: sanitize_html plus placeholder and <br> tidying.
// - escape_html: escape text for direct insertion into markup.
//
// Every entry point is a pure &str → String function; none of them fails or
// panics on any input. Rejected fragments are dropped, never reported.
//
// Tokenizing is a flat scan for '<' … '>' substrings, not an HTML parser:
// markup is never balanced or repaired, and parser-differential tricks that
// depend on browser tree construction are outside what this crate defends.

pub mod description;
pub mod duration;
pub mod entities;
pub mod links;
pub mod plain;
pub mod policy;
pub mod sanitize;
pub mod style;
pub mod tag;

pub use description::{sanitize_pr_description, sanitize_pr_description_with};
pub use duration::{format_time_display, parse_time_string, split_minutes, TimeParseError};
pub use entities::{decode_entities, decode_then_escape, escape_html};
pub use links::is_safe_url;
pub use plain::strip_html;
pub use policy::Policy;
pub use sanitize::{sanitize_html, sanitize_html_with};
pub use style::sanitize_style;
pub use tag::{parse_tag, ParsedTag};
