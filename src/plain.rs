// src/plain.rs
//
// Plain-text reducer. Nothing survives as markup: block boundaries become
// newlines, every other tag disappears, entities are decoded.

use crate::entities::decode_entities;
use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br(?:\s[^>]*)?/?>").unwrap());

static BLOCK_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:p|div|h[1-6]|li|tr)(?:\s[^>]*)?/?>").unwrap());

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Reduce `input` to plain text with paragraph breaks preserved.
pub fn strip_html(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let text = LINE_BREAK.replace_all(input, "\n");
    let text = BLOCK_BOUNDARY.replace_all(&text, "\n");
    let text = ANY_TAG.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
