// src/description.rs
//
// Pull-request / work-item description wrapper around the rewriter.

use crate::entities::escape_html;
use crate::sanitize::sanitize_html;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_PLACEHOLDER_TEXT: &str = "No description provided";

static BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?\s*>(?:\s*<br\s*/?\s*>){2,}").unwrap());

/// Sanitize a description, substituting the placeholder for missing or empty
/// content.
pub fn sanitize_pr_description(html: Option<&str>) -> String {
    sanitize_pr_description_with(html, DEFAULT_PLACEHOLDER_TEXT)
}

/// Same as [`sanitize_pr_description`] with a localized placeholder text. The
/// text is escaped and rendered in italics.
pub fn sanitize_pr_description_with(html: Option<&str>, placeholder_text: &str) -> String {
    let placeholder = || format!("<em>{}</em>", escape_html(placeholder_text));

    let Some(html) = html.filter(|h| !h.trim().is_empty()) else {
        return placeholder();
    };

    let sanitized = sanitize_html(html);
    let collapsed = BREAK_RUN.replace_all(&sanitized, "<br /><br />");
    if collapsed.trim().is_empty() {
        tracing::debug!("description sanitized to nothing; using placeholder");
        return placeholder();
    }
    collapsed.into_owned()
}
