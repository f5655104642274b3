// src/style.rs
//
// CSS declaration filter for `style` attribute values.

use crate::policy::Policy;

/// Keep only allowlisted declarations with harmless values, joined by "; ".
/// An empty result means the attribute must be omitted.
pub fn sanitize_style(style: &str) -> String {
    sanitize_style_with(style, &Policy::DEFAULT)
}

pub fn sanitize_style_with(style: &str, policy: &Policy) -> String {
    let mut kept: Vec<String> = Vec::new();

    for decl in style.split(';') {
        let Some((property, value)) = decl.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        if !policy.is_safe_style_property(&property) {
            tracing::trace!(%property, "dropped style property");
            continue;
        }
        if policy.has_dangerous_style_value(&value.to_lowercase()) {
            tracing::debug!(%property, "dropped style declaration with dangerous value");
            continue;
        }
        kept.push(format!("{property}: {value}"));
    }

    kept.join("; ")
}
