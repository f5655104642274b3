// src/policy.rs
//
// Whitelist tables driving the sanitizer.
//
// - Everything here is immutable 'static data. A `Policy` value is passed by
//   reference into the rewriter; `Policy::DEFAULT` is what the convenience
//   entry points use.
// - Lookups are ASCII case-insensitive on the caller's side of the table, so
//   every entry below must be lowercase.

/// Whitelist configuration for one sanitizer run.
#[derive(Clone, Copy, Debug)]
pub struct Policy {
    /// Tag names that survive sanitizing.
    pub allowed_tags: &'static [&'static str],
    /// Per-tag attribute allowlist. Tags without an entry keep no attributes.
    pub allowed_attributes: &'static [(&'static str, &'static [&'static str])],
    /// URL schemes, including the trailing colon, accepted in `href`.
    pub safe_protocols: &'static [&'static str],
    /// CSS properties accepted inside `style`.
    pub safe_style_properties: &'static [&'static str],
    /// Substrings that disqualify a CSS value (compared lowercase).
    pub dangerous_style_values: &'static [&'static str],
    /// Elements that never have a closing form.
    pub void_elements: &'static [&'static str],
}

/* =============================== Core sets =============================== */

const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "b", "i", "u", "strong", "em", "span", "div", "ul", "ol", "li", "a", "code",
    "pre", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
];

const ALLOWED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "target", "rel"]),
    ("span", &["class", "style"]),
    ("div", &["class", "style"]),
    ("p", &["class", "style"]),
    ("code", &["class"]),
    ("pre", &["class"]),
];

const SAFE_PROTOCOLS: &[&str] = &["http:", "https:", "mailto:"];

const SAFE_STYLE_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "font-weight",
    "font-style",
    "font-size",
    "font-family",
    "text-decoration",
    "text-align",
    "line-height",
    "margin",
    "margin-top",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "padding",
    "padding-top",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "border",
    "border-color",
    "border-style",
    "border-width",
    "white-space",
];

const DANGEROUS_STYLE_VALUES: &[&str] = &["url(", "expression(", "javascript:", "behavior:"];

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

impl Policy {
    pub const DEFAULT: Policy = Policy {
        allowed_tags: ALLOWED_TAGS,
        allowed_attributes: ALLOWED_ATTRIBUTES,
        safe_protocols: SAFE_PROTOCOLS,
        safe_style_properties: SAFE_STYLE_PROPERTIES,
        dangerous_style_values: DANGEROUS_STYLE_VALUES,
        void_elements: VOID_ELEMENTS,
    };

    pub fn is_allowed_tag(&self, name: &str) -> bool {
        matches_ignore_ascii_case(name, self.allowed_tags)
    }

    /// Attribute names permitted on `tag`; empty when the tag has no entry.
    pub fn allowed_attributes_for(&self, tag: &str) -> &'static [&'static str] {
        self.allowed_attributes
            .iter()
            .find(|(t, _)| t.eq_ignore_ascii_case(tag))
            .map(|(_, attrs)| *attrs)
            .unwrap_or(&[])
    }

    pub fn is_allowed_attribute(&self, tag: &str, attr: &str) -> bool {
        matches_ignore_ascii_case(attr, self.allowed_attributes_for(tag))
    }

    pub fn is_safe_protocol(&self, scheme_with_colon: &str) -> bool {
        matches_ignore_ascii_case(scheme_with_colon, self.safe_protocols)
    }

    pub fn is_safe_style_property(&self, property: &str) -> bool {
        matches_ignore_ascii_case(property, self.safe_style_properties)
    }

    /// `value` must already be lowercased.
    pub fn has_dangerous_style_value(&self, value: &str) -> bool {
        self.dangerous_style_values.iter().any(|d| value.contains(d))
    }

    pub fn is_void(&self, name: &str) -> bool {
        matches_ignore_ascii_case(name, self.void_elements)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn matches_ignore_ascii_case(name: &str, set: &[&str]) -> bool {
    set.iter().any(|s| name.eq_ignore_ascii_case(s))
}
