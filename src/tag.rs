// src/tag.rs
//
// Tag tokenizer / attribute parser for one raw `<...>` substring.
//
// - Closing iff the text starts with "</".
// - Self-closing iff the text ends with "/>" or the name is a void element.
// - The name must start right after '<' or "</"; "< p>" is not a tag.
// - Attributes: name=value with a double-quoted, single-quoted or bare value.
//   Valueless attributes and unterminated quotes are skipped. The last
//   duplicate wins.

use crate::policy::Policy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedTag {
    /// Lowercased tag name.
    pub name: String,
    /// Lowercased attribute names with raw (still encoded) values, unique by name.
    pub attributes: Vec<(String, String)>,
    pub closing: bool,
    pub self_closing: bool,
}

impl ParsedTag {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: String, value: String) {
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }
}

/* ============================ Utility predicates ========================= */

#[inline]
fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

#[inline]
fn is_attr_name_char(b: u8) -> bool {
    is_name_char(b) || b == b'.'
}

#[inline]
fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' || b == b'\x0c'
}

/* =============================== Tag parsing ============================= */

/// Parse a raw tag such as `<a href="x">` or `</p>` under the default policy.
/// Returns `None` when no tag name follows the opener.
pub fn parse_tag(raw: &str) -> Option<ParsedTag> {
    parse_tag_with(raw, &Policy::DEFAULT)
}

pub fn parse_tag_with(raw: &str, policy: &Policy) -> Option<ParsedTag> {
    let tag = raw.as_bytes();
    if tag.first() != Some(&b'<') {
        return None;
    }
    let n = tag.len();
    let mut i = 1usize;

    let closing = tag.get(1) == Some(&b'/');
    if closing {
        i += 1;
    }

    let start = i;
    if !tag.get(i).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    while i < n && is_name_char(tag[i]) {
        i += 1;
    }
    let name = raw[start..i].to_ascii_lowercase();

    let self_closing = raw.ends_with("/>") || policy.is_void(&name);

    let mut parsed = ParsedTag { name, attributes: Vec::new(), closing, self_closing };
    // Closing tags carry nothing worth reading.
    if !closing {
        let end = if raw.ends_with('>') { n - 1 } else { n };
        scan_attributes(&raw[i..end], &mut parsed);
    }
    Some(parsed)
}

/// Attribute scanner over the tag body (everything after the name, '>' excluded).
fn scan_attributes(body: &str, parsed: &mut ParsedTag) {
    let s = body.as_bytes();
    let len = s.len();
    let mut i = 0usize;

    while i < len {
        // skip whitespace and slashes
        while i < len && (is_ws(s[i]) || s[i] == b'/') {
            i += 1;
        }
        if i >= len {
            break;
        }

        if !is_attr_name_char(s[i]) {
            // Not a valid name start; advance to avoid infinite loops.
            i += 1;
            continue;
        }
        let name_start = i;
        while i < len && is_attr_name_char(s[i]) {
            i += 1;
        }
        let name = &body[name_start..i];

        while i < len && is_ws(s[i]) {
            i += 1;
        }
        if i >= len || s[i] != b'=' {
            // valueless attribute
            continue;
        }
        i += 1;
        while i < len && is_ws(s[i]) {
            i += 1;
        }
        if i >= len {
            break;
        }

        let value = if s[i] == b'"' || s[i] == b'\'' {
            let q = s[i];
            let value_start = i + 1;
            let Some(off) = memchr::memchr(q, &s[value_start..]) else {
                // unterminated quote swallows the rest of the tag
                break;
            };
            i = value_start + off + 1;
            &body[value_start..value_start + off]
        } else {
            let value_start = i;
            while i < len && !is_ws(s[i]) {
                i += 1;
            }
            &body[value_start..i]
        };

        parsed.set_attribute(name.to_ascii_lowercase(), value.to_string());
    }
}

/* ============================== Tag finding ============================== */

/// Byte range of the next `<...>` candidate at or after `from`: the first '<'
/// up to and including the next '>'. `None` when that '<' has no later '>'.
pub(crate) fn find_tag(s: &[u8], from: usize) -> Option<(usize, usize)> {
    let lt = memchr::memchr(b'<', &s[from..]).map(|off| from + off)?;
    let gt = memchr::memchr(b'>', &s[lt + 1..]).map(|off| lt + 1 + off)?;
    Some((lt, gt + 1))
}

/// If `s[i..]` opens a comment, the index just past its end. "<!-->" and
/// "<!--->" are complete empty comments.
pub(crate) fn comment_end(s: &[u8], i: usize) -> Option<usize> {
    if !s[i..].starts_with(b"<!--") {
        return None;
    }
    let body = &s[i + 4..];
    if body.starts_with(b">") {
        return Some(i + 5);
    }
    if body.starts_with(b"->") {
        return Some(i + 6);
    }
    memchr::memmem::find(body, b"-->").map(|off| i + 4 + off + 3)
}
