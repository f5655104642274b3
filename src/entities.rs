// src/entities.rs
//
// Entity codec.
//
// - escape_html: the five HTML-significant characters → named entities.
// - decode_entities: one left-to-right pass over a fixed table plus numeric
//   references. Decoded output is never re-scanned, so "&amp;lt;" → "&lt;".
// - decode_then_escape: the only form text runs take on their way out of the
//   rewriter; an encoded tag can never come back as live markup.

use memchr::memchr;

/// Longest named reference, '&' and ';' included ("&nbsp;"). Numeric
/// references have no length limit; leading zeros are allowed.
const MAX_NAMED_LEN: usize = 6;

const NAMED: &[(&str, char)] = &[
    ("nbsp", '\u{a0}'),
    ("lt", '<'),
    ("gt", '>'),
    ("amp", '&'),
    ("quot", '"'),
    ("#039", '\''),
    ("#x27", '\''),
];

/// Escape `&`, `<`, `>`, `"` and `'`. Nothing else is touched.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Decode the supported named entities and numeric character references.
/// Anything unrecognized stays verbatim.
pub fn decode_entities(text: &str) -> String {
    let bytes = text.as_bytes();
    let n = bytes.len();
    let mut out = String::with_capacity(n);
    let mut i = 0usize;

    while i < n {
        let Some(amp) = memchr(b'&', &bytes[i..]).map(|off| i + off) else {
            out.push_str(&text[i..]);
            break;
        };
        out.push_str(&text[i..amp]); // safe: '&' is ASCII

        match decode_one(&bytes[amp..]) {
            Some((ch, len)) => {
                out.push(ch);
                i = amp + len;
            }
            None => {
                out.push('&');
                i = amp + 1;
            }
        }
    }
    out
}

pub fn decode_then_escape(text: &str) -> String {
    escape_html(&decode_entities(text))
}

/* ============================ Reference parsing ========================== */

/// `s` starts with '&'. Returns the decoded char and the byte length consumed.
fn decode_one(s: &[u8]) -> Option<(char, usize)> {
    if s.get(1) == Some(&b'#') {
        return decode_numeric(s);
    }
    let window = &s[..s.len().min(MAX_NAMED_LEN)];
    let semi = memchr(b';', window)?;
    let body = &s[1..semi];
    NAMED
        .iter()
        .find(|(name, _)| name.as_bytes() == body)
        .map(|&(_, ch)| (ch, semi + 1))
}

/// `s` starts with "&#". The digit run must be followed directly by ';'.
fn decode_numeric(s: &[u8]) -> Option<(char, usize)> {
    let (start, radix) = match s.get(2) {
        Some(b'x' | b'X') => (3, 16),
        _ => (2, 10),
    };
    let run = s[start..]
        .iter()
        .take_while(|b| (**b as char).is_digit(radix))
        .count();
    let semi = start + run;
    if s.get(semi) != Some(&b';') {
        return None;
    }
    let code = parse_radix(&s[start..semi], radix)?;
    if code == 0 {
        return None;
    }
    char::from_u32(code).map(|ch| (ch, semi + 1))
}

fn parse_radix(digits: &[u8], radix: u32) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &b in digits {
        let d = (b as char).to_digit(radix)?;
        value = value.checked_mul(radix)?.checked_add(d)?;
    }
    Some(value)
}
