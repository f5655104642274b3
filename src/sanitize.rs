// src/sanitize.rs
//
// Sanitizing rewriter.
//
// - One left-to-right scan. Every '<' up to the next '>' is a tag candidate;
//   the text between candidates is decoded and re-escaped, so the content of
//   dropped tags survives as inert text.
// - HTML comments are dropped whole, '>' inside them included.
// - Tags: unparseable or not allowlisted → dropped. Allowed closing tags are
//   emitted as "</name>". Allowed opening tags are rebuilt from their
//   allowlisted attributes only.
// - Links: a safe href always gets target="_blank" rel="noopener noreferrer"
//   right after it; user-supplied target/rel are then ignored.
// - No tree, no balancing: safety is per tag, not well-formedness.

use crate::entities::{decode_entities, decode_then_escape, escape_html};
use crate::links::is_safe_url_with;
use crate::policy::Policy;
use crate::style::sanitize_style_with;
use crate::tag::{comment_end, find_tag, parse_tag_with, ParsedTag};

const FORCED_TARGET: &str = "_blank";
const FORCED_REL: &str = "noopener noreferrer";

/// Rewrite `input` into the safe markup subset of the default policy.
pub fn sanitize_html(input: &str) -> String {
    sanitize_html_with(input, &Policy::DEFAULT)
}

pub fn sanitize_html_with(input: &str, policy: &Policy) -> String {
    let src = input.as_bytes();
    let n = src.len();
    let mut out = String::with_capacity(n + n / 8);
    let mut i = 0usize;

    while i < n {
        let Some((lt, end)) = find_tag(src, i) else {
            out.push_str(&decode_then_escape(&input[i..]));
            break;
        };
        out.push_str(&decode_then_escape(&input[i..lt]));

        if let Some(after) = comment_end(src, lt) {
            tracing::trace!("dropped comment");
            i = after;
            continue;
        }

        let raw = &input[lt..end];
        match parse_tag_with(raw, policy) {
            None => tracing::trace!(len = raw.len(), "dropped unparseable tag"),
            Some(tag) if !policy.is_allowed_tag(&tag.name) => {
                tracing::debug!(tag = %tag.name, "dropped disallowed tag");
            }
            Some(tag) if tag.closing => {
                out.push_str("</");
                out.push_str(&tag.name);
                out.push('>');
            }
            Some(tag) => write_open_tag(&tag, policy, &mut out),
        }
        i = end;
    }

    out
}

/* ============================ Tag reassembly ============================= */

fn write_open_tag(tag: &ParsedTag, policy: &Policy, out: &mut String) {
    out.push('<');
    out.push_str(&tag.name);

    let safe_href = if policy.is_allowed_attribute(&tag.name, "href") {
        tag.attribute("href")
            .map(decode_entities)
            .filter(|href| is_safe_url_with(href, policy))
    } else {
        None
    };

    for (name, value) in &tag.attributes {
        if !policy.is_allowed_attribute(&tag.name, name) {
            tracing::debug!(tag = %tag.name, attribute = %name, "dropped attribute");
            continue;
        }
        match name.as_str() {
            "href" => {
                if let Some(href) = &safe_href {
                    push_attribute(out, "href", &escape_html(href));
                    push_attribute(out, "target", FORCED_TARGET);
                    push_attribute(out, "rel", FORCED_REL);
                }
            }
            "target" | "rel" if safe_href.is_some() => {}
            "style" => {
                let style = sanitize_style_with(&decode_entities(value), policy);
                if !style.is_empty() {
                    push_attribute(out, "style", &escape_html(&style));
                }
            }
            _ => push_attribute(out, name, &decode_then_escape(value)),
        }
    }

    if tag.self_closing {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

/// `value` must already be escaped.
fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_allowed_formatting() {
        assert_eq!(
            sanitize_html("<p>Hello <b>bold</b> and <EM>em</EM></p>"),
            "<p>Hello <b>bold</b> and <em>em</em></p>"
        );
        assert_eq!(sanitize_html("<ul><li>one</li><li>two</li></ul>"), "<ul><li>one</li><li>two</li></ul>");
        assert_eq!(sanitize_html("line<br>next<hr/>"), "line<br />next<hr />");
    }

    #[test]
    fn strips_unknown_tags_but_keeps_content() {
        let out = sanitize_html("<custom>Important text</custom>");
        assert!(out.contains("Important text"));
        assert!(!out.contains("<custom>"));
        assert_eq!(out, "Important text");
    }

    #[test]
    fn script_tags_are_removed() {
        let out = sanitize_html("<script>alert('xss')</script>Hello");
        assert_eq!(out, "alert(&#039;xss&#039;)Hello");
        assert_eq!(sanitize_html("<SCRIPT src=//evil.js></SCRIPT>"), "");
    }

    #[test]
    fn event_handlers_are_dropped() {
        assert_eq!(sanitize_html(r#"<img src=x onerror="alert(1)">"#), "");
        assert_eq!(sanitize_html(r#"<p onclick='steal()' class="x">hi</p>"#), r#"<p class="x">hi</p>"#);
        assert_eq!(sanitize_html("<div ONLOAD=go()>x</div>"), "<div>x</div>");
    }

    #[test]
    fn links_are_hardened() {
        let out = sanitize_html(r#"<a href="https://example.com">Link</a>"#);
        assert_eq!(
            out,
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">Link</a>"#
        );
    }

    #[test]
    fn user_target_and_rel_are_overridden() {
        let out = sanitize_html(r#"<a target="_self" href="/x" rel="opener" title="t">y</a>"#);
        assert_eq!(
            out,
            r#"<a href="/x" target="_blank" rel="noopener noreferrer" title="t">y</a>"#
        );
    }

    #[test]
    fn unsafe_hrefs_are_dropped_whole() {
        assert_eq!(sanitize_html(r#"<a href="javascript:alert(1)">Link</a>"#), "<a>Link</a>");
        assert_eq!(sanitize_html(r#"<a href="JAVASCRIPT:alert(1)" title="t">x</a>"#), r#"<a title="t">x</a>"#);
        assert_eq!(sanitize_html(r#"<a href="javascript&#58;alert(1)">x</a>"#), "<a>x</a>");
        assert_eq!(sanitize_html(r#"<a href=data:text/html,hi>x</a>"#), "<a>x</a>");
        assert_eq!(sanitize_html("<a href=''>x</a>"), "<a>x</a>");
    }

    #[test]
    fn href_only_counts_where_allowed() {
        assert_eq!(sanitize_html(r#"<span href="https://x.test">s</span>"#), "<span>s</span>");
    }

    #[test]
    fn style_is_filtered_or_omitted() {
        assert_eq!(
            sanitize_html(r#"<span style="color: red; background: url(x)">r</span>"#),
            r#"<span style="color: red">r</span>"#
        );
        assert_eq!(sanitize_html(r#"<span style="position: fixed">r</span>"#), "<span>r</span>");
        assert_eq!(
            sanitize_html(r#"<div style='font-family: "Arial"'>f</div>"#),
            r#"<div style="font-family: &quot;Arial&quot;">f</div>"#
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(
            sanitize_html(r#"<a title='say "hi" & <wave' href="/x?a=1&amp;b=2">x</a>"#),
            r#"<a title="say &quot;hi&quot; &amp; &lt;wave" href="/x?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">x</a>"#
        );
    }

    #[test]
    fn text_is_escaped_and_encoded_markup_stays_inert() {
        assert_eq!(sanitize_html("a < b && c"), "a &lt; b &amp;&amp; c");
        assert_eq!(
            sanitize_html("&lt;script&gt;alert(1)&lt;/script&gt;"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(sanitize_html("x&nbsp;y"), "x\u{a0}y");
    }

    #[test]
    fn malformed_candidates_are_dropped() {
        assert_eq!(sanitize_html("a <> b"), "a  b");
        assert_eq!(sanitize_html("1 < 2 > 0"), "1  0");
        assert_eq!(sanitize_html("<scr<script>ipt>alert(1)"), "ipt&gt;alert(1)");
    }

    #[test]
    fn comments_are_dropped_whole() {
        assert_eq!(sanitize_html("a<!-- <script> x > y -->b"), "ab");
        assert_eq!(sanitize_html("a<!-- open > b"), "a b");
    }

    #[test]
    fn abrupt_empty_comments_keep_following_text() {
        assert_eq!(sanitize_html("<!-->Important text<!-- note -->"), "Important text");
        assert_eq!(
            sanitize_html("<p>keep</p><!--->lost<b>x</b> -->tail"),
            "<p>keep</p>lost<b>x</b> --&gt;tail"
        );
    }

    #[test]
    fn gt_inside_a_quoted_value_ends_the_tag() {
        assert_eq!(
            sanitize_html(r#"<a title="x>y" onclick="z">k</a>"#),
            "<a>y&quot; onclick=&quot;z&quot;&gt;k</a>"
        );
    }

    #[test]
    fn plain_attributes_keep_script_like_text_inert() {
        assert_eq!(
            sanitize_html(r#"<a href="/x" title="javascript:alert(1) onerror=x">x</a>"#),
            r#"<a href="/x" target="_blank" rel="noopener noreferrer" title="javascript:alert(1) onerror=x">x</a>"#
        );
    }

    #[test]
    fn closing_tags_carry_no_attributes() {
        assert_eq!(sanitize_html(r#"<b>x</b onclick="y">"#), "<b>x</b>");
    }

    #[test]
    fn unbalanced_markup_passes_tag_by_tag() {
        assert_eq!(sanitize_html("</p><b>open"), "</p><b>open");
    }

    #[test]
    fn attributes_on_tags_without_entry_are_dropped() {
        assert_eq!(sanitize_html(r#"<li class="x" style="color: red">i</li>"#), "<li>i</li>");
    }

    #[test]
    fn injected_policy_is_honoured() {
        let policy = Policy { allowed_tags: &["b"], ..Policy::DEFAULT };
        assert_eq!(sanitize_html_with("<p><b>x</b></p>", &policy), "<b>x</b>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize_html(""), "");
    }

    #[test]
    fn idempotent_on_samples() {
        for input in [
            r#"<a href=https://x.test TITLE=hi target=_self>l</a>"#,
            r#"<span style="color:red;font-size : 2em" class=a>s</span>"#,
            "&amp;lt; &#0; &bogus; <br><br/>",
            "<p/>x<img src=x onerror=alert(1)>",
            r#"<div title="a&b'c">d</div>"#,
        ] {
            let once = sanitize_html(input);
            assert_eq!(sanitize_html(&once), once, "input: {input}");
        }
    }
}
