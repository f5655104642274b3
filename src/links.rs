// src/links.rs
//
// URL validator for `href` values.
//
// Root-relative ("/…") and fragment ("#…") references pass as-is. Everything
// else is resolved against a fixed base; a reference that does not resolve,
// or resolves to a scheme outside the policy's protocol set, is unsafe.

use crate::policy::Policy;
use std::sync::LazyLock;
use url::Url;

static BASE: LazyLock<Option<Url>> = LazyLock::new(|| Url::parse("https://localhost/").ok());

/// `true` if `url` may be emitted as a navigable link under the default policy.
pub fn is_safe_url(url: &str) -> bool {
    is_safe_url_with(url, &Policy::DEFAULT)
}

pub fn is_safe_url_with(url: &str, policy: &Policy) -> bool {
    if url.is_empty() {
        return false;
    }
    if url.starts_with('/') || url.starts_with('#') {
        return true;
    }

    let Some(base) = BASE.as_ref() else {
        return false;
    };
    match base.join(url) {
        Ok(resolved) => {
            let scheme = format!("{}:", resolved.scheme());
            let safe = policy.is_safe_protocol(&scheme);
            if !safe {
                tracing::debug!(%scheme, "rejected link with disallowed scheme");
            }
            safe
        }
        Err(err) => {
            tracing::debug!(%err, "rejected unresolvable link");
            false
        }
    }
}
