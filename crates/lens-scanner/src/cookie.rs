//! `Set-Cookie` header parsing.
//!
//! Produces the same attribute shape a browser cookie jar reports: the
//! domain defaults to the request host, the path to `/`, and a cookie
//! without `Expires` or `Max-Age` is a session cookie with `expires = -1`.

use chrono::{DateTime, Utc};
use lens_core::entities::Cookie;

/// `expires` value of a cookie that lives for the browser session only.
pub const SESSION_EXPIRY: f64 = -1.0;

/// Parse one `Set-Cookie` header value.
///
/// Returns `None` when the header has no `name=value` pair or the name is
/// empty. Unknown attributes are ignored.
#[must_use]
pub fn parse_set_cookie(header: &str, request_host: &str, now: DateTime<Utc>) -> Option<Cookie> {
    let mut parts = header.split(';');
    let (name, value) = parts.next()?.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let mut cookie = Cookie {
        value: value.trim().trim_matches('"').to_string(),
        domain: Some(request_host.to_string()),
        path: Some("/".into()),
        ..Cookie::named(name)
    };
    let mut expires = None;
    let mut max_age = None;

    for attribute in parts {
        let (key, val) = attribute
            .split_once('=')
            .map_or((attribute.trim(), ""), |(k, v)| (k.trim(), v.trim()));

        match key.to_ascii_lowercase().as_str() {
            "secure" => cookie.secure = true,
            "httponly" => cookie.http_only = true,
            "samesite" if !val.is_empty() => cookie.same_site = Some(normalize_same_site(val)),
            "domain" if !val.is_empty() => cookie.domain = Some(val.to_ascii_lowercase()),
            "path" if val.starts_with('/') => cookie.path = Some(val.to_string()),
            "expires" => expires = parse_expires(val),
            "max-age" => max_age = val.parse::<i64>().ok(),
            _ => {}
        }
    }

    // Max-Age wins over Expires.
    #[allow(clippy::cast_precision_loss)]
    let expiry = match (max_age, expires) {
        (Some(seconds), _) => (now.timestamp() + seconds) as f64,
        (None, Some(at)) => at.timestamp() as f64,
        (None, None) => SESSION_EXPIRY,
    };
    cookie.expires = Some(expiry);

    Some(cookie)
}

/// `lax` → `Lax`, matching how browsers report the attribute.
fn normalize_same_site(value: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        "lax" => "Lax".into(),
        "strict" => "Strict".into(),
        "none" => "None".into(),
        _ => value.to_string(),
    }
}

/// Cookie dates are RFC 1123 (`Wed, 21 Oct 2015 07:28:00 GMT`); some servers
/// send the dashed RFC 850 form (`Wednesday, 21-Oct-2015 07:28:00 GMT`).
fn parse_expires(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .map(|at| at.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(value, "%A, %d-%b-%Y %H:%M:%S GMT")
                .or_else(|_| chrono::NaiveDateTime::parse_from_str(value, "%a, %d-%b-%Y %H:%M:%S GMT"))
                .ok()
                .map(|naive| naive.and_utc())
        })
}
