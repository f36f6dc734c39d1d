//! Cookie-header parsing
//!
//! Requests may carry a raw `Cookie`-style header string ("a=1; b=2"); the
//! browser wants discrete cookie records scoped to the target URL.

/// One cookie derived from a raw cookie-header string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    /// Target URL the cookie is scoped to
    pub url: String,
}

/// Split a raw `"name=value; name2=value2"` header into cookie records
/// scoped to `target_url`.
///
/// Entries without a name are skipped; values may be empty. A value
/// containing `=` is kept intact (split happens on the first `=` only).
#[must_use]
pub fn parse_cookie_header(header: &str, target_url: &str) -> Vec<CookieRecord> {
    header
        .split(';')
        .filter_map(|pair| {
            let pair = pair.trim();
            if pair.is_empty() {
                return None;
            }
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (name.trim(), value.trim()),
                None => (pair, ""),
            };
            if name.is_empty() {
                return None;
            }
            Some(CookieRecord {
                name: name.to_string(),
                value: value.to_string(),
                url: target_url.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_cookies_scoped_to_url() {
        let records = parse_cookie_header("a=1; b=2", "https://example.com");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a");
        assert_eq!(records[0].value, "1");
        assert_eq!(records[0].url, "https://example.com");
        assert_eq!(records[1].name, "b");
        assert_eq!(records[1].value, "2");
    }

    #[test]
    fn keeps_equals_in_value() {
        let records = parse_cookie_header("token=abc=def", "https://example.com");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, "abc=def");
    }

    #[test]
    fn skips_empty_segments() {
        let records = parse_cookie_header("; a=1;; =nameless ;", "https://example.com");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "a");
    }

    #[test]
    fn bare_name_gets_empty_value() {
        let records = parse_cookie_header("flag", "https://example.com");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "flag");
        assert_eq!(records[0].value, "");
    }
}
