//! Cookie-header parsing into discrete URL-scoped records

use sitesnap::parse_cookie_header;

#[test]
fn splits_pairs_and_scopes_to_target_url() {
    let records = parse_cookie_header("a=1; b=2", "https://example.com");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "a");
    assert_eq!(records[0].value, "1");
    assert_eq!(records[0].url, "https://example.com");
    assert_eq!(records[1].name, "b");
    assert_eq!(records[1].value, "2");
    assert_eq!(records[1].url, "https://example.com");
}

#[test]
fn order_is_preserved() {
    let records = parse_cookie_header("z=26; a=1; m=13", "https://example.com");
    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
}

#[test]
fn whitespace_around_pairs_is_trimmed() {
    let records = parse_cookie_header("  session = abc123 ;  theme=dark", "https://example.com");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "session");
    assert_eq!(records[0].value, "abc123");
    assert_eq!(records[1].name, "theme");
}

#[test]
fn empty_header_yields_no_records() {
    assert!(parse_cookie_header("", "https://example.com").is_empty());
    assert!(parse_cookie_header("  ;  ; ", "https://example.com").is_empty());
}

#[test]
fn value_with_equals_survives_intact() {
    let records = parse_cookie_header("jwt=header.payload=sig", "https://example.com");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, "header.payload=sig");
}
