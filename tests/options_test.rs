//! Request-option deserialization and defaults

use sitesnap::{ScrapeOptions, WaitUntil};

#[test]
fn empty_options_take_documented_defaults() {
    let opts: ScrapeOptions = serde_json::from_str("{}").unwrap();

    assert_eq!(opts.wait_until, None);
    assert_eq!(opts.max_links, 1000);
    assert_eq!(opts.max_images, 500);
    assert!(!opts.include_text);
    assert_eq!(opts.cookie_header, None);
    assert_eq!(opts.extra_headers, None);
    assert_eq!(opts.viewport_width, 1366);
    assert_eq!(opts.viewport_height, 768);
    assert_eq!(opts.max_shots, 30);
    assert_eq!(opts.scroll_overlap, 0);
    assert!(!opts.full_page);
    assert!(!opts.expand_clicks);
}

#[test]
fn camel_case_fields_are_accepted() {
    let opts: ScrapeOptions = serde_json::from_str(
        r#"{
            "waitUntil": "networkidle",
            "maxLinks": 10,
            "maxImages": 5,
            "includeText": true,
            "cookieHeader": "a=1; b=2",
            "viewportWidth": 1920,
            "viewportHeight": 1080,
            "maxShots": 4,
            "scrollOverlap": 64,
            "fullPage": true,
            "expandClicks": true
        }"#,
    )
    .unwrap();

    assert_eq!(opts.wait_until, Some(WaitUntil::NetworkIdle));
    assert_eq!(opts.max_links, 10);
    assert_eq!(opts.max_images, 5);
    assert!(opts.include_text);
    assert_eq!(opts.cookie_header.as_deref(), Some("a=1; b=2"));
    assert_eq!(opts.viewport_width, 1920);
    assert_eq!(opts.viewport_height, 1080);
    assert_eq!(opts.max_shots, 4);
    assert_eq!(opts.scroll_overlap, 64);
    assert!(opts.full_page);
    assert!(opts.expand_clicks);
}

#[test]
fn wait_until_parses_both_policies() {
    let dom: ScrapeOptions = serde_json::from_str(r#"{"waitUntil":"domcontentloaded"}"#).unwrap();
    assert_eq!(dom.wait_until, Some(WaitUntil::DomContentLoaded));

    let idle: ScrapeOptions = serde_json::from_str(r#"{"waitUntil":"networkidle"}"#).unwrap();
    assert_eq!(idle.wait_until, Some(WaitUntil::NetworkIdle));
}

#[test]
fn unknown_wait_until_is_rejected() {
    let result = serde_json::from_str::<ScrapeOptions>(r#"{"waitUntil":"load"}"#);
    assert!(result.is_err());
}

#[test]
fn extra_headers_deserialize_as_map() {
    let opts: ScrapeOptions =
        serde_json::from_str(r#"{"extraHeaders":{"X-Trace":"abc","Accept-Language":"de"}}"#)
            .unwrap();
    let headers = opts.extra_headers.unwrap();
    assert_eq!(headers.get("X-Trace").map(String::as_str), Some("abc"));
    assert_eq!(headers.len(), 2);
}

#[test]
fn viewport_accessor_combines_dimensions() {
    let opts: ScrapeOptions =
        serde_json::from_str(r#"{"viewportWidth":800,"viewportHeight":600}"#).unwrap();
    let viewport = opts.viewport();
    assert_eq!(viewport.width, 800);
    assert_eq!(viewport.height, 600);
}
