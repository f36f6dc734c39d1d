//! Data shapes for structured page extraction
//!
//! `ExtractedDocument` is the response contract; `RawDocument`/`RawText`
//! mirror what the evaluation scripts return before caps and parsing are
//! applied on the Rust side.

use serde::{Deserialize, Serialize};

/// A `<meta name=...>` tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// A `<meta property="og:...">` Open Graph tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphTag {
    pub property: String,
    pub content: String,
}

/// One JSON-LD script block: parsed JSON, or the trimmed raw text when the
/// block does not parse
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonLd {
    Parsed(serde_json::Value),
    Raw(String),
}

/// A document heading (h1-h6)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub tag: String,
    pub text: String,
}

/// An anchor with a resolved href
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// An image with a resolved src
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// A heading-delimited run of text fragments
///
/// `heading` is `None` for content preceding the first h1-h4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: Option<String>,
    pub text: Vec<String>,
}

/// Text view of a page, present when `includeText` was requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageText {
    /// Whitespace-collapsed visible body text, length-capped
    pub full_text: String,
    /// Trimmed block-level texts (p, li, td, th, dt, dd, span, div),
    /// empties dropped, count-capped
    pub blocks: Vec<String>,
    /// Heading-delimited sections in document order
    pub sections: Vec<Section>,
}

/// The structured-data result for one scraped page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    /// Final URL after redirects
    pub url: String,
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub open_graph: Vec<OpenGraphTag>,
    pub json_ld: Vec<JsonLd>,
    pub headings: Vec<Heading>,
    /// First `maxLinks` anchors in document order
    pub links: Vec<Link>,
    /// First `maxImages` images in document order
    pub images: Vec<ImageRef>,
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<PageText>,
}

/// Untruncated document shape as returned by [`super::js_scripts::DOCUMENT_SCRIPT`]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    pub url: String,
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub open_graph: Vec<OpenGraphTag>,
    /// Raw JSON-LD script bodies, not yet parsed
    pub json_ld: Vec<String>,
    pub headings: Vec<Heading>,
    pub links: Vec<Link>,
    pub images: Vec<ImageRef>,
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
}

/// Text shape as returned by [`super::js_scripts::TEXT_SCRIPT`]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawText {
    pub full_text: String,
    pub blocks: Vec<String>,
    pub fragments: Vec<super::sections::Fragment>,
}
