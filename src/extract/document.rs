//! Structured-data extraction
//!
//! One read-only evaluation pass assembles the raw document; Rust applies
//! the link/image caps, parses JSON-LD blocks, and optionally runs the
//! text pass.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use log::debug;

use super::js_scripts::{DOCUMENT_SCRIPT, TEXT_SCRIPT};
use super::schema::{ExtractedDocument, JsonLd, PageText, RawDocument, RawText};
use super::sections::build_sections;
use crate::utils::constants::{
    DEFAULT_MAX_IMAGES, DEFAULT_MAX_LINKS, MAX_TEXT_BLOCKS, MAX_TEXT_CHARS,
};
use crate::utils::{collapse_whitespace, safe_truncate_chars};

/// Controls for structured-data extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub max_links: usize,
    pub max_images: usize,
    pub include_text: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_links: DEFAULT_MAX_LINKS,
            max_images: DEFAULT_MAX_IMAGES,
            include_text: false,
        }
    }
}

/// Run the extraction pass over a loaded page.
pub async fn extract_document(page: &Page, opts: &ExtractOptions) -> Result<ExtractedDocument> {
    let raw: RawDocument = page
        .evaluate(DOCUMENT_SCRIPT)
        .await
        .context("Document extraction script failed")?
        .into_value()
        .map_err(|e| anyhow::anyhow!("Failed to parse document extraction result: {e}"))?;

    let text = if opts.include_text {
        Some(extract_text(page).await?)
    } else {
        None
    };

    let document = assemble_document(raw, opts, text);
    debug!(
        "Extracted {} links, {} images, {} headings from {}",
        document.links.len(),
        document.images.len(),
        document.headings.len(),
        document.url
    );
    Ok(document)
}

/// Apply caps and JSON-LD parsing to a raw script result.
///
/// Pure so the truncation and ordering invariants are testable without a
/// browser.
#[must_use]
pub fn assemble_document(
    raw: RawDocument,
    opts: &ExtractOptions,
    text: Option<PageText>,
) -> ExtractedDocument {
    let mut links = raw.links;
    links.truncate(opts.max_links);
    let mut images = raw.images;
    images.truncate(opts.max_images);

    let json_ld = raw.json_ld.iter().map(|s| parse_json_ld(s)).collect();

    ExtractedDocument {
        url: raw.url,
        title: raw.title,
        meta: raw.meta,
        open_graph: raw.open_graph,
        json_ld,
        headings: raw.headings,
        links,
        images,
        scripts: raw.scripts,
        stylesheets: raw.stylesheets,
        text,
    }
}

/// Strict JSON parse of a JSON-LD block body, falling back to the trimmed
/// raw text. Never fails: malformed structured data is still worth
/// returning.
#[must_use]
pub fn parse_json_ld(raw: &str) -> JsonLd {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => JsonLd::Parsed(value),
        Err(_) => JsonLd::Raw(raw.trim().to_string()),
    }
}

async fn extract_text(page: &Page) -> Result<PageText> {
    let raw: RawText = page
        .evaluate(TEXT_SCRIPT)
        .await
        .context("Text extraction script failed")?
        .into_value()
        .map_err(|e| anyhow::anyhow!("Failed to parse text extraction result: {e}"))?;

    Ok(assemble_text(raw))
}

/// Collapse, trim, and cap the raw text pass output.
#[must_use]
pub fn assemble_text(raw: RawText) -> PageText {
    let collapsed = collapse_whitespace(&raw.full_text);
    let full_text = safe_truncate_chars(&collapsed, MAX_TEXT_CHARS).to_string();

    let mut blocks: Vec<String> = raw
        .blocks
        .iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect();
    blocks.truncate(MAX_TEXT_BLOCKS);

    let sections = build_sections(&raw.fragments);

    PageText {
        full_text,
        blocks,
        sections,
    }
}
