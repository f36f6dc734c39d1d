//! Structured page-data extraction
//!
//! Read-only queries over a loaded page: metadata, Open Graph, JSON-LD,
//! headings, links, images, resource URLs, and the optional text view.

pub mod document;
pub mod js_scripts;
pub mod schema;
pub mod sections;

pub use document::{ExtractOptions, extract_document, parse_json_ld};
pub use schema::{ExtractedDocument, JsonLd, PageText, Section};
pub use sections::build_sections;
