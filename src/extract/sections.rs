//! Heading-delimited section building
//!
//! The text script walks the DOM in order and emits a flat fragment list;
//! this module folds that list into sections. Splitting the traversal (JS)
//! from the assembly (Rust) keeps the fold deterministic and testable
//! without a browser.

use serde::Deserialize;

use crate::extract::schema::Section;

/// One in-order piece of the document: a section-delimiting heading (h1-h4)
/// or a block-level text run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Heading,
    Block,
}

/// Fold an in-order fragment list into heading-delimited sections.
///
/// A new section starts at every heading fragment; block fragments append
/// to the current section. A section is emitted only if it has a heading
/// or accumulated text, so documents opening with a heading don't produce
/// an empty leading section, while content before the first heading forms
/// a section with a `None` heading.
#[must_use]
pub fn build_sections(fragments: &[Fragment]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        heading: None,
        text: Vec::new(),
    };

    for fragment in fragments {
        match fragment.kind {
            FragmentKind::Heading => {
                if current.heading.is_some() || !current.text.is_empty() {
                    sections.push(current);
                }
                current = Section {
                    heading: Some(fragment.text.clone()),
                    text: Vec::new(),
                };
            }
            FragmentKind::Block => {
                let text = fragment.text.trim();
                if !text.is_empty() {
                    current.text.push(text.to_string());
                }
            }
        }
    }

    if current.heading.is_some() || !current.text.is_empty() {
        sections.push(current);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(text: &str) -> Fragment {
        Fragment {
            kind: FragmentKind::Heading,
            text: text.to_string(),
        }
    }

    fn block(text: &str) -> Fragment {
        Fragment {
            kind: FragmentKind::Block,
            text: text.to_string(),
        }
    }

    #[test]
    fn two_headings_two_sections() {
        let sections = build_sections(&[heading("A"), block("x"), heading("B"), block("y")]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading.as_deref(), Some("A"));
        assert_eq!(sections[0].text, vec!["x"]);
        assert_eq!(sections[1].heading.as_deref(), Some("B"));
        assert_eq!(sections[1].text, vec!["y"]);
    }

    #[test]
    fn content_before_first_heading_gets_null_heading() {
        let sections = build_sections(&[block("intro"), heading("A"), block("x")]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, None);
        assert_eq!(sections[0].text, vec!["intro"]);
    }

    #[test]
    fn empty_leading_section_is_dropped() {
        let sections = build_sections(&[heading("A"), block("x")]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading.as_deref(), Some("A"));
    }

    #[test]
    fn heading_without_text_is_kept() {
        let sections = build_sections(&[heading("A"), heading("B"), block("y")]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading.as_deref(), Some("A"));
        assert!(sections[0].text.is_empty());
    }

    #[test]
    fn whitespace_blocks_are_skipped() {
        let sections = build_sections(&[heading("A"), block("   "), block("x")]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].text, vec!["x"]);
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(build_sections(&[]).is_empty());
    }
}
