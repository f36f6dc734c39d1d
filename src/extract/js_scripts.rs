//! JavaScript evaluation scripts
//!
//! This module contains the JavaScript code used to extract structured
//! data from web pages. Each script is one read-only IIFE returning a
//! JSON-serializable value.

/// Extract the structured document: title, meta/Open Graph tags, raw
/// JSON-LD bodies, headings, links, images, script and stylesheet URLs.
///
/// Link/image `href`/`src` use the resolved absolute properties so relative
/// URLs come back usable. Caps are applied on the Rust side to keep the
/// truncation logic testable.
pub const DOCUMENT_SCRIPT: &str = r#"
    (() => {
        const meta = [];
        const openGraph = [];
        document.querySelectorAll('meta').forEach(tag => {
            const property = tag.getAttribute('property');
            const name = tag.getAttribute('name');
            const content = tag.getAttribute('content') || '';
            if (property && property.startsWith('og:')) {
                openGraph.push({ property: property, content: content });
            } else if (name) {
                meta.push({ name: name, content: content });
            }
        });

        const jsonLd = Array.from(document.querySelectorAll('script[type="application/ld+json"]'))
            .map(s => s.textContent || '');

        const headings = Array.from(document.querySelectorAll('h1, h2, h3, h4, h5, h6'))
            .map(h => ({ tag: h.tagName.toLowerCase(), text: (h.textContent || '').trim() }));

        const links = Array.from(document.querySelectorAll('a[href]'))
            .map(a => ({ href: a.href, text: (a.textContent || '').trim() }));

        const images = Array.from(document.querySelectorAll('img[src]'))
            .map(img => ({ src: img.src, alt: img.alt || '' }));

        const scripts = Array.from(document.getElementsByTagName('script'))
            .filter(s => s.src)
            .map(s => s.src);

        const stylesheets = Array.from(document.getElementsByTagName('link'))
            .filter(l => l.rel === 'stylesheet' && l.href)
            .map(l => l.href);

        return {
            url: window.location.href,
            title: document.title,
            meta: meta,
            openGraph: openGraph,
            jsonLd: jsonLd,
            headings: headings,
            links: links,
            images: images,
            scripts: scripts,
            stylesheets: stylesheets
        };
    })()
"#;

/// Extract the text view: full visible body text, block-level texts from a
/// fixed tag set, and a flat in-order fragment list for section building.
///
/// The fragment walk descends into containers but stops at a block element
/// unless it wraps a section-delimiting heading (h1-h4); emitting a
/// wrapper's textContent AND its children would duplicate every nested
/// block.
pub const TEXT_SCRIPT: &str = r#"
    (() => {
        const blockTags = ['P', 'LI', 'TD', 'TH', 'DT', 'DD', 'SPAN', 'DIV'];

        const fullText = document.body ? document.body.innerText : '';

        const blocks = Array.from(document.querySelectorAll('p, li, td, th, dt, dd, span, div'))
            .map(el => (el.textContent || '').trim());

        const fragments = [];
        const walk = (node) => {
            if (node.nodeType !== Node.ELEMENT_NODE) return;
            const tag = node.tagName;
            if (/^H[1-4]$/.test(tag)) {
                fragments.push({ kind: 'heading', text: (node.textContent || '').trim() });
                return;
            }
            if (blockTags.includes(tag) && !node.querySelector('h1, h2, h3, h4')) {
                const text = (node.textContent || '').trim();
                if (text) fragments.push({ kind: 'block', text: text });
                return;
            }
            for (const child of node.children) walk(child);
        };
        if (document.body) {
            for (const child of document.body.children) walk(child);
        }

        return { fullText: fullText, blocks: blocks, fragments: fragments };
    })()
"#;
