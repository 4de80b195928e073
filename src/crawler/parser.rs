//! HTML parser for extracting page text and links
//!
//! This module turns raw page content into:
//! - The plain text of the document (every text node, in document order)
//! - The raw `href` values of `<a>` elements, unresolved

use scraper::{Html, Selector};

/// Extracted information from a page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Plain text of the page
    pub text: String,

    /// Raw hyperlink targets, in document order, exactly as written
    pub links: Vec<String>,
}

/// Turns fetched content into text and hyperlink targets
///
/// An `Err` carries a description of why the content could not be read; the
/// engine attaches the address and records the page as a parse failure.
pub trait Extractor: Send + Sync {
    fn extract(&self, content: &str) -> Result<ExtractedPage, String>;
}

/// Extractor for HTML documents, built on `scraper`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl Extractor for HtmlExtractor {
    fn extract(&self, content: &str) -> Result<ExtractedPage, String> {
        parse_html(content)
    }
}

/// Parses HTML content and extracts text and links
///
/// # Extraction Rules
///
/// - Text is the concatenation of all text nodes of the document, including
///   those inside `<script>` and `<style>`
/// - Links come from `<a>` elements that carry an `href` attribute; anchors
///   without one are skipped
/// - Link targets are not trimmed, filtered or resolved
///
/// The HTML5 parser recovers from malformed markup, so this only fails if
/// the link selector itself cannot be built.
///
/// # Example
///
/// ```
/// use site_indexer::crawler::parse_html;
///
/// let html = r#"<html><body><h1>Welcome!</h1><a href="/about">About</a></body></html>"#;
/// let page = parse_html(html).unwrap();
/// assert!(page.text.contains("Welcome!"));
/// assert_eq!(page.links, vec!["/about".to_string()]);
/// ```
pub fn parse_html(html: &str) -> Result<ExtractedPage, String> {
    let document = Html::parse_document(html);

    let text = extract_text(&document);
    let links = extract_links(&document)?;

    Ok(ExtractedPage { text, links })
}

/// Collects every text node of the document
fn extract_text(document: &Html) -> String {
    document.root_element().text().collect::<String>()
}

/// Collects raw `href` values of anchors, skipping empty ones
fn extract_links(document: &Html) -> Result<Vec<String>, String> {
    let a_selector =
        Selector::parse("a[href]").map_err(|e| format!("Invalid link selector: {}", e))?;

    Ok(document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect())
}
