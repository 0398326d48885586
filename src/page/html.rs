// src/page/html.rs
// =============================================================================
// This module pulls link and image references out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Values are returned exactly as written in the page. Resolving them to
// absolute URLs is the crawler's job (see crawl::resolve).
// =============================================================================

use scraper::{Html, Selector};

/// Raw references found in one page, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageRefs {
    /// `href` values of `<a>` elements
    pub links: Vec<String>,
    /// `src` values of `<img>` elements
    pub images: Vec<String>,
}

// Extracts anchor hrefs and image sources from HTML content
//
// Elements without the attribute (or with an empty one) are skipped,
// so nothing downstream ever has to resolve an empty string.
//
// Example:
//   html = "<a href='/docs'>Docs</a><img src='logo.png'><a>no href</a>"
//   result = PageRefs { links: ["/docs"], images: ["logo.png"] }
pub fn extract_page_refs(html: &str) -> PageRefs {
    let document = Html::parse_document(html);

    // The selectors are constants, so parsing them cannot fail at runtime
    let anchors = Selector::parse("a[href]").unwrap();
    let images = Selector::parse("img[src]").unwrap();

    PageRefs {
        links: attribute_values(&document, &anchors, "href"),
        images: attribute_values(&document, &images, "src"),
    }
}

fn attribute_values(document: &Html, selector: &Selector, attr: &str) -> Vec<String> {
    document
        .select(selector)
        .filter_map(|element| element.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does "a[href]" mean?
//    - It's a CSS selector: "all <a> tags that have an href attribute"
//    - <a> tags without href never match, so they are skipped for free
//
// 2. Why filter_map?
//    - .attr() returns Option<&str>
//    - filter_map keeps the Some values and drops the None ones in one step
//
// 3. Why str::trim before the empty check?
//    - href="  " is as useless as href=""
//    - Trimming also removes stray newlines some templates leave behind
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_links_and_images_in_order() {
        let html = r#"
            <a href="https://example.com/one">One</a>
            <img src="/a.png">
            <a href="/two">Two</a>
            <img src="b.jpg">
            <a href="three">Three</a>
        "#;
        let refs = extract_page_refs(html);
        assert_eq!(
            refs.links,
            vec!["https://example.com/one", "/two", "three"]
        );
        assert_eq!(refs.images, vec!["/a.png", "b.jpg"]);
    }

    #[test]
    fn test_missing_attributes_are_skipped() {
        let html = r#"
            <a name="top">Anchor without href</a>
            <a href="/real">Real</a>
            <img alt="no source">
            <img src="/real.png">
        "#;
        let refs = extract_page_refs(html);
        assert_eq!(refs.links, vec!["/real"]);
        assert_eq!(refs.images, vec!["/real.png"]);
    }

    #[test]
    fn test_empty_attributes_are_skipped() {
        let html = r#"<a href="">Empty</a><a href="  ">Blank</a><img src="">"#;
        let refs = extract_page_refs(html);
        assert!(refs.links.is_empty());
        assert!(refs.images.is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_page_refs(""), PageRefs::default());
    }
}
