use std::io;

use async_trait::async_trait;
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Supplies a page's readable text for quiz generation. A trait so the
/// submission flow can run against fakes in tests.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn page_text(&self, url: &str) -> Result<String, ContentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("page returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("could not parse the page: {0}")]
    Parse(#[from] io::Error),
}

/// Fetches pages over HTTP and strips them down to their visible text.
pub struct PageContentFetcher {
    http: reqwest::Client,
}

impl PageContentFetcher {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ContentSource for PageContentFetcher {
    async fn page_text(&self, url: &str) -> Result<String, ContentError> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status()));
        }

        let html = response.text().await?;
        Ok(visible_text(&html)?)
    }
}

/// Extracts the body's visible text, with whitespace runs collapsed to
/// single spaces and the ends trimmed.
pub fn visible_text(html: &str) -> io::Result<String> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    // The parser always synthesizes a body, but fall back to the whole
    // document rather than panic if it ever does not.
    let root = find_element(&dom.document, "body").unwrap_or_else(|| dom.document.clone());

    let mut text = String::new();
    collect_text(&root, &mut text);
    Ok(collapse_whitespace(&text))
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if name.local.as_ref() == tag {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

fn collect_text(handle: &Handle, text: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => {
            text.push_str(&contents.borrow());
            text.push(' ');
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.as_ref();
            if tag != "script" && tag != "style" {
                for child in handle.children.borrow().iter() {
                    collect_text(child, text);
                }
            }
        }
        _ => {
            for child in handle.children.borrow().iter() {
                collect_text(child, text);
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_whitespace_runs() {
        let text =
            visible_text("<html><body><p>Hello\n\n   world</p>\t<p>again</p></body></html>")
                .unwrap();
        assert_eq!(text, "Hello world again");
    }

    #[test]
    fn skips_script_and_style() {
        let html = "<html><head><style>body { color: red; }</style></head>\
                    <body><script>var x = 1;</script><h1>Portfolio</h1></body></html>";
        assert_eq!(visible_text(html).unwrap(), "Portfolio");
    }

    #[test]
    fn ignores_head_content() {
        let html = "<html><head><title>My page</title></head><body>Visible</body></html>";
        assert_eq!(visible_text(html).unwrap(), "Visible");
    }

    #[test]
    fn no_adjacent_whitespace_survives() {
        let text = visible_text("<body>a\u{a0}\u{a0}b   c\n\nd</body>").unwrap();
        assert_eq!(text, "a b c d");
        assert!(!text
            .chars()
            .zip(text.chars().skip(1))
            .any(|(a, b)| a.is_whitespace() && b.is_whitespace()));
    }

    #[test]
    fn no_leading_or_trailing_whitespace_survives() {
        for html in ["  <body> padded  text \n</body>", "<body></body>", "plain words"] {
            let text = visible_text(html).unwrap();
            assert_eq!(text, text.trim());
        }
    }

    #[test]
    fn empty_document_yields_empty_text() {
        assert_eq!(visible_text("").unwrap(), "");
    }
}
