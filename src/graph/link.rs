//! The link node type
//!
//! A `Link` is one node in the crawl graph: a URL plus whatever the
//! crawler learned about it. Child order is the order links were found
//! on the page; parents are an unordered set of referencing URLs.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// One node in the crawl graph
#[derive(Debug, Clone)]
pub struct Link {
    /// The unique URL identifying this link
    pub url: String,

    /// Page title, if one was found
    pub title: Option<String>,

    /// Page author, if one was declared
    pub author: Option<String>,

    /// Human-readable fetch result (e.g. an HTTP status summary)
    pub status: Option<String>,

    /// Declared content type
    pub mimetype: Option<String>,

    /// Resource size in bytes
    pub size: Option<u64>,

    /// Last modification time reported for the resource
    pub mtime: Option<DateTime<Utc>>,

    /// Whether the resource belongs to the site under check
    pub is_internal: bool,

    /// True when the link was deliberately not fetched
    pub is_yanked: bool,

    /// True when the resource had markup content (a renderable page)
    pub is_page: bool,

    /// 0 for a normal link; >0 marks a redirect hop count. A redirect's
    /// single child is its target.
    pub redirect_depth: u32,

    /// Outbound references in discovery order
    pub children: Vec<String>,

    /// Inbound references; populated by whichever link discovered this
    /// one as a child
    pub parents: BTreeSet<String>,

    /// Accumulated diagnostic messages in discovery order
    pub problems: Vec<String>,

    /// Staleness in whole days, derived from `mtime` against a reference
    /// instant when the graph is loaded. `None` when `mtime` is unknown.
    pub age: Option<i64>,
}

impl Link {
    /// Creates a new link with no metadata beyond its URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            author: None,
            status: None,
            mimetype: None,
            size: None,
            mtime: None,
            is_internal: false,
            is_yanked: false,
            is_page: false,
            redirect_depth: 0,
            children: Vec::new(),
            parents: BTreeSet::new(),
            problems: Vec::new(),
            age: None,
        }
    }

    /// Returns the title to display for this link.
    ///
    /// Falls back to the URL when no title was recorded or the recorded
    /// title is empty.
    pub fn display_title(&self) -> &str {
        match &self.title {
            Some(title) if !title.is_empty() => title,
            _ => &self.url,
        }
    }

    /// Returns true when this link is a redirect.
    pub fn is_redirect(&self) -> bool {
        self.redirect_depth > 0
    }

    /// The redirect target, when this link is a redirect that was
    /// followed.
    pub fn redirect_target(&self) -> Option<&str> {
        if self.is_redirect() {
            self.children.first().map(String::as_str)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_to_url() {
        let link = Link::new("http://x/");
        assert_eq!(link.display_title(), "http://x/");
    }

    #[test]
    fn test_display_title_empty_string_falls_back() {
        let mut link = Link::new("http://x/");
        link.title = Some(String::new());
        assert_eq!(link.display_title(), "http://x/");
    }

    #[test]
    fn test_display_title_uses_title() {
        let mut link = Link::new("http://x/");
        link.title = Some("Example".to_string());
        assert_eq!(link.display_title(), "Example");
    }

    #[test]
    fn test_redirect_target() {
        let mut link = Link::new("http://x/old");
        assert_eq!(link.redirect_target(), None);

        link.redirect_depth = 1;
        assert_eq!(link.redirect_target(), None);

        link.children.push("http://x/new".to_string());
        assert_eq!(link.redirect_target(), Some("http://x/new"));
    }

    #[test]
    fn test_non_redirect_child_is_not_a_target() {
        let mut link = Link::new("http://x/");
        link.children.push("http://x/a".to_string());
        assert_eq!(link.redirect_target(), None);
    }
}
