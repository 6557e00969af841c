//! The site map report
//!
//! A nested list view of the site rooted at the base link, produced by
//! a bounded traversal that follows children in stored order. One
//! explored set is shared across the whole traversal, so a node reached
//! through several parents or through a cycle is expanded exactly once.

use crate::config::ReportsConfig;
use crate::graph::{Link, LinkGraph};
use crate::render;
use crate::report::{Report, ReportResult};
use std::collections::HashSet;

/// Your site at a glance
pub struct SiteMap;

impl Report for SiteMap {
    fn name(&self) -> &'static str {
        "sitemap"
    }

    fn title(&self) -> &'static str {
        "Site Map"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Your site at a glance")
    }

    fn render(&self, graph: &LinkGraph, options: &ReportsConfig) -> ReportResult<String> {
        let mut out = String::from("<ul>\n");
        let mut explored = HashSet::new();
        explored.insert(graph.base_url().to_string());
        explore(&mut out, graph, options, graph.base(), &mut explored, 0);
        out.push_str("</ul>\n");
        Ok(out)
    }
}

/// Emits one link and, within the depth budget, its unexplored subtree.
///
/// `explored` is shared for the whole top-level traversal and is never
/// reinitialized per branch. The current link must already be marked
/// explored by the caller; children are marked before any of them is
/// descended into, so a node appearing under two siblings is expanded
/// under the first only.
fn explore(
    out: &mut String,
    graph: &LinkGraph,
    options: &ReportsConfig,
    link: &Link,
    explored: &mut HashSet<String>,
    depth: u32,
) {
    out.push_str("<li>");
    if graph.is_bad(&link.url) && !options.anchor_bad_links {
        out.push_str(&render::bare(link));
    } else {
        out.push_str(&render::anchor(link));
    }

    // only examine children while within the depth budget
    if depth <= options.sitemap_depth {
        let mut to_explore = Vec::new();
        for child in &link.children {
            if explored.contains(child) {
                continue;
            }
            explored.insert(child.clone());
            to_explore.push(child.as_str());
        }

        if !to_explore.is_empty() {
            out.push_str("\n<ul>\n");
            for child in to_explore {
                // a child URL with no registered link is a dangling
                // reference; render it as plain text
                match graph.get(child) {
                    Some(child_link) => {
                        explore(out, graph, options, child_link, explored, depth + 1);
                    }
                    None => {
                        out.push_str("<li>");
                        out.push_str(&render::escape(child));
                        out.push_str("</li>\n");
                    }
                }
            }
            out.push_str("</ul>\n");
        }
    }

    out.push_str("</li>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn options() -> ReportsConfig {
        ReportsConfig::default()
    }

    fn graph_with_edges(urls: &[&str], edges: &[(&str, &str)], base: &str) -> LinkGraph {
        let mut builder = GraphBuilder::new();
        for url in urls {
            let mut link = Link::new(*url);
            link.is_internal = true;
            builder.add(link).unwrap();
        }
        for (parent, child) in edges {
            builder.connect(parent, child).unwrap();
        }
        builder.build(base).unwrap()
    }

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.match_indices(needle).count()
    }

    #[test]
    fn test_cycle_is_traversed_once() {
        // base -> a -> b -> a
        let graph = graph_with_edges(
            &["http://base/", "http://a/", "http://b/"],
            &[
                ("http://base/", "http://a/"),
                ("http://a/", "http://b/"),
                ("http://b/", "http://a/"),
            ],
            "http://base/",
        );

        let html = SiteMap.render(&graph, &options()).unwrap();
        assert_eq!(occurrences(&html, "href=\"http://a/\""), 1);
        assert_eq!(occurrences(&html, "href=\"http://b/\""), 1);
    }

    #[test]
    fn test_shared_child_emitted_once() {
        // two siblings both link to the same child
        let graph = graph_with_edges(
            &["http://base/", "http://s1/", "http://s2/", "http://shared/"],
            &[
                ("http://base/", "http://s1/"),
                ("http://base/", "http://s2/"),
                ("http://s1/", "http://shared/"),
                ("http://s2/", "http://shared/"),
            ],
            "http://base/",
        );

        let html = SiteMap.render(&graph, &options()).unwrap();
        assert_eq!(occurrences(&html, "href=\"http://shared/\""), 1);
    }

    #[test]
    fn test_every_reachable_node_appears() {
        let graph = graph_with_edges(
            &["http://base/", "http://a/", "http://b/", "http://c/"],
            &[
                ("http://base/", "http://a/"),
                ("http://a/", "http://b/"),
                ("http://b/", "http://c/"),
                ("http://c/", "http://base/"),
            ],
            "http://base/",
        );

        let html = SiteMap.render(&graph, &options()).unwrap();
        for url in ["http://base/", "http://a/", "http://b/", "http://c/"] {
            assert_eq!(occurrences(&html, &format!("href=\"{}\"", url)), 1);
        }
    }

    #[test]
    fn test_depth_limit_cuts_off_children() {
        // chain base -> d1 -> d2 -> d3 with depth limit 1:
        // d2 is emitted at depth 2 (children examined at depth 1), d3 never
        let graph = graph_with_edges(
            &["http://base/", "http://d1/", "http://d2/", "http://d3/"],
            &[
                ("http://base/", "http://d1/"),
                ("http://d1/", "http://d2/"),
                ("http://d2/", "http://d3/"),
            ],
            "http://base/",
        );

        let mut opts = options();
        opts.sitemap_depth = 1;
        let html = SiteMap.render(&graph, &opts).unwrap();
        assert_eq!(occurrences(&html, "href=\"http://d2/\""), 1);
        assert_eq!(occurrences(&html, "href=\"http://d3/\""), 0);
    }

    #[test]
    fn test_bad_link_rendered_bare_by_default() {
        let mut builder = GraphBuilder::new();
        builder.add(Link::new("http://base/")).unwrap();
        builder.add(Link::new("http://broken/")).unwrap();
        builder.connect("http://base/", "http://broken/").unwrap();
        builder.mark_bad("http://broken/");
        let graph = builder.build("http://base/").unwrap();

        let html = SiteMap.render(&graph, &options()).unwrap();
        assert!(html.contains("<li>http://broken/</li>"));
        assert!(!html.contains("href=\"http://broken/\""));
    }

    #[test]
    fn test_bad_link_anchored_when_configured() {
        let mut builder = GraphBuilder::new();
        builder.add(Link::new("http://base/")).unwrap();
        builder.add(Link::new("http://broken/")).unwrap();
        builder.connect("http://base/", "http://broken/").unwrap();
        builder.mark_bad("http://broken/");
        let graph = builder.build("http://base/").unwrap();

        let mut opts = options();
        opts.anchor_bad_links = true;
        let html = SiteMap.render(&graph, &opts).unwrap();
        assert!(html.contains("href=\"http://broken/\""));
    }

    #[test]
    fn test_children_in_insertion_order() {
        let graph = graph_with_edges(
            &["http://base/", "http://zzz/", "http://aaa/"],
            &[
                ("http://base/", "http://zzz/"),
                ("http://base/", "http://aaa/"),
            ],
            "http://base/",
        );

        let html = SiteMap.render(&graph, &options()).unwrap();
        let zzz = html.find("href=\"http://zzz/\"").unwrap();
        let aaa = html.find("href=\"http://aaa/\"").unwrap();
        assert!(zzz < aaa, "children must keep stored order");
    }
}
