//! The problems report
//!
//! Every internal page with recorded diagnostic messages, so site
//! maintainers can work through what needs fixing page by page.

use crate::config::ReportsConfig;
use crate::graph::{Link, LinkGraph};
use crate::render;
use crate::report::{Report, ReportResult};

/// Per-page diagnostic overview
pub struct Problems;

impl Report for Problems {
    fn name(&self) -> &'static str {
        "problems"
    }

    fn title(&self) -> &'static str {
        "Problems"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Internal pages with problems, grouped per page")
    }

    fn render(&self, graph: &LinkGraph, _options: &ReportsConfig) -> ReportResult<String> {
        let mut pages: Vec<&Link> = graph
            .all()
            .filter(|link| link.is_internal && !link.problems.is_empty())
            .collect();
        pages.sort_by(|a, b| a.url.cmp(&b.url));

        if pages.is_empty() {
            return Ok("<p class=\"description\">No problems were found.</p>\n".to_string());
        }

        let mut out = String::from("<ul>\n");
        for link in pages {
            out.push_str(" <li>\n");
            out.push_str(&format!("  {}\n", render::anchor(link)));
            out.push_str("  <ul class=\"problems\">\n");
            for problem in &link.problems {
                out.push_str(&format!("   <li>{}</li>\n", render::escape(problem)));
            }
            out.push_str("  </ul>\n");
            out.push_str(" </li>\n");
        }
        out.push_str("</ul>\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn internal(url: &str) -> Link {
        let mut link = Link::new(url);
        link.is_internal = true;
        link
    }

    #[test]
    fn test_no_problems_renders_note() {
        let mut builder = GraphBuilder::new();
        builder.add(internal("http://a/")).unwrap();
        let graph = builder.build("http://a/").unwrap();

        let html = Problems.render(&graph, &ReportsConfig::default()).unwrap();
        assert!(html.contains("No problems"));
    }

    #[test]
    fn test_lists_problem_pages_in_url_order() {
        let mut builder = GraphBuilder::new();
        builder.add(internal("http://z/")).unwrap();
        builder.add(internal("http://a/")).unwrap();
        builder.add_problem("http://z/", "slow".to_string()).unwrap();
        builder.add_problem("http://a/", "broken image".to_string()).unwrap();
        let graph = builder.build("http://a/").unwrap();

        let html = Problems.render(&graph, &ReportsConfig::default()).unwrap();
        assert!(html.contains("broken image"));
        assert!(html.contains("slow"));
        let a = html.find("href=\"http://a/\"").unwrap();
        let z = html.find("href=\"http://z/\"").unwrap();
        assert!(a < z);
    }

    #[test]
    fn test_external_pages_excluded() {
        let mut builder = GraphBuilder::new();
        builder.add(internal("http://a/")).unwrap();
        builder.add(Link::new("http://elsewhere/")).unwrap();
        builder
            .add_problem("http://elsewhere/", "unreachable".to_string())
            .unwrap();
        let graph = builder.build("http://a/").unwrap();

        let html = Problems.render(&graph, &ReportsConfig::default()).unwrap();
        assert!(!html.contains("http://elsewhere/"));
    }
}
