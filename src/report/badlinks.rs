//! The bad-links report
//!
//! Every URL in the bad-link registry, with its recorded problems and
//! the pages that reference it. Bad links are never anchored here; the
//! point of the report is that the target does not work.

use crate::config::ReportsConfig;
use crate::graph::LinkGraph;
use crate::render;
use crate::report::{Report, ReportResult};

/// Overview of broken links
pub struct BadLinks;

impl Report for BadLinks {
    fn name(&self) -> &'static str {
        "badlinks"
    }

    fn title(&self) -> &'static str {
        "Bad Links"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Links that point to broken or unreachable resources")
    }

    fn render(&self, graph: &LinkGraph, _options: &ReportsConfig) -> ReportResult<String> {
        let mut bad: Vec<&str> = graph.bad_links().collect();
        bad.sort_unstable();

        if bad.is_empty() {
            return Ok("<p class=\"description\">No bad links were found.</p>\n".to_string());
        }

        let mut out = String::from("<ul>\n");
        for url in bad {
            out.push_str(" <li>\n");
            match graph.get(url) {
                Some(link) => {
                    out.push_str(&format!("  {}\n", render::bare(link)));
                    if !link.problems.is_empty() {
                        out.push_str("  <ul class=\"problems\">\n");
                        for problem in &link.problems {
                            out.push_str(&format!(
                                "   <li>{}</li>\n",
                                render::escape(problem)
                            ));
                        }
                        out.push_str("  </ul>\n");
                    }
                    out.push_str(&render::parent_list(link, graph, "  "));
                }
                // registry entry without a registered link: still list it
                None => out.push_str(&format!("  {}\n", render::escape(url))),
            }
            out.push_str(" </li>\n");
        }
        out.push_str("</ul>\n");
        Ok(out)
    }
}
