//! The what's-new report
//!
//! Lists pages modified recently, most recent first. Only links that
//! represent renderable pages and carry a known age take part; an
//! unknown modification time excludes a link outright rather than
//! ranking it as oldest.

use crate::config::ReportsConfig;
use crate::graph::{Link, LinkGraph};
use crate::render;
use crate::report::{Report, ReportResult};

/// Recently modified pages
pub struct WhatsNew;

impl Report for WhatsNew {
    fn name(&self) -> &'static str {
        "whatsnew"
    }

    fn title(&self) -> &'static str {
        "What's New"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Recently modified pages")
    }

    fn render(&self, graph: &LinkGraph, options: &ReportsConfig) -> ReportResult<String> {
        let mut recent: Vec<(&Link, i64)> = graph
            .all()
            .filter(|link| link.is_page)
            .filter_map(|link| link.age.map(|age| (link, age)))
            .filter(|(_, age)| *age <= options.whatsnew_age)
            .collect();
        // ascending age, URL as the stable tie-break
        recent.sort_by(|(a, age_a), (b, age_b)| age_a.cmp(age_b).then_with(|| a.url.cmp(&b.url)));

        let mut out = String::from("<div class=\"table\">\n<table>\n");
        out.push_str("  <tr><th>Link</th><th>Author</th><th>Age</th></tr>\n");
        for (link, age) in recent {
            out.push_str("  <tr>");
            out.push_str(&format!("<td>{}</td>", render::anchor(link)));
            out.push_str(&format!(
                "<td>{}</td>",
                link.author.as_deref().map(render::escape).unwrap_or_default()
            ));
            out.push_str(&format!("<td class=\"time\">{}</td>", age));
            out.push_str("</tr>\n");
        }
        out.push_str("</table>\n</div>\n");
        Ok(out)
    }
}
