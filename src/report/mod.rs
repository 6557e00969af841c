//! Report plugins
//!
//! Each report is a self-contained renderer producing the body markup
//! for one HTML page from the link graph. The driver wraps that body in
//! the shared page shell and writes it out; plugins never emit the
//! shell themselves and never mutate the graph.
//!
//! Reports are dispatched through a static registry rather than by
//! resolving module names at runtime: adding a new report means adding
//! it to `registry()`, the driver stays untouched.

mod badlinks;
mod problems;
mod sitemap;
mod whatsnew;

pub use badlinks::BadLinks;
pub use problems::Problems;
pub use sitemap::SiteMap;
pub use whatsnew::WhatsNew;

use crate::config::ReportsConfig;
use crate::graph::LinkGraph;
use thiserror::Error;

/// Errors that can occur while rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown report: {0}")]
    Unknown(String),

    #[error("report '{name}' failed to render: {message}")]
    Render { name: String, message: String },
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Capability contract every report satisfies
pub trait Report {
    /// Stable identifier; the output file is `<name>.html` unless the
    /// report is configured first, in which case it becomes the site
    /// index page.
    fn name(&self) -> &'static str;

    /// Human-readable heading, used in the navigation bar and as the
    /// page `<h2>`.
    fn title(&self) -> &'static str;

    /// Optional one-line description, rendered under the title and used
    /// as navigation hover text.
    fn description(&self) -> Option<&'static str> {
        None
    }

    /// Produces the body markup for this report.
    ///
    /// Must not emit the page shell and must not mutate the graph.
    fn render(&self, graph: &LinkGraph, options: &ReportsConfig) -> ReportResult<String>;
}

/// Returns every known report, in default navigation order.
pub fn registry() -> Vec<Box<dyn Report>> {
    vec![
        Box::new(SiteMap),
        Box::new(WhatsNew),
        Box::new(BadLinks),
        Box::new(Problems),
    ]
}

/// Resolves configured report names against the registry, preserving
/// the configured order.
pub fn resolve(names: &[String]) -> ReportResult<Vec<Box<dyn Report>>> {
    let mut available = registry();
    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let index = available
            .iter()
            .position(|report| report.name() == name)
            .ok_or_else(|| ReportError::Unknown(name.clone()))?;
        selected.push(available.remove(index));
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let registry = registry();
        let mut names: Vec<_> = registry.iter().map(|r| r.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_resolve_preserves_order() {
        let reports =
            resolve(&["whatsnew".to_string(), "sitemap".to_string()]).unwrap();
        assert_eq!(reports[0].name(), "whatsnew");
        assert_eq!(reports[1].name(), "sitemap");
    }

    #[test]
    fn test_resolve_unknown_name() {
        let result = resolve(&["nosuch".to_string()]);
        assert!(matches!(result, Err(ReportError::Unknown(_))));
    }

    #[test]
    fn test_every_report_has_title() {
        for report in registry() {
            assert!(!report.title().is_empty(), "{} has no title", report.name());
        }
    }
}
