//! Page assembly and the report driver
//!
//! The driver resolves the configured reports once, builds the shared
//! navigation bar before any page is rendered, then renders and writes
//! one document per report in configured order. The first configured
//! report becomes the site index page.

use crate::config::Config;
use crate::graph::LinkGraph;
use crate::output::{OutputError, ReportWriter};
use crate::render::{attribute, escape};
use crate::report::{self, Report};
use chrono::Utc;
use std::path::PathBuf;

/// The name of the site index document, reserved for the first report
const INDEX_FILE: &str = "index.html";

/// The stylesheet every page references
const STYLESHEET: &str = "linkatlas.css";

/// Orchestrates report rendering and page writing
pub struct ReportDriver<'a> {
    config: &'a Config,
    reports: Vec<Box<dyn Report>>,
}

impl<'a> ReportDriver<'a> {
    /// Creates a driver for the reports enabled in the configuration.
    ///
    /// Fails when a configured report name is not in the registry.
    pub fn new(config: &'a Config) -> Result<Self, crate::report::ReportError> {
        let reports = report::resolve(&config.reports.enabled)?;
        Ok(Self { config, reports })
    }

    /// The resolved reports, in the order their pages are generated.
    pub fn reports(&self) -> &[Box<dyn Report>] {
        &self.reports
    }

    /// Renders every report page and writes it through the writer.
    ///
    /// A report that fails to render gets an error placeholder page so
    /// the navigation stays complete, and generation continues with the
    /// remaining reports. A declined overwrite or a write failure stops
    /// the run.
    pub fn generate(
        &self,
        graph: &LinkGraph,
        writer: &mut ReportWriter,
    ) -> crate::Result<Vec<PathBuf>> {
        let navbar = self.navbar();
        let site_title = self.site_title(graph);
        let generated_at = Utc::now().format("%a %b %e %H:%M:%S %Y").to_string();
        let mut written = Vec::with_capacity(self.reports.len());

        for (index, report) in self.reports.iter().enumerate() {
            let filename = self.filename(index);
            tracing::info!("generating {} ({})", report.name(), filename);

            let content = match report.render(graph, &self.config.reports) {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!("report {} failed: {}", report.name(), e);
                    format!(
                        "<p class=\"error\">This report could not be generated: {}</p>\n",
                        escape(&e.to_string())
                    )
                }
            };

            let page = self.page(graph, &site_title, &navbar, report.as_ref(), &content, &generated_at);
            match writer.write(&filename, &page) {
                Ok(path) => written.push(path),
                Err(OutputError::WriteDenied { path }) => {
                    tracing::info!("not overwriting {}, aborting", path.display());
                    return Err(OutputError::WriteDenied { path }.into());
                }
                Err(e) => {
                    tracing::error!("failed to write {}: {}", filename, e);
                    return Err(e.into());
                }
            }
        }

        Ok(written)
    }

    /// The output file name for the report at the given position.
    pub fn filename(&self, index: usize) -> String {
        if index == 0 {
            INDEX_FILE.to_string()
        } else {
            format!("{}.html", self.reports[index].name())
        }
    }

    // The navigation bar is identical on every page: one entry per
    // configured report, description as hover text.
    fn navbar(&self) -> String {
        let mut nav = String::from("  <ul class=\"navbar\">\n");
        for (index, report) in self.reports.iter().enumerate() {
            let hover = report.description().unwrap_or_else(|| report.title());
            nav.push_str(&format!(
                "   <li><a href=\"{file}\" title=\"{hover}\">{title}</a></li>\n",
                file = self.filename(index),
                hover = attribute(hover),
                title = escape(report.title()),
            ));
        }
        nav.push_str("  </ul>\n");
        nav
    }

    fn site_title(&self, graph: &LinkGraph) -> String {
        match &self.config.site.title {
            Some(title) => title.clone(),
            None => graph.base().display_title().to_string(),
        }
    }

    fn page(
        &self,
        graph: &LinkGraph,
        site_title: &str,
        navbar: &str,
        report: &dyn Report,
        content: &str,
        generated_at: &str,
    ) -> String {
        let generator = &self.config.generator;
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n");
        page.push_str("<html>\n");
        page.push_str(" <head>\n");
        page.push_str(&format!(
            "  <title>{} report for {}</title>\n",
            escape(&generator.name),
            escape(site_title)
        ));
        page.push_str(&format!(
            "  <link rel=\"stylesheet\" type=\"text/css\" href=\"{}\" />\n",
            STYLESHEET
        ));
        page.push_str(&format!(
            "  <meta name=\"Generator\" content=\"{} {}\" />\n",
            attribute(&generator.name),
            attribute(&generator.version)
        ));
        page.push_str(" </head>\n");
        page.push_str(" <body>\n");
        page.push_str(&format!(
            "  <h1 class=\"basename\">Report for <a href=\"{}\">{}</a></h1>\n",
            attribute(graph.base_url()),
            escape(site_title)
        ));
        page.push_str(navbar);
        page.push_str(&format!("  <h2>{}</h2>\n", escape(report.title())));
        if let Some(description) = report.description() {
            page.push_str(&format!(
                "  <p class=\"description\">\n    {}\n  </p>\n",
                escape(description)
            ));
        }
        page.push_str("  <div class=\"content\">\n");
        page.push_str(content);
        page.push_str("  </div>\n");
        page.push_str(&format!(
            "  <p class=\"footer\">\n   Generated {time} by <a href=\"{homepage}\">{name} {version}</a>\n  </p>\n",
            time = escape(generated_at),
            homepage = attribute(&generator.homepage),
            name = escape(&generator.name),
            version = escape(&generator.version),
        ));
        page.push_str(" </body>\n");
        page.push_str("</html>\n");
        page
    }
}
