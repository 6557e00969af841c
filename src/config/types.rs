use serde::Deserialize;

/// Main configuration structure for linkatlas
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The site the reports describe
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// The base URL of the checked site; must exist in the link graph
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Display title override; defaults to the base link's own title
    pub title: Option<String>,
}

/// Where the crawl snapshot comes from
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the snapshot SQLite database the crawler produced
    #[serde(rename = "database-path")]
    pub database_path: String,
}

/// Where and how report pages are written
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the HTML pages are written to; created if missing
    pub directory: String,

    /// What to do when an output file already exists
    #[serde(default)]
    pub overwrite: OverwriteMode,
}

/// Overwrite behavior for existing output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteMode {
    /// Replace existing files without asking
    Always,
    /// Abort the run when an output file already exists
    #[default]
    Never,
}

/// Report selection and per-report tuning
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Reports to generate, in navigation order. The first one becomes
    /// the site index page.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,

    /// Maximum depth the site map descends below the base link
    #[serde(rename = "sitemap-depth", default = "default_sitemap_depth")]
    pub sitemap_depth: u32,

    /// Age threshold in days for the what's-new report
    #[serde(rename = "whatsnew-age", default = "default_whatsnew_age")]
    pub whatsnew_age: i64,

    /// Whether bad links are still rendered as clickable anchors in the
    /// site map
    #[serde(rename = "anchor-bad-links", default)]
    pub anchor_bad_links: bool,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sitemap_depth: default_sitemap_depth(),
            whatsnew_age: default_whatsnew_age(),
            anchor_bad_links: false,
        }
    }
}

/// Identity used in the generator meta tag and the footer credit
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_generator_name")]
    pub name: String,

    #[serde(default = "default_generator_version")]
    pub version: String,

    #[serde(default = "default_generator_homepage")]
    pub homepage: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: default_generator_name(),
            version: default_generator_version(),
            homepage: default_generator_homepage(),
        }
    }
}

fn default_enabled() -> Vec<String> {
    crate::report::registry()
        .iter()
        .map(|report| report.name().to_string())
        .collect()
}

fn default_sitemap_depth() -> u32 {
    8
}

fn default_whatsnew_age() -> i64 {
    7
}

fn default_generator_name() -> String {
    "linkatlas".to_string()
}

fn default_generator_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_generator_homepage() -> String {
    "https://github.com/linkatlas/linkatlas".to_string()
}
