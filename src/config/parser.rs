use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverwriteMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[site]
base-url = "https://example.com/"
title = "Example"

[input]
database-path = "./crawl.db"

[output]
directory = "./report"
overwrite = "always"

[reports]
enabled = ["sitemap", "whatsnew"]
sitemap-depth = 4
whatsnew-age = 14
anchor-bad-links = true
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.base_url, "https://example.com/");
        assert_eq!(config.site.title.as_deref(), Some("Example"));
        assert_eq!(config.output.overwrite, OverwriteMode::Always);
        assert_eq!(config.reports.enabled, vec!["sitemap", "whatsnew"]);
        assert_eq!(config.reports.sitemap_depth, 4);
        assert_eq!(config.reports.whatsnew_age, 14);
        assert!(config.reports.anchor_bad_links);
    }

    #[test]
    fn test_load_minimal_config_applies_defaults() {
        let config_content = r#"
[site]
base-url = "https://example.com/"

[input]
database-path = "./crawl.db"

[output]
directory = "./report"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output.overwrite, OverwriteMode::Never);
        assert_eq!(config.reports.sitemap_depth, 8);
        assert_eq!(config.reports.whatsnew_age, 7);
        assert!(!config.reports.anchor_bad_links);
        // every registered report is enabled by default, sitemap first
        assert_eq!(config.reports.enabled[0], "sitemap");
        assert_eq!(config.generator.name, "linkatlas");
        assert!(!config.generator.version.is_empty());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/linkatlas.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let config_content = "this is not valid TOML {{{";
        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[site]
base-url = "not a url"

[input]
database-path = "./crawl.db"

[output]
directory = "./report"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(result.is_err());
    }
}
