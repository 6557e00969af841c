use crate::config::types::{Config, GeneratorConfig, OutputConfig, ReportsConfig, SiteConfig};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site(&config.site)?;
    validate_input(&config.input)?;
    validate_output(&config.output)?;
    validate_reports(&config.reports)?;
    validate_generator(&config.generator)?;
    Ok(())
}

/// Validates the site section
fn validate_site(config: &SiteConfig) -> Result<(), ConfigError> {
    Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if let Some(title) = &config.title {
        if title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site title, when given, cannot be blank".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the input section
fn validate_input(config: &crate::config::types::InputConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the output section
fn validate_output(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the reports section
fn validate_reports(config: &ReportsConfig) -> Result<(), ConfigError> {
    if config.enabled.is_empty() {
        return Err(ConfigError::Validation(
            "at least one report must be enabled".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for name in &config.enabled {
        if name.is_empty() {
            return Err(ConfigError::Validation(
                "report names cannot be empty".to_string(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "report '{}' is enabled more than once",
                name
            )));
        }
    }

    if config.sitemap_depth > 100 {
        return Err(ConfigError::Validation(format!(
            "sitemap-depth must be <= 100, got {}",
            config.sitemap_depth
        )));
    }

    if config.whatsnew_age < 0 {
        return Err(ConfigError::Validation(format!(
            "whatsnew-age must be >= 0 days, got {}",
            config.whatsnew_age
        )));
    }

    Ok(())
}

/// Validates the generator section
fn validate_generator(config: &GeneratorConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "generator name cannot be empty".to_string(),
        ));
    }
    if config.version.is_empty() {
        return Err(ConfigError::Validation(
            "generator version cannot be empty".to_string(),
        ));
    }
    Url::parse(&config.homepage)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid generator homepage: {}", e)))?;
    Ok(())
}
