//! Configuration file support for vendor-discovery.
//!
//! Provides YAML-based configuration through `vendor-discovery.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{DiscoveryOptions, DEFAULT_SHARE_BASE_URL};
use crate::discovery::domain::{City, Coordinates, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::discovery::services::geo_locator::{
    DEFAULT_CENTER, DEFAULT_CLUSTER_CELL_DEGREES, DEFAULT_CLUSTER_THRESHOLD,
};
use crate::discovery::services::{BaseFilter, GeoLocator};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "vendor-discovery.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Path to a JSON catalog file or base URL of a catalog service
    pub catalog: Option<String>,
    /// Base URL of the saved-vendor service
    pub saved_store: Option<String>,
    pub page_size: Option<u32>,
    pub fallback_center: Option<CenterConfig>,
    pub cluster_threshold: Option<usize>,
    pub cluster_cell_degrees: Option<f64>,
    pub share_base_url: Option<String>,
    pub format: Option<String>,
    /// Facets pinned by the hosting page
    pub base: Option<BaseConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct CenterConfig {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize, Default)]
pub struct BaseConfig {
    pub main_category: Option<String>,
    pub location: Option<String>,
}

impl ConfigFile {
    /// Engine options described by this file, defaults filled in.
    pub fn discovery_options(&self) -> Result<DiscoveryOptions> {
        let fallback_center = match self.fallback_center {
            Some(center) => Coordinates::new(center.lat, center.lng)?,
            None => DEFAULT_CENTER,
        };
        let locator = GeoLocator::new(
            fallback_center,
            self.cluster_threshold.unwrap_or(DEFAULT_CLUSTER_THRESHOLD),
            self.cluster_cell_degrees
                .unwrap_or(DEFAULT_CLUSTER_CELL_DEGREES),
        );

        let base = match &self.base {
            Some(base) => BaseFilter {
                main_category: base
                    .main_category
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
                location: base.location.as_deref().map(City::new).transpose()?,
            },
            None => BaseFilter::default(),
        };

        Ok(DiscoveryOptions::new()
            .with_base(base)
            .with_page_size(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
            .with_share_base_url(
                self.share_base_url
                    .as_deref()
                    .unwrap_or(DEFAULT_SHARE_BASE_URL),
            )
            .with_locator(locator))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(page_size) = config.page_size {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            bail!(
                "Invalid config: page_size must be between 1 and {} (got {}).\n\n\
                 💡 Hint: Omit page_size to use the default of {}.",
                MAX_PAGE_SIZE,
                page_size,
                DEFAULT_PAGE_SIZE
            );
        }
    }

    if let Some(center) = config.fallback_center {
        if let Err(e) = Coordinates::new(center.lat, center.lng) {
            bail!(
                "Invalid config: fallback_center is not a valid position: {}\n\n\
                 💡 Hint: Use decimal degrees, e.g. lat: 19.076, lng: 72.8777.",
                e
            );
        }
    }

    if let Some(cell) = config.cluster_cell_degrees {
        if !cell.is_finite() || cell <= 0.0 {
            bail!(
                "Invalid config: cluster_cell_degrees must be a positive number (got {}).",
                cell
            );
        }
    }

    if let Some(location) = config.base.as_ref().and_then(|b| b.location.as_deref()) {
        if let Err(e) = City::new(location) {
            bail!(
                "Invalid config: base.location: {}\n\n\
                 💡 Hint: Cities are lowercase slugs such as \"mumbai\" or \"new-delhi\".",
                e
            );
        }
    }

    if let Some(format) = config.format.as_deref() {
        if let Err(e) = format.parse::<crate::application::dto::OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
