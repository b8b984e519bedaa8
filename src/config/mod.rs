// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gallery]` - Media root, public path prefix, flat-mode category, placeholder
//! - `[remote]` - Endpoint used when the tree is fetched over HTTP
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.gallery.flat_category = "stills".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Where the media tree lives and how its paths are published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory walked by the tree builder.
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,

    /// Prefix of every emitted media path (e.g. `/pics`).
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,

    /// The one top-level directory that is structured in flat mode.
    #[serde(default = "default_flat_category")]
    pub flat_category: String,

    /// Tile image used when a category has no media at all.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Preferred tile image file name inside a category.
    #[serde(default = "default_thumbnail_name")]
    pub thumbnail_name: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            public_prefix: default_public_prefix(),
            flat_category: default_flat_category(),
            placeholder: default_placeholder(),
            thumbnail_name: default_thumbnail_name(),
        }
    }
}

impl GalleryConfig {
    /// Directory that public paths are served from.
    ///
    /// Public paths are rooted at [`public_prefix`](Self::public_prefix), which
    /// maps onto [`media_root`](Self::media_root); stripping the prefix's last
    /// segment from the media root gives the directory public paths resolve
    /// against (`public/pics` + `/pics` → `public`).
    #[must_use]
    pub fn public_root(&self) -> PathBuf {
        let prefix_segments = self
            .public_prefix
            .split('/')
            .filter(|s| !s.is_empty())
            .count();
        let mut root = self.media_root.clone();
        for _ in 0..prefix_segments {
            if !root.pop() {
                break;
            }
        }
        root
    }
}

/// Remote fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteConfig {
    /// URL of the JSON gallery endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub remote: RemoteConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_media_root() -> PathBuf {
    PathBuf::from(DEFAULT_MEDIA_ROOT)
}

fn default_public_prefix() -> String {
    DEFAULT_PUBLIC_PREFIX.to_string()
}

fn default_flat_category() -> String {
    DEFAULT_FLAT_CATEGORY.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_thumbnail_name() -> String {
    DEFAULT_THUMBNAIL_NAME.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_REMOTE_ENDPOINT.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
