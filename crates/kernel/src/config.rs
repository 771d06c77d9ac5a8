//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::navigation::{DEFAULT_STYLESHEET_HANDLE, DEFAULT_TAP_WEIGHT};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding template parts as `<slug>.html` (default: ./parts).
    pub template_parts_dir: PathBuf,

    /// Handle of the mobile menu base stylesheet (default: menudrawer-mobile-menu).
    pub stylesheet_handle: String,

    /// Weight of the mobile menu taps (default: 10).
    pub tap_weight: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_parts_dir: PathBuf::from("./parts"),
            stylesheet_handle: DEFAULT_STYLESHEET_HANDLE.to_string(),
            tap_weight: DEFAULT_TAP_WEIGHT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let template_parts_dir = env::var("TEMPLATE_PARTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./parts"));

        let stylesheet_handle = env::var("MOBILE_MENU_STYLESHEET")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STYLESHEET_HANDLE.to_string());

        let tap_weight = env::var("MOBILE_MENU_TAP_WEIGHT")
            .unwrap_or_else(|_| DEFAULT_TAP_WEIGHT.to_string())
            .parse()
            .context("MOBILE_MENU_TAP_WEIGHT must be a valid i32")?;

        Ok(Self {
            template_parts_dir,
            stylesheet_handle,
            tap_weight,
        })
    }
}
