use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::AppVariant;
use crate::theme::ThemeName;
use crate::view::DEFAULT_PAGE_SIZE;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "IRIS_DASH_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which chart set the home page shows
    pub variant: AppVariant,

    /// Initial chart theme
    pub theme: ThemeName,

    /// Rows per data table page
    pub page_size: usize,

    /// Initial window size in points
    pub window_size: [f32; 2],

    /// Load this file instead of the bundled table
    pub dataset: Option<PathBuf>,

    /// Initial column per species card, e.g. `{"setosa": "petal_width"}`
    pub selections: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: AppVariant::default(),
            theme: ThemeName::default(),
            page_size: DEFAULT_PAGE_SIZE,
            window_size: [1280.0, 900.0],
            dataset: None,
            selections: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&text).context("parsing config JSON")?;
        Ok(config)
    }

    /// Config from `$IRIS_DASH_CONFIG` if set, defaults otherwise.
    /// A broken config file is logged and ignored.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load_from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::error!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}
