//! Lab configuration.
//!
//! Every field has a default, so a config file only needs to mention the
//! values it changes:
//!
//! ```toml
//! [grid]
//! width = 60
//!
//! [render]
//! wire_color = "#F59E0B"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use crate::router::RouterConfig;

/// Upper bound on `width * height`.
pub const MAX_GRID_CELLS: u32 = 1 << 20;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub grid: GridConfig,
    pub render: RenderConfig,
    pub router: RouterConfig,
    pub interaction: InteractionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Pixel size of one cell.
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            cell_size: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub corner_radius: f64,
    pub min_corner_radius: f64,
    pub wire_color: String,
    pub selected_wire_color: String,
    pub preview_color: String,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            corner_radius: 12.0,
            min_corner_radius: 2.0,
            wire_color: "#10B981".to_string(),
            selected_wire_color: "#3B82F6".to_string(),
            preview_color: "#FFFFFF".to_string(),
            background: "#1E1E1E".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Terminal hit-test radius, in cell units.
    pub terminal_hit_radius: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            terminal_hit_radius: 0.3,
        }
    }
}

impl LabConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: LabConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded lab config from {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        match self.grid.width.checked_mul(self.grid.height) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "grid of {}x{} exceeds {MAX_GRID_CELLS} cells",
                    self.grid.width, self.grid.height
                )))
            }
        }
        if !(self.grid.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.grid.cell_size
            )));
        }
        if self.render.corner_radius < 0.0 || self.render.min_corner_radius < 0.0 {
            return Err(ConfigError::Invalid("corner radii must not be negative".into()));
        }
        if !(self.interaction.terminal_hit_radius > 0.0) {
            return Err(ConfigError::Invalid(
                "terminal_hit_radius must be positive".into(),
            ));
        }
        Ok(())
    }
}
