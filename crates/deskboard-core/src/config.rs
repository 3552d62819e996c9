//! Dashboard configuration.

use crate::storage::DEFAULT_AUTOSAVE_DEBOUNCE_MS;
use crate::widget::{DEFAULT_PLACEMENT_RANGE, DEFAULT_WIDGET_SIZE, MIN_WIDGET_SIZE, WidgetRegistry};
use crate::{Canvas, canvas::DEFAULT_VIEWPORT};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Tunables for the canvas and the note autosaver.
///
/// Missing fields fall back to their defaults, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_widget_size: Size,
    pub min_widget_size: f64,
    /// Added widgets land at a random offset below this on both axes.
    pub placement_range: f64,
    pub autosave_debounce_ms: u64,
    /// Viewport assumed until the window reports its size.
    pub viewport: Size,
    /// Where the file store keeps its data; the platform data dir when unset.
    pub data_dir: Option<PathBuf>,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Start with the four default widgets instead of an empty canvas.
    pub seed_initial_widgets: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_widget_size: DEFAULT_WIDGET_SIZE,
            min_widget_size: MIN_WIDGET_SIZE,
            placement_range: DEFAULT_PLACEMENT_RANGE,
            autosave_debounce_ms: DEFAULT_AUTOSAVE_DEBOUNCE_MS,
            viewport: DEFAULT_VIEWPORT,
            data_dir: None,
            log_filter: "info".to_string(),
            seed_initial_widgets: true,
        }
    }
}

impl DashboardConfig {
    /// Read `path`, or return defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<config dir>/deskboard/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deskboard").join("config.json"))
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }

    pub fn registry(&self) -> WidgetRegistry {
        let mut registry = WidgetRegistry::new();
        registry.set_default_size(self.default_widget_size);
        registry.set_placement_range(self.placement_range);
        registry
    }

    /// A canvas configured from these settings.
    pub fn build_canvas(&self) -> Canvas {
        let registry = self.registry();
        let mut canvas = if self.seed_initial_widgets {
            Canvas::with_initial_layout(registry)
        } else {
            Canvas::with_registry(registry)
        };
        canvas.set_min_widget_size(self.min_widget_size);
        canvas.set_viewport_size(self.viewport.width, self.viewport.height);
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::ResizeHandle;
    use kurbo::Point;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = DashboardConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.autosave_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = DashboardConfig {
            placement_range: 50.0,
            seed_initial_widgets: false,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(DashboardConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "min_widget_size": 240.0 }"#).unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.min_widget_size, 240.0);
        assert_eq!(config.placement_range, 200.0);
    }

    #[test]
    fn test_small_sizes_in_file_keep_resize_floor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "min_widget_size": 50.0, "default_widget_size": { "width": 120.0, "height": 90.0 },
                 "seed_initial_widgets": false, "placement_range": 0.0 }"#,
        )
        .unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        let mut canvas = config.build_canvas();
        assert_eq!(canvas.min_widget_size(), MIN_WIDGET_SIZE);

        let id = canvas.add(crate::WidgetKind::Todo);
        let size = canvas.list()[0].size;
        assert_eq!((size.width, size.height), (200.0, 200.0));

        assert!(canvas.begin_resize(&id, ResizeHandle::Corner, Point::new(199.0, 199.0)));
        canvas.pointer_move(Point::new(0.0, 0.0));
        canvas.pointer_up();
        let size = canvas.list()[0].size;
        assert!(size.width >= MIN_WIDGET_SIZE && size.height >= MIN_WIDGET_SIZE);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(DashboardConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_build_canvas() {
        let canvas = DashboardConfig::default().build_canvas();
        assert_eq!(canvas.len(), 4);
        assert_eq!(canvas.min_widget_size(), 200.0);

        let empty = DashboardConfig {
            seed_initial_widgets: false,
            ..Default::default()
        }
        .build_canvas();
        assert!(empty.is_empty());
    }
}
