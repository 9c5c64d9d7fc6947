//! Configuration for the cardinal watch face.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file, or missing keys, fall back to the defaults of the reference
//! 144x168 display.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cardinal_core::{DEFAULT_CENTER, Face, FaceError, HOUR_RADIUS, MINUTE_RADIUS, Point};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod theme;

pub use theme::ColorTheme;

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a home directory")]
    NoHomeDir,
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),
}

/// Project directories for cardinal.
pub fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from("", "", "cardinal").ok_or(ConfigError::NoHomeDir)
}

/// Virtual display the face is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
    pub center_x: i32,
    pub center_y: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 144,
            height: 168,
            center_x: DEFAULT_CENTER.x,
            center_y: DEFAULT_CENTER.y,
        }
    }
}

/// Hand lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandsConfig {
    pub hour_radius: i32,
    pub minute_radius: i32,
}

impl Default for HandsConfig {
    fn default() -> Self {
        Self {
            hour_radius: HOUR_RADIUS,
            minute_radius: MINUTE_RADIUS,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme for the hands.
    pub theme: ColorTheme,
    /// Draw polygons and circles in addition to the hand lines.
    pub draw_shapes: bool,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub display: DisplayConfig,
    pub hands: HandsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            draw_shapes: true,
            log_filter: "info".to_string(),
            display: DisplayConfig::default(),
            hands: HandsConfig::default(),
        }
    }
}

impl Config {
    /// Default location of the configuration file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, returning defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Build the dial described by this configuration.
    pub fn face(&self) -> Result<Face, FaceError> {
        Face::new(
            Point::new(self.display.center_x, self.display.center_y),
            self.hands.hour_radius,
            self.hands.minute_radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cardinal-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_face_matches_core() {
        let face = Config::default().face().unwrap();
        assert_eq!(face, Face::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            theme = "magenta"

            [hands]
            minute_radius = 70
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, ColorTheme::Magenta);
        assert!(config.draw_shapes);
        assert_eq!(config.hands.hour_radius, HOUR_RADIUS);
        assert_eq!(config.hands.minute_radius, 70);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_invalid_radii_rejected() {
        let config = Config {
            hands: HandsConfig {
                hour_radius: 80,
                minute_radius: 60,
            },
            ..Default::default()
        };
        assert!(config.face().is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load_from(&scratch_path("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("saved/config.toml");
        let config = Config {
            theme: ColorTheme::Yellow,
            draw_shapes: false,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parse_error_names_file() {
        let path = scratch_path("broken/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "theme = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
        let _ = fs::remove_file(&path);
    }
}
