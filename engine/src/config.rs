use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use quadrature_types::{Overlay, Parameter, SliderPosition, UiOptions, Visibility};

/// Optional `~/.quadrature/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
///
/// [sliders]
/// x = 50
/// slope = 50
/// x_error = 50
/// slope_error = 50
///
/// [overlays]
/// y_bounds = true
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuadratureConfig {
    pub app: Option<AppConfig>,
    pub sliders: Option<SlidersConfig>,
    pub overlays: Option<OverlaysConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for checkboxes, slider tracks and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Starting slider positions on the `0..=100` track. Positions past the end
/// of the track fail to parse.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlidersConfig {
    pub x: Option<SliderPosition>,
    pub slope: Option<SliderPosition>,
    pub x_error: Option<SliderPosition>,
    pub slope_error: Option<SliderPosition>,
}

/// Overlays to show at startup. Everything is hidden unless listed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlaysConfig {
    #[serde(default)]
    pub x_error_bars: bool,
    #[serde(default)]
    pub slope_bounds: bool,
    #[serde(default)]
    pub y_bounds: bool,
    #[serde(default)]
    pub x_bounds: bool,
    #[serde(default)]
    pub y_x_bounds: bool,
    #[serde(default)]
    pub y_m_bounds: bool,
}

const ASCII_ENV: &str = "QUADRATURE_ASCII";

impl QuadratureConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from `[app]`, with `QUADRATURE_ASCII` forcing ASCII glyphs.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only) || ascii_from_env(),
            high_contrast: app.is_some_and(|a| a.high_contrast),
        }
    }

    #[must_use]
    pub fn slider_positions(&self) -> [SliderPosition; 4] {
        let mut positions = [SliderPosition::default(); 4];
        if let Some(sliders) = &self.sliders {
            let configured = [
                (Parameter::X, sliders.x),
                (Parameter::Slope, sliders.slope),
                (Parameter::XError, sliders.x_error),
                (Parameter::SlopeError, sliders.slope_error),
            ];
            for (parameter, position) in configured {
                if let Some(position) = position {
                    positions[parameter.index()] = position;
                }
            }
        }
        positions
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        let Some(overlays) = &self.overlays else {
            return Visibility::default();
        };
        Visibility::default()
            .with(Overlay::XErrorBars, overlays.x_error_bars)
            .with(Overlay::SlopeBounds, overlays.slope_bounds)
            .with(Overlay::YBounds, overlays.y_bounds)
            .with(Overlay::XBounds, overlays.x_bounds)
            .with(Overlay::YxBounds, overlays.y_x_bounds)
            .with(Overlay::YmBounds, overlays.y_m_bounds)
    }
}

/// UI options when no config file exists.
#[must_use]
pub fn default_ui_options() -> UiOptions {
    UiOptions {
        ascii_only: ascii_from_env(),
        high_contrast: false,
    }
}

fn ascii_from_env() -> bool {
    env::var(ASCII_ENV).is_ok_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".quadrature").join("config.toml"))
}
