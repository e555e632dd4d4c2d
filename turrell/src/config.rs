use log::debug;
use radial_gradient::{ChannelRounding, Color, GradientConfig, GradientResult};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const CONFIG_FILE: &str = "config.json";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// File-level settings. Missing keys take the defaults, unknown keys are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(value = "800"))]
    pub width: u32,

    #[derivative(Default(value = "800"))]
    pub height: u32,

    #[derivative(Default(value = "0.4"))]
    pub circle_radius_ratio: f64,

    #[derivative(Default(value = "\"#00AEC9\".to_string()"))]
    pub center_color: String,

    #[derivative(Default(value = "\"#0D6586\".to_string()"))]
    pub edge_color: String,

    #[derivative(Default(value = "\"truncate\".to_string()"))]
    pub rounding: String,
}

impl Config {
    /// Loads `path`, parsed as TOML when the extension is `.toml` and JSON otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };

        debug!("load config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Convert into render settings, parsing the color and rounding strings
    pub fn gradient(&self) -> GradientResult<GradientConfig> {
        Ok(GradientConfig::new()
            .with_width(self.width)
            .with_height(self.height)
            .with_circle_radius_ratio(self.circle_radius_ratio)
            .with_center_color(Color::from_hex(&self.center_color)?)
            .with_edge_color(Color::from_hex(&self.edge_color)?)
            .with_rounding(self.rounding.parse::<ChannelRounding>()?))
    }
}
