use common::{BmiSource, ClientConfig, Revision};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

/// Settings file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "heartcheck";
pub const ENV_PREFIX: &str = "HEARTCHECK";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8501";
pub const DEFAULT_STATIC_DIR: &str = "workspace/frontend/dist";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] ConfigError),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Application settings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// Base URL of the prediction endpoint; the revision's default when unset
    #[validate(url)]
    pub api_url: Option<String>,

    pub revision: Revision,

    /// Overrides the revision's own BMI source
    pub bmi_source: Option<BmiSource>,

    /// Address `serve` listens on
    pub bind_address: String,

    /// Directory holding the built frontend
    pub static_dir: PathBuf,
}

impl Settings {
    /// Built-in defaults, the lowest layer.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("revision", Revision::default().as_str())?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)
    }

    /// Loads defaults, then the settings file, then `HEARTCHECK_*` variables.
    ///
    /// An explicit `config_file` must exist; the default `heartcheck.toml` is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        let file = match config_file {
            Some(path) => {
                tracing::debug!("Reading settings from {}", path.display());
                File::from(path).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = Self::defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX));

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Applies command-line overrides, the highest layer.
    pub fn override_with(
        &mut self,
        api_url: Option<String>,
        revision: Option<Revision>,
        bmi_source: Option<BmiSource>,
    ) -> Result<(), SettingsError> {
        if let Some(api_url) = api_url {
            self.api_url = Some(api_url);
        }
        if let Some(revision) = revision {
            self.revision = revision;
        }
        if let Some(bmi_source) = bmi_source {
            self.bmi_source = Some(bmi_source);
        }
        self.validate()?;
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            revision: self.revision,
            bmi_source: self.bmi_source,
        }
    }
}
