use std::path::PathBuf;

use error_stack::{report, ResultExt};
use serde::Deserialize;

use crate::{
    consts,
    errors::{ConfigurationError, CustomResult},
    logger::config::Log,
    types::ReleaseInformation,
};

/// Defaults bundled with the connector, overridden by an optional file and
/// by `PAYSAFECARD__*` environment variables.
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub release: Release,
    pub gateway: Gateway,
    pub log: Log,
}

/// Release metadata reported to the host.
#[derive(Clone, Deserialize, Debug)]
pub struct Release {
    pub version: String,
    /// `dd/MM/yyyy`
    pub date: String,
}

impl Release {
    pub fn to_release_information(&self) -> CustomResult<ReleaseInformation, ConfigurationError> {
        let invalid_date = || ConfigurationError::InvalidReleaseDate {
            date: self.date.clone(),
        };
        let format = time::format_description::parse(consts::RELEASE_DATE_FORMAT)
            .map_err(|err| report!(invalid_date()).attach_printable(err.to_string()))?;
        let date = time::Date::parse(self.date.trim(), &format)
            .map_err(|err| report!(invalid_date()).attach_printable(err.to_string()))?;

        Ok(ReleaseInformation {
            version: self.version.clone(),
            date,
        })
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct Gateway {
    #[serde(default = "default_sandbox_url")]
    pub sandbox_base_url: String,
    #[serde(default = "default_production_url")]
    pub production_base_url: String,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_total_timeout_ms")]
    pub total_timeout_ms: u64,
}

impl Default for Gateway {
    fn default() -> Self {
        Self {
            sandbox_base_url: default_sandbox_url(),
            production_base_url: default_production_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
            total_timeout_ms: default_total_timeout_ms(),
        }
    }
}

impl Gateway {
    pub fn base_url(&self, is_sandbox: bool) -> &str {
        if is_sandbox {
            &self.sandbox_base_url
        } else {
            &self.production_base_url
        }
    }
}

fn default_sandbox_url() -> String {
    consts::SANDBOX_URL.to_string()
}

fn default_production_url() -> String {
    consts::PRODUCTION_URL.to_string()
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_total_timeout_ms() -> u64 {
    45_000
}

impl Config {
    /// Builds the configuration from the bundled defaults and the environment.
    pub fn new() -> CustomResult<Self, ConfigurationError> {
        Self::new_with_config_path(None)
    }

    /// Same as [`Config::new`], layering `explicit_config_path` (if any) on
    /// top of the bundled defaults.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> CustomResult<Self, ConfigurationError> {
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));

        if let Some(config_path) = explicit_config_path {
            builder = builder.add_source(config::File::from(config_path).required(false));
        }

        let config = builder
            .add_source(
                // values stay strings until serde reads them, so `1.10` is not read as `1.1`
                config::Environment::with_prefix(consts::ENV_PREFIX).separator("__"),
            )
            .build()
            .map_err(ConfigurationError::from)?;

        let config: Self = serde_path_to_error::deserialize(config)
            .map_err(|error| {
                let path = error.path().to_string();
                report!(ConfigurationError::from(error.into_inner()))
                    .attach_printable(format!("at `{path}`"))
            })?;

        config
            .release
            .to_release_information()
            .attach_printable("validating release metadata")?;

        Ok(config)
    }
}
