//! Picker settings loaded from defaults, an optional TOML file and the environment.

use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HEADER_TEMPLATE, DEFAULT_LOCALE};
use crate::constraints::PickerConstraints;
use crate::error::{CoreError, CoreResult};


/// File name looked up in the working directory by [`PickerSettings::load`].
pub const SETTINGS_FILE: &str = "monthpick.toml";

/// Prefix of environment variables read by [`PickerSettings::load`].
pub const ENV_PREFIX: &str = "MONTHPICK";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PickerSettings {
    /// Zero-based week start offset from Sunday. `None` uses Sunday.
    #[serde(default)]
    pub first_weekday: Option<i32>,
    pub allow_precede_minimum_date: bool,
    /// Skeleton used for the month header, e.g. `MMMMyyyy`.
    pub header_template: String,
    /// Locale identifier such as `en_US` or `de_DE`.
    pub locale: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            first_weekday: None,
            allow_precede_minimum_date: false,
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl PickerSettings {
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("allow_precede_minimum_date", false)?
            .set_default("header_template", DEFAULT_HEADER_TEMPLATE)?
            .set_default("locale", DEFAULT_LOCALE)?)
    }

    /// ## Summary
    /// Loads settings from `monthpick.toml` (optional) and `MONTHPICK_*`
    /// environment variables. Environment variables take precedence over the
    /// file, which takes precedence over the defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the result fails.
    pub fn load() -> Result<Self> {
        let settings: Self = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!(?settings, "Picker settings loaded");
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML, does not match the
    /// settings shape, or fails validation.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Self = Self::defaults()?
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an empty header template
    /// or locale.
    pub fn validate(&self) -> CoreResult<()> {
        if self.header_template.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "header_template must not be empty".into(),
            ));
        }
        if self.locale.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration("locale must not be empty".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn effective_first_weekday(&self) -> i32 {
        self.first_weekday.unwrap_or(0)
    }

    /// Unbounded constraints carrying the configured week start and
    /// navigation policy.
    #[must_use]
    pub fn constraints(&self) -> PickerConstraints {
        PickerConstraints::new()
            .with_first_weekday(self.effective_first_weekday())
            .with_allow_precede_minimum_date(self.allow_precede_minimum_date)
    }
}

/// ## Summary
/// Loads `.env` into the environment (if present), then the settings.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<PickerSettings> {
    dotenvy::dotenv().ok();

    PickerSettings::load()
}
