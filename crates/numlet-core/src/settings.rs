//! Global presentation settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before the first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The digit mapping itself is not configurable; see [`crate::mapper`].

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
///
/// Fails with `AlreadyInitialized` once the singleton has been read, since the
/// custom values could no longer take effect.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input: InputSettings,
    pub display: DisplaySettings,
    pub feedback: FeedbackSettings,
    pub share: ShareSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub example: String,
    #[serde(default)]
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub empty_source_label: String,
    pub empty_word_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    pub copied_notice: String,
    pub notice_duration_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareSettings {
    pub error_title: String,
    pub error_message: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(feedback.copied_notice);
    check_non_empty!(share.error_title);
    check_non_empty!(share.error_message);

    if s.feedback.notice_duration_ms == 0 {
        return Err(SettingsError::InvalidValue {
            field: "feedback.notice_duration_ms".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}
