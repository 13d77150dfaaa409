//! Declarative select configuration.
//!
//! [`SelectSettings`] covers the plain-data part of a select's setup (mode,
//! filtering, create-on-type, key, throttle) so it can live in a host's
//! config file. Closures such as custom formats stay on the builders.
//!
//! With the `serde` feature the struct deserializes from camelCase fields;
//! missing fields take their defaults and unknown fields are rejected.

use std::time::Duration;

use selkit_core::SelectBuilder;
use selkit_options::{Createable, Filterable, OptionSource, OptionsBuilder, SelectItem};
use selkit_runtime::DEFAULT_THROTTLE;

/// Upper bound for `throttle_ms`.
pub const MAX_THROTTLE_MS: u64 = 10_000;

/// Errors from loading or validating [`SelectSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[cfg(feature = "json")]
    #[error("invalid select settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("throttle window of {got} ms exceeds the {max} ms limit")]
    ThrottleTooLong { got: u64, max: u64 },
    #[error("key must not be empty")]
    EmptyKey,
}

/// Built-in filtering strategies selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FilterMode {
    /// Every option passes for every query.
    Off,
    /// Fuzzy rank and highlight.
    #[default]
    Fuzzy,
    /// Case-sensitive substring match.
    Substring,
}

impl FilterMode {
    /// The matching [`Filterable`] for option type `T`.
    #[must_use]
    pub fn to_filterable<T>(self) -> Filterable<T> {
        match self {
            Self::Off => Filterable::Off,
            Self::Fuzzy => Filterable::Fuzzy,
            Self::Substring => Filterable::Substring,
        }
    }
}

/// Plain-data select configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields, rename_all = "camelCase")
)]
pub struct SelectSettings {
    pub multiple: bool,
    pub disabled: bool,
    pub filterable: FilterMode,
    /// Offer a "Create ..." entry built from the typed text.
    pub createable: bool,
    /// Field used for labels, search text, and created values.
    pub key: Option<String>,
    /// Async fetch throttle window in milliseconds.
    pub throttle_ms: u64,
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self {
            multiple: false,
            disabled: false,
            filterable: FilterMode::default(),
            createable: false,
            key: None,
            throttle_ms: duration_ms(DEFAULT_THROTTLE),
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl SelectSettings {
    /// Parse and validate settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed JSON or unknown fields,
    /// and any error from [`validate`](Self::validate).
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        tracing::debug!(?settings, "select settings loaded");
        Ok(settings)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// [`SettingsError::ThrottleTooLong`] above [`MAX_THROTTLE_MS`];
    /// [`SettingsError::EmptyKey`] for a blank key.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.throttle_ms > MAX_THROTTLE_MS {
            return Err(SettingsError::ThrottleTooLong {
                got: self.throttle_ms,
                max: MAX_THROTTLE_MS,
            });
        }
        if self.key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            return Err(SettingsError::EmptyKey);
        }
        Ok(())
    }

    #[must_use]
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// An options builder preconfigured with `key`, filtering, and creation.
    pub fn options_builder<T: SelectItem + 'static>(
        &self,
        source: impl Into<OptionSource<T>>,
    ) -> OptionsBuilder<T> {
        let mut builder = OptionsBuilder::new(source).filterable(self.filterable.to_filterable());
        if let Some(key) = &self.key {
            builder = builder.key(key.clone());
        }
        if self.createable {
            builder = builder.createable(Createable::FromInput);
        }
        builder
    }

    /// Apply mode and disabled state to a select builder.
    pub fn apply<O, V>(&self, builder: SelectBuilder<O, V>) -> SelectBuilder<O, V> {
        builder.multiple(self.multiple).disabled(self.disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = SelectSettings::default();
        assert!(!settings.multiple);
        assert_eq!(settings.filterable, FilterMode::Fuzzy);
        assert_eq!(settings.throttle(), DEFAULT_THROTTLE);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_rejects_long_throttle() {
        let settings = SelectSettings {
            throttle_ms: MAX_THROTTLE_MS + 1,
            ..SelectSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, SettingsError::ThrottleTooLong { got: 10_001, .. }));
        assert_eq!(
            err.to_string(),
            "throttle window of 10001 ms exceeds the 10000 ms limit"
        );
    }

    #[test]
    fn validate_rejects_blank_key() {
        let settings = SelectSettings {
            key: Some("  ".to_owned()),
            ..SelectSettings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::EmptyKey)));
    }

    #[test]
    fn options_builder_applies_filter_and_create() {
        let settings = SelectSettings {
            filterable: FilterMode::Substring,
            createable: true,
            ..SelectSettings::default()
        };
        let options = settings
            .options_builder(vec!["Apple".to_owned(), "Grape".to_owned()])
            .build();
        let found = options.options("ap");
        // "Apple" has no lowercase "ap"; substring matching is case-sensitive.
        let texts: Vec<_> = found.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["Grape", "ap"]);
        assert!(found[1].created);
    }

    #[test]
    fn off_passes_everything() {
        let settings = SelectSettings {
            filterable: FilterMode::Off,
            ..SelectSettings::default()
        };
        let options = settings.options_builder(vec!["kiwi".to_owned()]).build();
        assert_eq!(options.options("zzz").len(), 1);
    }

    #[cfg(feature = "json")]
    #[test]
    fn parses_camel_case_json() {
        let settings = SelectSettings::from_json(
            r#"{ "multiple": true, "filterable": "substring", "throttleMs": 100, "key": "name" }"#,
        )
        .unwrap();
        assert!(settings.multiple);
        assert_eq!(settings.filterable, FilterMode::Substring);
        assert_eq!(settings.throttle(), Duration::from_millis(100));
        assert_eq!(settings.key.as_deref(), Some("name"));
        assert!(!settings.createable);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_rejects_unknown_fields_and_bad_ranges() {
        assert!(matches!(
            SelectSettings::from_json(r#"{ "multi": true }"#),
            Err(SettingsError::Json(_))
        ));
        assert!(matches!(
            SelectSettings::from_json(r#"{ "throttleMs": 99999 }"#),
            Err(SettingsError::ThrottleTooLong { .. })
        ));
    }
}
