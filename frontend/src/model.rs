use leptos::{Callback, View};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Visual density preset for an empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Compact,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Compact => "compact",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown empty state variant `{0}` (expected `default` or `compact`)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Variant::Default),
            "compact" => Ok(Variant::Compact),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}

/// The single interactive control of an empty state.
#[derive(Clone)]
pub struct EmptyStateAction {
    pub label: String,
    pub on_activate: Callback<()>,
}

impl EmptyStateAction {
    pub fn new(label: impl Into<String>, on_activate: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_activate,
        }
    }
}

/// Everything one render of an empty state needs. Built fresh by the caller
/// on every render pass; strings are taken as given, without validation.
#[derive(Clone, Default)]
pub struct EmptyStateConfig {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<View>,
    pub action: Option<EmptyStateAction>,
    pub variant: Variant,
    /// Appended verbatim to the root element's classes.
    pub class: Option<String>,
}

impl EmptyStateConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: View) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_action(mut self, action: EmptyStateAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("compact".parse::<Variant>(), Ok(Variant::Compact));
        assert_eq!(" Default ".parse::<Variant>(), Ok(Variant::Default));
        assert_eq!("COMPACT".parse::<Variant>(), Ok(Variant::Compact));
    }

    #[test]
    fn unknown_variant_is_rejected_with_original_input() {
        let err = "dense".parse::<Variant>().unwrap_err();
        assert_eq!(err, ParseVariantError("dense".into()));
        assert!(err.to_string().contains("`dense`"));
    }

    #[test]
    fn variant_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Variant::Compact).unwrap(), "\"compact\"");
        let parsed: Variant = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(parsed, Variant::Default);
        assert_eq!(Variant::default(), Variant::Default);
        assert_eq!(Variant::Compact.to_string(), "compact");
    }

    #[test]
    fn builder_keeps_strings_verbatim() {
        let config = EmptyStateConfig::new("")
            .with_description("  ")
            .with_variant(Variant::Compact)
            .with_class(" extra-class ");
        assert_eq!(config.title, "");
        assert_eq!(config.description.as_deref(), Some("  "));
        assert_eq!(config.variant, Variant::Compact);
        assert_eq!(config.class.as_deref(), Some(" extra-class "));
        assert!(config.icon.is_none());
        assert!(config.action.is_none());
    }
}
