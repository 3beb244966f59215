// std imports
use std::include_str;

// third-party imports
use serde::Deserialize;

// ---

pub static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    pub filter: FilterSettings,
}

// ---

/// Patterns a name is checked against.
///
/// Every entry of `include` and `exclude` may hold several patterns joined by `separator`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct FilterSettings {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    #[serde(alias = "ignore_case")]
    pub ignore_case: bool,
    pub separator: String,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            ignore_case: false,
            separator: ",".into(),
        }
    }
}

#[cfg(test)]
mod tests;
