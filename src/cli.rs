// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::{app::InputReference, settings::FilterSettings};

// ---

/// Filters class and component names against wildcard patterns.
///
/// Patterns support a leading and/or trailing '*' only, a bare '*' matches any name.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, may be repeated, an empty value or '-' discards the previous ones and the defaults.
    #[arg(long, value_name = "FILE", env = "NAMEFILTER_CONFIG", number_of_values = 1)]
    pub config: Vec<String>,

    /// Accept names matching any of the patterns, several patterns may be joined by the separator.
    #[arg(short, long, value_name = "PATTERNS", number_of_values = 1)]
    pub include: Vec<String>,

    /// Reject names matching any of the patterns, several patterns may be joined by the separator.
    #[arg(short, long, value_name = "PATTERNS", number_of_values = 1)]
    pub exclude: Vec<String>,

    /// Compare names ignoring ASCII case.
    #[arg(long)]
    pub ignore_case: bool,

    /// Pattern separator, overrides the configured one.
    #[arg(long, value_name = "CHAR")]
    pub separator: Option<String>,

    /// Select names that are not accepted by the filter.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected names.
    #[arg(short, long)]
    pub count: bool,

    /// Files to process, standard input is used if none or '-' is given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Returns the configuration files to load and whether the defaults are discarded.
    pub fn configs(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();
        (&self.config[offset..], no_default)
    }

    /// Merges the command-line patterns into the configured ones.
    pub fn apply(&self, settings: &mut FilterSettings) {
        settings.include.extend(self.include.iter().cloned());
        settings.exclude.extend(self.exclude.iter().cloned());
        if self.ignore_case {
            settings.ignore_case = true;
        }
        if let Some(separator) = &self.separator {
            settings.separator = separator.clone();
        }
    }

    pub fn inputs(&self) -> Vec<InputReference> {
        if self.files.is_empty() {
            return vec![InputReference::Stdin];
        }

        self.files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    InputReference::Stdin
                } else {
                    InputReference::File(path.clone())
                }
            })
            .collect()
    }
}
