// third-party imports
use config::{Config, Environment, File, FileFormat, Map};

// local imports
use crate::error::Result;
use crate::settings::{DEFAULT_SETTINGS, Settings};

// ---

pub const DEFAULT_CONFIG_FILE: &str = "namefilter.yaml";
pub const ENV_PREFIX: &str = "NAMEFILTER";

/// Starts loading settings from the given configuration files, in order of increasing priority.
pub fn at<I>(paths: I) -> Loader
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().to_owned()).collect())
}

/// Loads settings with the default configuration file only.
pub fn load() -> Result<Settings> {
    Loader::new(Vec::new()).load()
}

// ---

pub struct Loader {
    paths: Vec<String>,
    no_default: bool,
    no_env: bool,
    env_vars: Option<Map<String, String>>,
}

impl Loader {
    fn new(paths: Vec<String>) -> Self {
        Self {
            paths,
            no_default: false,
            no_env: false,
            env_vars: None,
        }
    }

    /// Skips embedded defaults and the default configuration file.
    pub fn no_default(self, val: bool) -> Self {
        Self { no_default: val, ..self }
    }

    /// Skips environment overrides.
    pub fn no_env(self, val: bool) -> Self {
        Self { no_env: val, ..self }
    }

    /// Reads environment overrides from `vars` instead of the process environment.
    pub fn env_vars(self, vars: Map<String, String>) -> Self {
        Self {
            env_vars: Some(vars),
            ..self
        }
    }

    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder();

        if !self.no_default {
            builder = builder.add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
            if self.paths.is_empty() {
                log::debug!("loading optional configuration file {:?}", DEFAULT_CONFIG_FILE);
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
            }
        }

        for path in &self.paths {
            log::debug!("loading configuration file {:?}", path);
            builder = builder.add_source(File::with_name(path));
        }

        if !self.no_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("filter.include")
                    .with_list_parse_key("filter.exclude")
                    .source(self.env_vars),
            );
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}
