// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod settings;

// public uses
pub use app::{App, InputReference, Options};
pub use filtering::NameFilter;
pub use settings::{FilterSettings, Settings};

// re-exports
pub use wildcard;
