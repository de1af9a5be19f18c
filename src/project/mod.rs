//! Project layer: configuration, file loading and include-path resolution.

mod config;
mod error;
mod file_loader;
mod include_resolver;

pub use config::{AnalyzerConfig, DEFAULT_INCLUDE_EXTENSION, DEFAULT_REPARSE_DELAY};
pub use error::LoadError;
pub use file_loader::{is_file, load_file};
pub use include_resolver::{IncludeResolver, normalize_path};
