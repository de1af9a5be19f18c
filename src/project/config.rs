//! Analyzer configuration supplied by the host.

use std::path::PathBuf;
use std::time::Duration;

/// Extension tried when an include names a file without one.
pub const DEFAULT_INCLUDE_EXTENSION: &str = "inc";

/// Delay between the last edit of an open file and its reparse.
pub const DEFAULT_REPARSE_DELAY: Duration = Duration::from_millis(300);

/// Settings for include resolution and reparse scheduling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AnalyzerConfig {
    /// Directories searched in order.
    pub include_paths: Vec<PathBuf>,
    /// Extensions appended when the exact name is not found, without the dot.
    pub include_extensions: Vec<String>,
    pub reparse_delay: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            include_paths: Vec::new(),
            include_extensions: vec![DEFAULT_INCLUDE_EXTENSION.to_string()],
            reparse_delay: DEFAULT_REPARSE_DELAY,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.include_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    pub fn with_include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn with_reparse_delay(mut self, delay: Duration) -> Self {
        self.reparse_delay = delay;
        self
    }
}
