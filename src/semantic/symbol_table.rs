//! Per-file symbol sets and the merged view across includes.
mod file_symbols;
mod merge;

pub use file_symbols::FileSymbols;
pub use merge::{MergedSymbols, merged_symbols};
