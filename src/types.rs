/*!
 * Core types and data structures for the codesum application
 */

use std::path::PathBuf;

/// A single file selected for inclusion in the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Absolute path on disk
    pub abs_path: PathBuf,
    /// Path relative to the scan root (the invocation working directory)
    pub rel_path: PathBuf,
    /// Markdown fence label resolved from the file extension
    pub lang: &'static str,
    /// First segment of the relative path's parent directory.
    /// `None` for files sitting directly at the root.
    pub top_level: Option<String>,
}
