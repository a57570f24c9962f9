/*!
 * Utility functions for codesum
 */

use std::path::{Path, PathBuf};

/// Collapse runs of blank lines down to at most two and trim the result.
///
/// A line counts as blank when it is empty after trimming. Runs of more than
/// two consecutive blank lines are truncated to two; shorter runs are kept
/// as-is. The final result is trimmed of leading and trailing whitespace, so
/// blank runs at the very start or end of the input disappear entirely. Pure
/// text transform, idempotent on its own output.
pub fn normalize_content(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut blank_run = 0usize;

    for line in content.split('\n') {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run <= 2 {
                result.push('\n');
            }
        } else {
            blank_run = 0;
            result.push_str(line);
            result.push('\n');
        }
    }

    result.trim().to_string()
}

/// Compute `path` relative to `base`, inserting `..` components when `path`
/// lies outside `base`. Both paths are expected to be absolute. Falls back to
/// returning `path` unchanged when no common ancestor exists.
pub fn relative_to(base: &Path, path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix(base) {
        return stripped.to_path_buf();
    }

    let mut ancestor = base.to_path_buf();
    let mut prefix = PathBuf::new();
    while !path.starts_with(&ancestor) {
        prefix.push("..");
        if !ancestor.pop() {
            return path.to_path_buf();
        }
    }

    match path.strip_prefix(&ancestor) {
        Ok(rest) => prefix.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
