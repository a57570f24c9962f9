/*!
 * Directory and file scanning functionality
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::language::language_for;
use crate::report::FileReportInfo;
use crate::types::ScanEntry;
use crate::utils::{normalize_content, relative_to};

/// Scanner statistics, built up over a single run
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Number of files processed
    pub files_processed: usize,
    /// Total number of lines across all processed files (after normalization)
    pub total_lines: usize,
    /// Total number of characters across all processed files
    pub total_chars: usize,
    /// Details for each file, keyed by root-relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: ScannerStatistics,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: ScannerStatistics::default(),
        }
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics.clone()
    }

    /// Walk every target directory and collect the eligible files, in target
    /// order, each target in the walker's discovery order.
    ///
    /// A target that does not exist yields nothing. Any other error while
    /// reading the tree is fatal and propagates.
    pub fn discover(&self) -> Result<Vec<ScanEntry>> {
        let mut entries = Vec::new();

        for target in &self.config.targets {
            if !target.is_dir() {
                continue;
            }

            for entry in WalkDir::new(target) {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }
                if let Some(scan_entry) = self.classify(entry.path()) {
                    entries.push(scan_entry);
                }
            }
        }

        Ok(entries)
    }

    /// Decide whether a file belongs in the summary.
    ///
    /// Pure with respect to the filesystem: the verdict depends only on the
    /// path. A file qualifies when its extension maps to a language tag
    /// (exact, case-sensitive lookup) and its root-relative path contains
    /// none of the ignore tokens as a substring.
    pub fn classify(&self, abs_path: &Path) -> Option<ScanEntry> {
        if abs_path == self.config.output_file {
            return None;
        }

        let lang = language_for(abs_path)?;

        let rel_path = relative_to(&self.config.root, abs_path);
        let rel_str = rel_path.to_string_lossy();
        if self
            .config
            .ignore_tokens
            .iter()
            .any(|token| rel_str.contains(token.as_str()))
        {
            return None;
        }

        let top_level = rel_path
            .parent()
            .and_then(|parent| parent.components().next())
            .map(|component| component.as_os_str().to_string_lossy().into_owned());

        Some(ScanEntry {
            abs_path: abs_path.to_path_buf(),
            rel_path,
            lang,
            top_level,
        })
    }

    /// Read and normalize one file's content, updating progress and
    /// statistics. An unreadable file is fatal.
    pub fn process_file(&mut self, entry: &ScanEntry) -> Result<String> {
        self.progress.inc(1);

        let rel_display = entry.rel_path.to_string_lossy();
        // Truncate long paths on a char boundary to keep the progress line stable
        let display_name = if rel_display.chars().count() > 40 {
            let tail = rel_display
                .char_indices()
                .rev()
                .nth(36)
                .map(|(idx, _)| idx)
                .unwrap_or(0);
            format!("...{}", &rel_display[tail..])
        } else {
            rel_display.to_string()
        };
        self.progress
            .set_message(format!("Processing: {}", display_name));

        let raw = fs::read_to_string(&entry.abs_path)?;
        let content = normalize_content(&raw);

        let line_count = if content.is_empty() {
            0
        } else {
            content.lines().count()
        };
        let char_count = content.chars().count();

        self.statistics.files_processed += 1;
        self.statistics.total_lines += line_count;
        self.statistics.total_chars += char_count;
        self.statistics.file_details.insert(
            rel_display.into_owned(),
            FileReportInfo {
                lines: line_count,
                chars: char_count,
            },
        );

        Ok(content)
    }
}
