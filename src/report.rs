/*!
 * Reporting functionality for codesum
 *
 * Provides functionality for generating formatted reports of scan results,
 * either as console tables via the tabled library or as JSON.
 */

use std::collections::HashMap;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::Result;
use crate::utils::format_file_size;

/// Information about a file in the report
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReportInfo {
    /// Number of lines in the file after normalization
    pub lines: usize,
    /// Number of characters in the file after normalization
    pub chars: usize,
}

/// Statistics for a directory scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Size of the written output file in bytes
    pub output_size: u64,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Number of files processed
    pub files_processed: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Console table output
    Table,
    /// Machine-readable JSON on stdout
    Json,
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on scan statistics
    pub fn generate_report(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            ReportFormat::Table => Ok(self.generate_console_report(report)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) -> Result<()> {
        println!("\n{}", self.generate_report(report)?);
        Ok(())
    }

    // Truncate a long path, preserving the trailing segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() <= 2 {
            // Slice on a char boundary so multibyte names cannot split a char
            let keep = max_len.saturating_sub(3);
            let tail = path
                .char_indices()
                .rev()
                .nth(keep.saturating_sub(1))
                .map(|(idx, _)| idx)
                .unwrap_or(0);
            return format!("...{}", &path[tail..]);
        }

        // Keep as many trailing segments as fit
        let mut current_len = 3; // Start with "..."
        let mut segments = Vec::new();
        for part in parts.iter().rev() {
            let part_len = part.len() + 1; // +1 for '/'
            if current_len + part_len <= max_len {
                segments.push(*part);
                current_len += part_len;
            } else {
                break;
            }
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "💾 Output Size".to_string(),
                value: format_file_size(report.output_size),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Processed".to_string(),
                value: self.format_number(report.files_processed),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "🔤 Total Characters".to_string(),
                value: self.format_number(report.total_chars),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a files table using the tabled crate
    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        // Sort files by character count
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        // Show all files or just the top 10 when there are many
        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                chars: self.format_number(info.chars),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let summary_title = "✅  SUMMARY COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT"
        } else {
            "📋  PROCESSED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
