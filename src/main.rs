/*!
 * Command-line interface for codesum
 */

use std::fs;
use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use codesum::config::{Args, Config};
use codesum::error::Result;
use codesum::report::{Reporter, ScanReport};
use codesum::scanner::Scanner;
use codesum::writer::MarkdownWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args)?;

    // Validate configuration
    config.validate()?;

    // Create progress bar with a single updating percentage line
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️ {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("🔍 Scanning");
    progress.set_message(format!(
        "Starting scan of {} target(s)...",
        config.targets.len()
    ));

    // Create scanner and writer
    let mut scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let mut writer = MarkdownWriter::new(config.clone());

    // Start timing both scan and write operations
    let start_time = Instant::now();

    // Single traversal: materialize the eligible file list up front so the
    // total is known before processing begins
    let entries = scanner.discover()?;
    progress.set_length(entries.len() as u64);
    progress.set_prefix("📄 Processing");
    progress.set_message(format!("Total files to process: {}", entries.len()));

    // Process every file in discovery order
    for entry in &entries {
        let content = scanner.process_file(entry)?;
        writer.add_file(entry, &content);
    }

    // Write the summary exactly once, after the loop completes
    progress.set_message(format!("Writing to {}...", config.output_file.display()));
    writer.write()?;

    // Calculate total duration (scan + write)
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Get scanner statistics
    let scanner_stats = scanner.get_statistics();

    // Prepare the scan report
    let output_size = fs::metadata(&config.output_file).map(|m| m.len()).unwrap_or(0);
    let scan_report = ScanReport {
        output_file: config.output_file.display().to_string(),
        output_size,
        duration: total_duration,
        files_processed: scanner_stats.files_processed,
        total_lines: scanner_stats.total_lines,
        total_chars: scanner_stats.total_chars,
        file_details: scanner_stats.file_details,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(config.report);
    reporter.print_report(&scan_report)?;

    Ok(())
}
