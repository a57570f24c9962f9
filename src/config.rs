/*!
 * Configuration handling for codesum
 */

use std::env;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::language::DEFAULT_IGNORE;
use crate::report::ReportFormat;

/// Default name of the generated summary, written next to the executable.
pub const DEFAULT_OUTPUT_NAME: &str = "code_summary.md";

/// Command-line arguments for codesum
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "codesum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a directory tree's source files into a single markdown summary",
    long_about = "Recursively scans the given directories (default: the current directory), \
filters files by a fixed extension-to-language table and an ignore list, normalizes their \
content and concatenates everything into one markdown document with per-file code blocks."
)]
pub struct Args {
    /// Directories to scan; non-existent paths are silently skipped
    pub directories: Vec<String>,

    /// Output markdown file (default: code_summary.md next to the executable)
    #[clap(long)]
    pub output: Option<String>,

    /// Comma-separated list of extra path substrings to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Format of the completion report
    #[clap(long, value_enum, default_value_t = ReportFormat::Table)]
    pub report: ReportFormat,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root all relative paths in the summary are computed against
    /// (the invocation working directory)
    pub root: PathBuf,

    /// Directories to scan, absolutized, with non-existent ones dropped
    pub targets: Vec<PathBuf>,

    /// Output markdown file path
    pub output_file: PathBuf,

    /// Path substrings that exclude a file when contained in its
    /// root-relative path
    pub ignore_tokens: Vec<String>,

    /// Format of the completion report
    pub report: ReportFormat,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let root = env::current_dir()?;

        let targets = if args.directories.is_empty() {
            vec![root.clone()]
        } else {
            args.directories
                .iter()
                .map(|dir| root.join(dir))
                .filter(|path| path.exists())
                .collect()
        };

        let output_file = match args.output {
            Some(path) => root.join(path),
            None => {
                let exe = env::current_exe()?;
                exe.parent()
                    .map(|dir| dir.join(DEFAULT_OUTPUT_NAME))
                    .unwrap_or_else(|| root.join(DEFAULT_OUTPUT_NAME))
            }
        };

        let mut ignore_tokens: Vec<String> =
            DEFAULT_IGNORE.iter().map(|token| token.to_string()).collect();
        ignore_tokens.extend(args.ignore);
        // Never include the summary itself in a later run
        if let Some(name) = output_file.file_name() {
            ignore_tokens.push(name.to_string_lossy().into_owned());
        }

        Ok(Self {
            root,
            targets,
            output_file,
            ignore_tokens,
            report: args.report,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.exists(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}
