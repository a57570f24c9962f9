/*!
 * codesum - Concatenate a directory tree's source files into a single
 * markdown summary
 *
 * This library scans directory trees, filters files by a fixed
 * extension-to-language table and an ignore list, normalizes their content
 * and accumulates everything into one markdown document for LLM context.
 */

pub mod config;
pub mod error;
pub mod language;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{CodesumError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::{Scanner, ScannerStatistics};
pub use types::ScanEntry;
pub use utils::{format_file_size, normalize_content, relative_to};
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
