/*!
 * Markdown summary accumulation and output for codesum
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::Config;
use crate::error::Result;
use crate::types::ScanEntry;

/// Accumulates the markdown summary and writes it out once at the end.
///
/// The buffer is append-only. A section break is inserted whenever the
/// top-level directory component changes, naming the group just finished;
/// files directly at the root have no component and never trigger a break.
pub struct MarkdownWriter {
    /// Writer configuration
    config: Config,
    /// Accumulated summary text
    buffer: String,
    /// Top-level directory of the previously appended file
    last_top_level: Option<String>,
}

impl MarkdownWriter {
    /// Create a new markdown writer
    pub fn new(config: Config) -> Self {
        Self {
            config,
            buffer: String::new(),
            last_top_level: None,
        }
    }

    /// Append one file's block, preceded by a section break when the
    /// top-level directory group changes.
    pub fn add_file(&mut self, entry: &ScanEntry, content: &str) {
        if entry.top_level != self.last_top_level {
            if let Some(finished) = self.last_top_level.take() {
                self.buffer.push_str(&format!(
                    "\n---\n\nAfter finishing all code summary of {}\n\n",
                    finished
                ));
            }
            self.last_top_level = entry.top_level.clone();
        }

        self.buffer.push_str(&format!(
            "{}:\n```{}\n{}\n```\n\n",
            entry.rel_path.display(),
            entry.lang,
            content
        ));
    }

    /// The summary accumulated so far
    pub fn summary(&self) -> &str {
        &self.buffer
    }

    /// Write the summary to the output file. Runs exactly once per scan,
    /// after the processing loop completes, and overwrites any previous
    /// summary. An empty scan still writes an empty file so the output
    /// always reflects the latest run.
    pub fn write(&self) -> Result<()> {
        let file = File::create(&self.config.output_file)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.buffer.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
