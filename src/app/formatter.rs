use crate::app::models::FileEntry;
use anyhow::Result;
use std::fs;
use std::io::Write;

const RULE: &str = "==================================================";

/// Streams header blocks and file bodies into the bundle.
pub struct BundleWriter<W: Write> {
    out: W,
}

impl<W: Write> BundleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self, relative_path: &str) -> Result<()> {
        write!(self.out, "\n{}\nFILE: {}\n{}\n", RULE, relative_path, RULE)?;
        Ok(())
    }

    /// Writes the entry's header and contents. Returns `Ok(false)` when the
    /// file could not be read and an inline error line was written instead.
    pub fn write_entry(&mut self, entry: &FileEntry) -> Result<bool> {
        self.write_header(&entry.relative_path)?;

        match fs::read_to_string(&entry.path) {
            Ok(content) => {
                self.out.write_all(content.as_bytes())?;
                Ok(true)
            }
            Err(e) => {
                log::warn!("Error reading {}: {}", entry.relative_path, e);
                writeln!(self.out, "Error reading file: {}", e)?;
                Ok(false)
            }
        }
    }

    /// Flushes buffered output and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
