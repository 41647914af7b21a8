//! Record sinks
//!
//! The session writes through a `RecordSink`; it never sees file handles.
//! Both sinks flush after every line so an externally terminated run leaves
//! a valid, truncated-but-parseable stream behind.

use super::csv::{encode_header, encode_row, CsvFormat};
use crate::record::Record;
use crate::{FugotchaError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Destination for encoded records
///
/// The session calls `write_header` at most once, before any record.
pub trait RecordSink {
    fn write_header(&mut self, labels: &[&str]) -> Result<()>;
    fn write_record(&mut self, record: &Record) -> Result<()>;
}

/// Writes CSV lines to a freshly created file
///
/// Refuses to overwrite: an existing destination is a fatal conflict, not
/// something to silently clobber.
#[derive(Debug)]
pub struct CsvFileSink {
    file: File,
    format: CsvFormat,
}

impl CsvFileSink {
    pub fn create(path: &Path, format: CsvFormat) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    FugotchaError::OutputConflict {
                        path: path.to_path_buf(),
                    }
                } else {
                    FugotchaError::Io(e)
                }
            })?;

        tracing::debug!("Writing records to {}", path.display());
        Ok(Self { file, format })
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }
}

impl RecordSink for CsvFileSink {
    fn write_header(&mut self, labels: &[&str]) -> Result<()> {
        let line = encode_header(self.format, labels);
        self.write_line(&line)
    }

    fn write_record(&mut self, record: &Record) -> Result<()> {
        let line = encode_row(self.format, record.values());
        self.write_line(&line)
    }
}

/// Writes CSV lines to standard output (the default when no destination is
/// given, matching the original console behavior)
pub struct CsvStdoutSink {
    format: CsvFormat,
}

impl CsvStdoutSink {
    pub fn new(format: CsvFormat) -> Self {
        Self { format }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl RecordSink for CsvStdoutSink {
    fn write_header(&mut self, labels: &[&str]) -> Result<()> {
        let line = encode_header(self.format, labels);
        self.write_line(&line)
    }

    fn write_record(&mut self, record: &Record) -> Result<()> {
        let line = encode_row(self.format, record.values());
        self.write_line(&line)
    }
}
