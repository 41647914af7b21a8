//! Output layer
//!
//! - `csv`: pure record-to-line encoding (quoting, escaping, joining)
//! - `sink`: where encoded lines go (a new file, or stdout)

pub mod csv;
pub mod sink;

pub use csv::{encode_header, encode_row, CsvFormat};
pub use sink::{CsvFileSink, CsvStdoutSink, RecordSink};
