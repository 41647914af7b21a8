//! CSV encoding
//!
//! RFC-4180-style: every value is quoted, embedded quote characters are
//! doubled, values are joined by the separator, and each row carries
//! exactly one trailing terminator. The legacy scraper only escaped the
//! first embedded quote per value; that was a bug and every occurrence is
//! escaped here.
//!
//! Pure string-to-string functions; no I/O and no failure modes.

/// Delimiter and quote characters for one session's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub quote: char,
    pub separator: char,
    pub terminator: char,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            quote: '"',
            separator: ',',
            terminator: '\n',
        }
    }
}

/// Encodes one row: every value quoted and escaped, separator-joined, one
/// trailing terminator.
pub fn encode_row<S: AsRef<str>>(format: CsvFormat, values: &[S]) -> String {
    let mut line = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            line.push(format.separator);
        }
        push_quoted(&mut line, format, value.as_ref());
    }
    line.push(format.terminator);
    line
}

/// Encodes the header row. Same encoding as a data row, applied to the
/// fixed column labels.
pub fn encode_header(format: CsvFormat, labels: &[&str]) -> String {
    encode_row(format, labels)
}

fn push_quoted(line: &mut String, format: CsvFormat, value: &str) {
    line.push(format.quote);
    for c in value.chars() {
        line.push(c);
        if c == format.quote {
            line.push(format.quote);
        }
    }
    line.push(format.quote);
}
