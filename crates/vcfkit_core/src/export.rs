//! TXT and CSV renderers for number lists.
//!
//! # Invariants
//! - TXT is one number per line, `\n`-joined, no trailing newline.
//! - CSV has a single `phone` header column and `\n` row terminators.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const CSV_PHONE_HEADER: &str = "phone";

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Io(std::io::Error),
    Encoding(std::string::FromUtf8Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "failed to write csv: {err}"),
            Self::Io(err) => write!(f, "failed to flush csv: {err}"),
            Self::Encoding(err) => write!(f, "csv output is not utf-8: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Flat number list output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Txt,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
        }
    }

    pub fn render<S: AsRef<str>>(self, numbers: &[S]) -> ExportResult<String> {
        match self {
            Self::Txt => Ok(render_txt(numbers)),
            Self::Csv => render_csv(numbers),
        }
    }
}

pub fn render_txt<S: AsRef<str>>(numbers: &[S]) -> String {
    numbers
        .iter()
        .map(|number| number.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
}

pub fn render_csv<S: AsRef<str>>(numbers: &[S]) -> ExportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record([CSV_PHONE_HEADER])?;
    for number in numbers {
        writer.write_record([number.as_ref()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    String::from_utf8(bytes).map_err(ExportError::Encoding)
}
