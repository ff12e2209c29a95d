//! Source ingestion.

use crate::vcard::decode::extract_numbers;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BYTE_ORDER_MARK: char = '\u{feff}';

pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while turning a source into raw tokens.
#[derive(Debug)]
pub enum SourceError {
    /// Named column not present in the CSV header row.
    MissingColumn(String),
    /// Column index beyond the header width.
    ColumnOutOfRange { index: usize, width: usize },
    Csv(csv::Error),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn(name) => write!(f, "csv column not found: `{name}`"),
            Self::ColumnOutOfRange { index, width } => write!(
                f,
                "csv column index {index} is out of range for {width} columns"
            ),
            Self::Csv(err) => write!(f, "invalid csv input: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for SourceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Which CSV column holds phone numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Header name, matched case-insensitively after trimming.
    Name(String),
    /// Zero-based column position.
    Index(usize),
}

/// One input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// One token per line of the trimmed text.
    Text(String),
    /// One token per record from the selected column; first row is a header.
    Csv {
        text: String,
        column: ColumnSelector,
    },
    /// One token per `TEL` line.
    VCard(String),
}

impl Source {
    /// Returns the raw tokens of this source, in document order.
    pub fn tokens(&self) -> SourceResult<Vec<String>> {
        match self {
            Self::Text(text) => Ok(text_tokens(text)),
            Self::Csv { text, column } => csv_tokens(text, column),
            Self::VCard(text) => Ok(extract_numbers(text)),
        }
    }
}

/// File sources plus optional manual text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceSet {
    files: Vec<Source>,
    manual: Option<String>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_file(&mut self, source: Source) {
        self.files.push(source);
    }

    pub fn with_file(mut self, source: Source) -> Self {
        self.push_file(source);
        self
    }

    /// Sets pasted text. Blank text is ignored.
    pub fn set_manual(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.manual = (!text.trim().is_empty()).then_some(text);
    }

    pub fn with_manual(mut self, text: impl Into<String>) -> Self {
        self.set_manual(text);
        self
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn has_manual(&self) -> bool {
        self.manual.is_some()
    }

    /// Concatenates tokens from every file, then the manual text.
    ///
    /// # Errors
    /// Returns the first source error; no partial token list is returned.
    pub fn tokens(&self) -> SourceResult<Vec<String>> {
        let mut tokens = Vec::new();
        for source in &self.files {
            tokens.extend(source.tokens()?);
        }
        if let Some(manual) = &self.manual {
            tokens.extend(text_tokens(manual));
        }
        Ok(tokens)
    }
}

fn text_tokens(text: &str) -> Vec<String> {
    let trimmed = text.trim_start_matches(BYTE_ORDER_MARK).trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(str::to_string).collect()
}

fn csv_tokens(text: &str, column: &ColumnSelector) -> SourceResult<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let index = match column {
        ColumnSelector::Name(name) => headers
            .iter()
            .position(|header| {
                header
                    .trim_start_matches(BYTE_ORDER_MARK)
                    .trim()
                    .eq_ignore_ascii_case(name.trim())
            })
            .ok_or_else(|| SourceError::MissingColumn(name.clone()))?,
        ColumnSelector::Index(index) => {
            if *index >= headers.len() {
                return Err(SourceError::ColumnOutOfRange {
                    index: *index,
                    width: headers.len(),
                });
            }
            *index
        }
    };

    let mut tokens = Vec::new();
    for record in reader.records() {
        let record = record?;
        tokens.push(record.get(index).unwrap_or("").to_string());
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::{text_tokens, ColumnSelector, Source, SourceError};

    #[test]
    fn text_tokens_keep_interior_blank_lines() {
        assert_eq!(
            text_tokens("\n+1\n\n+2\n"),
            vec!["+1".to_string(), String::new(), "+2".to_string()]
        );
        assert!(text_tokens("  \n ").is_empty());
    }

    #[test]
    fn csv_selects_column_by_name_case_insensitively() {
        let source = Source::Csv {
            text: "name,Phone\nAnn,+1 201 555 0123\nBen,\n".to_string(),
            column: ColumnSelector::Name("phone".to_string()),
        };
        assert_eq!(
            source.tokens().unwrap(),
            vec!["+1 201 555 0123".to_string(), String::new()]
        );
    }

    #[test]
    fn csv_reports_missing_column() {
        let source = Source::Csv {
            text: "name,mobile\nAnn,1\n".to_string(),
            column: ColumnSelector::Name("phone".to_string()),
        };
        let err = source.tokens().unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn(name) if name == "phone"));
    }

    #[test]
    fn csv_rejects_out_of_range_index() {
        let source = Source::Csv {
            text: "phone\n1\n".to_string(),
            column: ColumnSelector::Index(3),
        };
        let err = source.tokens().unwrap_err();
        assert!(matches!(
            err,
            SourceError::ColumnOutOfRange { index: 3, width: 1 }
        ));
    }
}
