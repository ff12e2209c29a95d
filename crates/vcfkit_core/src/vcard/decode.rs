//! vCard text to numbers and contacts.

use crate::model::contact::Contact;
use crate::vcard::{BEGIN_MARKER, END_MARKER};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TEL_MARKER: &str = "TEL";
const BYTE_ORDER_MARK: char = '\u{feff}';

static FN_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^FN(?:;[^:]*)?:(.*)$").expect("valid FN regex"));

/// How structural problems in vCard text are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMode {
    /// Drop unnamed records and ignore unbalanced markers.
    #[default]
    Permissive,
    /// Reject the whole text at the first structural problem.
    Strict,
}

/// Structural vCard errors reported in strict mode. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardError {
    FieldOutsideRecord { line: usize },
    NestedBegin { line: usize },
    EndWithoutBegin { line: usize },
    MissingName { line: usize },
    UnclosedRecord { line: usize },
}

impl Display for VCardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldOutsideRecord { line } => {
                write!(f, "line {line}: field appears outside BEGIN/END:VCARD")
            }
            Self::NestedBegin { line } => {
                write!(f, "line {line}: BEGIN:VCARD inside an open record")
            }
            Self::EndWithoutBegin { line } => {
                write!(f, "line {line}: END:VCARD without matching BEGIN:VCARD")
            }
            Self::MissingName { line } => {
                write!(f, "record starting at line {line} has no FN field")
            }
            Self::UnclosedRecord { line } => {
                write!(f, "record starting at line {line} is never closed")
            }
        }
    }
}

impl Error for VCardError {}

/// Returns the value of every `TEL` line, in order.
///
/// The value is whatever follows the last `:` on the line, trimmed.
/// Values are raw and empty values are dropped. Marker balance is not
/// checked.
pub fn extract_numbers(text: &str) -> Vec<String> {
    normalize_newlines(text)
        .lines()
        .filter_map(|line| tel_value(line.trim()))
        .map(str::to_string)
        .collect()
}

/// Extracts `(FN, TEL*)` contacts with permissive handling.
pub fn extract_contacts(text: &str) -> Vec<Contact> {
    extract_contacts_with(text, DecodeMode::Permissive).unwrap_or_default()
}

/// Extracts contacts using the requested decode mode.
///
/// # Errors
/// In `DecodeMode::Strict`, returns the first structural problem found.
pub fn extract_contacts_with(text: &str, mode: DecodeMode) -> Result<Vec<Contact>, VCardError> {
    let mut decoder = ContactDecoder::new(mode);
    for (index, line) in normalize_newlines(text).lines().enumerate() {
        decoder.feed(index + 1, line.trim())?;
    }
    decoder.finish()
}

struct ContactDecoder {
    mode: DecodeMode,
    name: Option<String>,
    numbers: Vec<String>,
    open_since: Option<usize>,
    contacts: Vec<Contact>,
}

impl ContactDecoder {
    fn new(mode: DecodeMode) -> Self {
        Self {
            mode,
            name: None,
            numbers: Vec::new(),
            open_since: None,
            contacts: Vec::new(),
        }
    }

    fn strict(&self) -> bool {
        self.mode == DecodeMode::Strict
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), VCardError> {
        if line.eq_ignore_ascii_case(BEGIN_MARKER) {
            if self.strict() && self.open_since.is_some() {
                return Err(VCardError::NestedBegin { line: line_no });
            }
            self.open_since = Some(line_no);
            return Ok(());
        }

        if line.eq_ignore_ascii_case(END_MARKER) {
            return self.close(line_no);
        }

        if let Some(value) = tel_value(line) {
            self.require_open(line_no)?;
            self.numbers.push(value.to_string());
            return Ok(());
        }

        if let Some(captures) = FN_LINE_RE.captures(line) {
            self.require_open(line_no)?;
            let name = captures.get(1).map_or("", |m| m.as_str()).trim();
            self.name = (!name.is_empty()).then(|| name.to_string());
        }
        Ok(())
    }

    fn require_open(&self, line_no: usize) -> Result<(), VCardError> {
        if self.strict() && self.open_since.is_none() {
            return Err(VCardError::FieldOutsideRecord { line: line_no });
        }
        Ok(())
    }

    fn close(&mut self, line_no: usize) -> Result<(), VCardError> {
        let opened = self.open_since.take();
        if self.strict() {
            let Some(start) = opened else {
                return Err(VCardError::EndWithoutBegin { line: line_no });
            };
            if self.name.is_none() {
                return Err(VCardError::MissingName { line: start });
            }
        }

        let numbers = std::mem::take(&mut self.numbers);
        if let Some(name) = self.name.take() {
            self.contacts.push(Contact::new(name, numbers));
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Contact>, VCardError> {
        if self.strict() {
            if let Some(start) = self.open_since {
                return Err(VCardError::UnclosedRecord { line: start });
            }
        }
        Ok(self.contacts)
    }
}

fn normalize_newlines(text: &str) -> String {
    text.trim_start_matches(BYTE_ORDER_MARK)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

fn tel_value(line: &str) -> Option<&str> {
    if !line.starts_with(TEL_MARKER) {
        return None;
    }
    let value = line.rsplit(':').next().unwrap_or(line).trim();
    (!value.is_empty()).then_some(value)
}
