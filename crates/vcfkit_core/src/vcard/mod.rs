//! vCard 3.0 text codec.
//!
//! # Responsibility
//! - Encode number batches into fixed six-line vCard records.
//! - Decode vCard text back into raw numbers or named contacts.
//! - Split raw vCard text into record strings.
//!
//! # Invariants
//! - Encoded records are `\n`-joined with no blank separator lines.
//! - Decoded numbers are returned raw; canonicalization is the caller's job.
//! - Permissive decoding never fails; strict decoding reports the line.

pub mod decode;
pub mod encode;
pub mod records;

pub(crate) const BEGIN_MARKER: &str = "BEGIN:VCARD";
pub(crate) const END_MARKER: &str = "END:VCARD";
pub(crate) const VERSION_LINE: &str = "VERSION:3.0";
pub(crate) const TEL_PREFIX: &str = "TEL;TYPE=CELL:";

/// Appends one record with the given display name and numbers.
pub(crate) fn push_record<'a, I>(lines: &mut Vec<String>, name: &str, numbers: I)
where
    I: IntoIterator<Item = &'a str>,
{
    lines.push(BEGIN_MARKER.to_string());
    lines.push(VERSION_LINE.to_string());
    lines.push(format!("N:{name};;;"));
    lines.push(format!("FN:{name}"));
    for number in numbers {
        lines.push(format!("{TEL_PREFIX}{number}"));
    }
    lines.push(END_MARKER.to_string());
}
