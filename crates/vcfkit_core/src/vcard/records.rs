//! Raw record splitting for vCard chunking.

use crate::vcard::END_MARKER;

/// Splits `text` on `END:VCARD` and returns each non-empty record,
/// trimmed and re-terminated with `\nEND:VCARD`.
///
/// Content between records is kept as-is; a trailing fragment that is not
/// blank becomes a record of its own.
pub fn split_records(text: &str) -> Vec<String> {
    text.split(END_MARKER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| format!("{piece}\n{END_MARKER}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_records;

    #[test]
    fn splits_and_reterminates_records() {
        let text = "BEGIN:VCARD\nFN:A\nEND:VCARD\n\nBEGIN:VCARD\nFN:B\nEND:VCARD\n";
        let records = split_records(text);
        assert_eq!(
            records,
            vec![
                "BEGIN:VCARD\nFN:A\nEND:VCARD".to_string(),
                "BEGIN:VCARD\nFN:B\nEND:VCARD".to_string(),
            ]
        );
    }

    #[test]
    fn blank_text_has_no_records() {
        assert!(split_records(" \n\n").is_empty());
    }
}
