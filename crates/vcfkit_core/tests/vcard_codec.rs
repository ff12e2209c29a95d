use vcfkit_core::{
    encode_batch, encode_vcard, extract_contacts, extract_contacts_with, extract_numbers,
    normalize, Contact, DecodeMode, EncodeSettings, VCardError,
};

fn settings(name_prefix: &str, file_prefix: &str, start: u32, batch_size: usize) -> EncodeSettings {
    EncodeSettings {
        name_prefix: name_prefix.to_string(),
        file_prefix: file_prefix.to_string(),
        start_set_number: start,
        batch_size,
    }
}

fn synthetic_numbers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("+1201555{:04}", i)).collect()
}

#[test]
fn single_number_round_trips_through_encode_and_extract() {
    let number = normalize("+44 7400 123456").unwrap();
    let bundle = encode_vcard(&[number.clone()], &settings("C", "F", 1, 1)).unwrap();

    let text = bundle.get("F 1").unwrap();
    assert_eq!(extract_numbers(text), vec![number.into_string()]);
}

#[test]
fn batch_of_one_hundred_pads_to_three_digits() {
    let numbers = synthetic_numbers(100);
    let text = encode_batch(&numbers, "Admin", 2);
    let names: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("FN:"))
        .collect();

    assert_eq!(names.len(), 100);
    assert_eq!(names[0], "Admin 2 001");
    assert_eq!(names[9], "Admin 2 010");
    assert_eq!(names[99], "Admin 2 100");
}

#[test]
fn batch_of_five_pads_to_one_digit() {
    let numbers = synthetic_numbers(5);
    let text = encode_batch(&numbers, "Navy", 1);
    let names: Vec<&str> = text
        .lines()
        .filter_map(|line| line.strip_prefix("FN:"))
        .collect();
    assert_eq!(
        names,
        vec!["Navy 1 1", "Navy 1 2", "Navy 1 3", "Navy 1 4", "Navy 1 5"]
    );
}

#[test]
fn encode_vcard_names_units_by_file_prefix_and_set() {
    let numbers = synthetic_numbers(120);
    let bundle = encode_vcard(&numbers, &settings("General", "general_file", 3, 50)).unwrap();

    assert_eq!(
        bundle.names().collect::<Vec<_>>(),
        vec!["general_file 3", "general_file 4", "general_file 5"]
    );

    let last = bundle.get("general_file 5").unwrap();
    assert_eq!(last.lines().count(), 20 * 6);
    assert!(last.contains("FN:General 5 01\n"));
    assert!(last.contains("FN:General 5 20\n"));
    assert!(!last.contains("\n\n"));
    assert_eq!(extract_numbers(last), numbers[100..].to_vec());
}

#[test]
fn encode_vcard_rejects_zero_batch_size() {
    let numbers = synthetic_numbers(3);
    assert!(encode_vcard(&numbers, &settings("C", "F", 1, 0)).is_err());
}

#[test]
fn extract_numbers_handles_crlf_and_tel_variants() {
    let text = "BEGIN:VCARD\r\nFN:Ann\r\n  TEL;TYPE=CELL: +1 201 555 0123 \r\nTEL;VALUE=uri:tel:+447400123456\r\nTEL:\r\nEND:VCARD\r\n";
    assert_eq!(
        extract_numbers(text),
        vec!["+1 201 555 0123".to_string(), "+447400123456".to_string()]
    );
}

#[test]
fn extract_numbers_ignores_marker_balance() {
    let text = "TEL:+1\nEND:VCARD\nTEL;TYPE=CELL:+2";
    assert_eq!(extract_numbers(text), vec!["+1".to_string(), "+2".to_string()]);
}

#[test]
fn extract_contacts_pairs_names_with_numbers() {
    let text = "BEGIN:VCARD\nVERSION:3.0\nFN:Alice\nTEL;TYPE=CELL:+1111111111\nTEL;TYPE=HOME:+2222222222\nEND:VCARD\nBEGIN:VCARD\nFN;CHARSET=UTF-8:Bob\nTEL:+3333333333\nEND:VCARD";
    assert_eq!(
        extract_contacts(text),
        vec![
            Contact::new(
                "Alice",
                vec!["+1111111111".to_string(), "+2222222222".to_string()]
            ),
            Contact::new("Bob", vec!["+3333333333".to_string()]),
        ]
    );
}

#[test]
fn unnamed_records_are_dropped_permissively() {
    let text = "BEGIN:VCARD\nTEL:+1\nEND:VCARD\nBEGIN:VCARD\nFN:Kept\nTEL:+2\nEND:VCARD";
    assert_eq!(
        extract_contacts(text),
        vec![Contact::new("Kept", vec!["+2".to_string()])]
    );
}

#[test]
fn strict_decode_reports_structural_problems() {
    assert_eq!(
        extract_contacts_with("TEL:+1\n", DecodeMode::Strict).unwrap_err(),
        VCardError::FieldOutsideRecord { line: 1 }
    );
    assert_eq!(
        extract_contacts_with("BEGIN:VCARD\nTEL:+1\nEND:VCARD", DecodeMode::Strict).unwrap_err(),
        VCardError::MissingName { line: 1 }
    );
    assert_eq!(
        extract_contacts_with("BEGIN:VCARD\nBEGIN:VCARD\n", DecodeMode::Strict).unwrap_err(),
        VCardError::NestedBegin { line: 2 }
    );
    assert_eq!(
        extract_contacts_with("FN:A\n", DecodeMode::Strict).unwrap_err(),
        VCardError::FieldOutsideRecord { line: 1 }
    );
    assert_eq!(
        extract_contacts_with("BEGIN:VCARD\nFN:A\nEND:VCARD\nEND:VCARD", DecodeMode::Strict)
            .unwrap_err(),
        VCardError::EndWithoutBegin { line: 4 }
    );
    assert_eq!(
        extract_contacts_with("BEGIN:VCARD\nFN:A\n", DecodeMode::Strict).unwrap_err(),
        VCardError::UnclosedRecord { line: 1 }
    );
}

#[test]
fn strict_decode_accepts_encoder_output() {
    let numbers = synthetic_numbers(3);
    let text = encode_batch(&numbers, "C", 1);
    let contacts = extract_contacts_with(&text, DecodeMode::Strict).unwrap();
    assert_eq!(contacts, extract_contacts(&text));
    assert_eq!(contacts[2].name, "C 1 3");
}

#[test]
fn byte_order_mark_before_first_record_is_ignored() {
    let text = "\u{feff}BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Alice\r\nTEL;TYPE=CELL:+12015550123\r\nEND:VCARD\r\n";
    let expected = vec![Contact::new("Alice", vec!["+12015550123".to_string()])];

    assert_eq!(extract_contacts_with(text, DecodeMode::Strict).unwrap(), expected);
    assert_eq!(extract_contacts(text), expected);
    assert_eq!(extract_numbers(text), vec!["+12015550123".to_string()]);
}
