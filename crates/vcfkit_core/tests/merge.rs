use vcfkit_core::{extract_contacts, merge_vcards, Contact, MergeOptions};

const ALICE_A: &str = "BEGIN:VCARD\nVERSION:3.0\nN:Alice;;;\nFN:Alice\nTEL;TYPE=CELL:+1111111111\nEND:VCARD";
const ALICE_B: &str = "BEGIN:VCARD\nVERSION:3.0\nN:Alice;;;\nFN:Alice\nTEL;TYPE=CELL:+2222222222\nTEL;TYPE=CELL:+1111111111\nEND:VCARD";

fn options(merge_by_name: bool, dedupe_numbers: bool) -> MergeOptions {
    MergeOptions {
        merge_by_name,
        dedupe_numbers,
    }
}

#[test]
fn same_name_contacts_merge_into_one_sorted_record() {
    let merged = merge_vcards(&[ALICE_A, ALICE_B], &options(true, true));
    assert_eq!(
        merged,
        "BEGIN:VCARD\nVERSION:3.0\nN:Alice;;;\nFN:Alice\nTEL;TYPE=CELL:+1111111111\nTEL;TYPE=CELL:+2222222222\nEND:VCARD"
    );
}

#[test]
fn without_name_merge_dedupe_still_removes_repeated_numbers() {
    let merged = merge_vcards(&[ALICE_A, ALICE_B], &options(false, true));
    assert_eq!(
        extract_contacts(&merged),
        vec![
            Contact::new("Alice #1", vec!["+1111111111".to_string()]),
            Contact::new("Alice #2", vec!["+2222222222".to_string()]),
        ]
    );
}

#[test]
fn without_any_dedupe_numbers_repeat_across_contacts() {
    let merged = merge_vcards(&[ALICE_A, ALICE_B], &options(false, false));
    let contacts = extract_contacts(&merged);
    assert_eq!(contacts.len(), 2);
    assert_eq!(
        contacts[1].numbers,
        vec!["+1111111111".to_string(), "+2222222222".to_string()]
    );
}

#[test]
fn dedupe_keeps_number_on_first_contact_only() {
    let text = "BEGIN:VCARD\nFN:Zed\nTEL:+5\nEND:VCARD\nBEGIN:VCARD\nFN:Amy\nTEL:+5\nTEL:+6\nEND:VCARD\nBEGIN:VCARD\nFN:Bo\nTEL:+6\nEND:VCARD";
    let merged = merge_vcards(&[text], &options(true, true));
    assert_eq!(
        extract_contacts(&merged),
        vec![
            Contact::new("Zed", vec!["+5".to_string()]),
            Contact::new("Amy", vec!["+6".to_string()]),
        ]
    );
}

#[test]
fn numbers_sort_lexicographically_not_numerically() {
    let text = "BEGIN:VCARD\nFN:Al\nTEL:+9\nTEL:+10\nTEL:+100\nEND:VCARD";
    let merged = merge_vcards(&[text], &MergeOptions::default());
    assert_eq!(
        extract_contacts(&merged)[0].numbers,
        vec!["+10".to_string(), "+100".to_string(), "+9".to_string()]
    );
}

#[test]
fn merging_text_with_itself_is_idempotent() {
    let text = format!("{ALICE_B}\nBEGIN:VCARD\nFN:Bob\nTEL:+3333333333\nEND:VCARD");
    for by_name in [true, false] {
        let once = merge_vcards(&[text.as_str()], &options(by_name, true));
        let twice = merge_vcards(&[text.as_str(), text.as_str()], &options(by_name, true));
        assert_eq!(extract_contacts(&once), extract_contacts(&twice));
    }
}

#[test]
fn unnamed_and_empty_inputs_produce_empty_output() {
    let merged = merge_vcards(
        &["BEGIN:VCARD\nTEL:+1\nEND:VCARD", ""],
        &MergeOptions::default(),
    );
    assert!(merged.is_empty());
}
