//! Merge implementation over decoded contacts.

use crate::model::contact::Contact;
use crate::vcard::decode::extract_contacts;
use crate::vcard::push_record;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Merge behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeOptions {
    /// Combine contacts sharing an identical display name.
    pub merge_by_name: bool,
    /// Keep each number only on the first contact holding it.
    pub dedupe_numbers: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            merge_by_name: true,
            dedupe_numbers: true,
        }
    }
}

/// Merges contacts in iteration order.
///
/// Without `merge_by_name`, every contact is kept as its own entry named
/// `"{name} #{position}"`, `position` being its 1-based index in `contacts`.
pub fn merge_contacts<I>(contacts: I, options: &MergeOptions) -> Vec<Contact>
where
    I: IntoIterator<Item = Contact>,
{
    let mut merged: Vec<(String, BTreeSet<String>)> = Vec::new();
    let mut slot_by_name: HashMap<String, usize> = HashMap::new();

    for (position, contact) in contacts.into_iter().enumerate() {
        let Contact { name, numbers } = contact;
        let slot = if options.merge_by_name {
            match slot_by_name.get(&name) {
                Some(&slot) => slot,
                None => {
                    slot_by_name.insert(name.clone(), merged.len());
                    merged.push((name, BTreeSet::new()));
                    merged.len() - 1
                }
            }
        } else {
            merged.push((format!("{name} #{}", position + 1), BTreeSet::new()));
            merged.len() - 1
        };
        merged[slot].1.extend(numbers);
    }

    let mut claimed: HashSet<String> = HashSet::new();
    merged
        .into_iter()
        .filter_map(|(name, numbers)| {
            let numbers: Vec<String> = if options.dedupe_numbers {
                numbers
                    .into_iter()
                    .filter(|number| claimed.insert(number.clone()))
                    .collect()
            } else {
                numbers.into_iter().collect()
            };
            (!numbers.is_empty()).then(|| Contact::new(name, numbers))
        })
        .collect()
}

/// Renders contacts as `\n`-joined vCard 3.0 records, one `TEL` line per
/// number.
pub fn render_contacts(contacts: &[Contact]) -> String {
    let mut lines = Vec::new();
    for contact in contacts {
        push_record(
            &mut lines,
            &contact.name,
            contact.numbers.iter().map(String::as_str),
        );
    }
    lines.join("\n")
}

/// Decodes every text, merges the contacts and renders one vCard text.
pub fn merge_vcards<S: AsRef<str>>(texts: &[S], options: &MergeOptions) -> String {
    let decoded: Vec<Contact> = texts
        .iter()
        .flat_map(|text| extract_contacts(text.as_ref()))
        .collect();
    let decoded_count = decoded.len();
    let merged = merge_contacts(decoded, options);
    debug!(
        "event=merge_vcards module=merge status=ok inputs={} decoded={} merged={} by_name={} dedupe={}",
        texts.len(),
        decoded_count,
        merged.len(),
        options.merge_by_name,
        options.dedupe_numbers
    );
    render_contacts(&merged)
}
