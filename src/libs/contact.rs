//! Contact records, avatars and the alphabetical directory grouping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub color: String,
}

/// Contact fields as sent on create and replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub initials: String,
    pub color: String,
}

impl ContactData {
    /// New contact with a fresh avatar.
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        ContactData {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            initials: initials(name),
            color: random_color(),
        }
    }
}

impl Contact {
    /// Writable fields of this contact.
    pub fn data(&self) -> ContactData {
        ContactData {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            initials: self.initials.clone(),
            color: self.color.clone(),
        }
    }
}

/// First letters of the first two name tokens, uppercased.
///
/// `"anna maria schmidt"` gives `"AM"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// First letter of every name token, used for self-registered users.
pub fn full_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Random `#rrggbb` avatar color.
pub fn random_color() -> String {
    format!("#{:06x}", rand::random::<u32>() & 0xFF_FFFF)
}

/// Contacts sharing the same uppercase first letter.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactGroup {
    pub letter: char,
    pub contacts: Vec<Contact>,
}

/// Groups contacts by the uppercase first letter of their name.
///
/// Groups come out in ascending letter order. Members are ordered
/// case-insensitively, ties broken by the raw name. Contacts without a name
/// are left out.
pub fn group_contacts(contacts: &[Contact]) -> Vec<ContactGroup> {
    let mut groups: BTreeMap<char, Vec<Contact>> = BTreeMap::new();
    for contact in contacts {
        let Some(first) = contact.name.trim_start().chars().next() else {
            continue;
        };
        let letter = first.to_uppercase().next().unwrap_or(first);
        groups.entry(letter).or_default().push(contact.clone());
    }

    groups
        .into_iter()
        .map(|(letter, mut members)| {
            members.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.name.cmp(&b.name))
            });
            ContactGroup { letter, contacts: members }
        })
        .collect()
}

/// Looks up a contact by id.
pub fn find(contacts: &[Contact], id: u64) -> Option<&Contact> {
    contacts.iter().find(|c| c.id == id)
}
