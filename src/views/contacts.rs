//! Contact directory list, detail panel and add/edit form.

use super::{avatar, field_error};
use crate::libs::contact::{Contact, ContactGroup};
use crate::libs::validation::{Field, FieldError};
use maud::{html, Markup};

/// Grouped directory. The selected contact is highlighted.
pub fn list(groups: &[ContactGroup], selected: Option<u64>) -> Markup {
    html! {
        @for group in groups {
            div.contact-group {
                h2 { (group.letter.to_string()) }
                hr;
                @for contact in &group.contacts {
                    div.contact.selected[selected == Some(contact.id)]
                        data-action="select-contact"
                        data-contact-id=(contact.id) {
                        span.avatar style={ "background-color:" (contact.color) ";" } { (contact.initials) }
                        div.contact-info {
                            span.name { (contact.name) }
                            span.email { (contact.email) }
                        }
                    }
                }
            }
        }
    }
}

pub fn details(contact: &Contact) -> Markup {
    html! {
        div.contact-details #"contact-details" data-contact-id=(contact.id) {
            div.contact-details-header."d-flex-y" {
                (avatar("avatar-details d-flex", &contact.initials, &contact.color))
                div {
                    h2 { (contact.name) }
                    div.contact-actions {
                        button #"edit-btn" data-action="show-edit-contact" { "Edit" }
                        button #"delete-btn" data-action="delete-contact" { "Delete" }
                    }
                }
            }
            h3 { "Contact Information" }
            p.label { "Email" }
            a.email href={ "mailto:" (contact.email) } { (contact.email) }
            p.label { "Phone" }
            p.phone { (contact.phone) }
        }
    }
}

/// Add form when `contact` is `None`, edit form otherwise.
pub fn form(contact: Option<&Contact>, errors: &[FieldError]) -> Markup {
    let (action, label) = match contact {
        Some(_) => ("save-contact", "Save"),
        None => ("add-contact", "Create contact"),
    };
    html! {
        form.contact-form autocomplete="off" {
            @if let Some(contact) = contact {
                (avatar("avatar-details d-flex", &contact.initials, &contact.color))
            }
            input #name type="text" placeholder="Name" value=[contact.map(|c| c.name.as_str())];
            (field_error(Field::Name, errors))
            input #email type="email" placeholder="Email" value=[contact.map(|c| c.email.as_str())];
            (field_error(Field::Email, errors))
            input #phone type="tel" placeholder="Phone" value=[contact.map(|c| c.phone.as_str())];
            (field_error(Field::Phone, errors))
            button type="submit" data-action=(action) { (label) }
        }
    }
}
