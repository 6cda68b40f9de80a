//! HTML fragments for the Join pages.
//!
//! Fragments are built with `maud`, so every interpolated value is escaped.
//! Interactive elements carry `data-action` plus the ids they act on
//! (`data-task-id`, `data-contact-id`, `data-progress`, `data-index`); the
//! host maps those onto controller calls.

use crate::libs::contact::{self, Contact};
use crate::libs::transition::{Notifier, PopupKind};
use crate::libs::validation::{Field, FieldError};
use maud::{html, Markup};

pub mod board;
pub mod compose;
pub mod contacts;
pub mod summary;

/// Round avatar with initials on the contact color.
pub fn avatar(class: &str, initials: &str, color: &str) -> Markup {
    html! {
        div class=(class) style={ "background-color:" (color) ";" } { (initials) }
    }
}

/// Contacts behind `ids`, skipping ids that no longer exist.
pub fn resolve<'a>(ids: &[u64], contacts: &'a [Contact]) -> Vec<&'a Contact> {
    ids.iter().filter_map(|id| contact::find(contacts, *id)).collect()
}

/// Inline error text of `field`, hidden when the field is valid.
pub fn field_error(field: Field, errors: &[FieldError]) -> Markup {
    let error = errors.iter().find(|e| e.field == field);
    html! {
        @match error {
            Some(error) => {
                div.error id=(field.error_id()) { (error.message.to_string()) }
            }
            None => {
                div.error."d-none" id=(field.error_id()) {}
            }
        }
    }
}

/// Popups of a page, newest last.
pub fn popups(notifier: &Notifier) -> Markup {
    html! {
        @for popup in notifier.popups() {
            @let kind = match popup.kind {
                PopupKind::Success => "popup-success",
                PopupKind::Warning => "popup-warning",
            };
            div class={ "popup " (kind) " " (popup.transition.phase().css_class()) } {
                (popup.message.to_string())
            }
        }
    }
}
