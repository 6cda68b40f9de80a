//! Contact directory page.

use super::Outcome;
use crate::api::{answer_id, Gateway, JoinClient};
use crate::libs::config::UiConfig;
use crate::libs::contact::{self, group_contacts, Contact, ContactData, ContactGroup};
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::libs::transition::{Notifier, Transition};
use crate::libs::validation::{validate_contact, FieldError};
use crate::msg_info;
use crate::views;
use anyhow::Result;
use maud::Markup;
use serde_json::Value;

/// Which form the contact overlay currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactForm {
    Add,
    Edit,
}

pub struct ContactDirectory<G> {
    client: JoinClient<G>,
    session: SessionStore,
    contacts: Vec<Contact>,
    groups: Vec<ContactGroup>,
    selected: Option<u64>,
    form: Option<ContactForm>,
    errors: Vec<FieldError>,
    pub overlay: Transition,
    pub details: Transition,
    pub notifier: Notifier,
}

impl<G: Gateway> ContactDirectory<G> {
    pub fn new(client: JoinClient<G>, session: SessionStore, ui: &UiConfig) -> Self {
        ContactDirectory {
            client,
            session,
            contacts: Vec::new(),
            groups: Vec::new(),
            selected: None,
            form: None,
            errors: Vec::new(),
            overlay: Transition::overlay(ui),
            details: Transition::overlay(ui),
            notifier: Notifier::new(ui.clone()),
        }
    }

    pub fn client(&self) -> &JoinClient<G> {
        &self.client
    }

    /// Fetches all contacts and rebuilds the letter groups.
    pub async fn load_contacts(&mut self) -> Result<()> {
        self.contacts = self.client.contacts().await?;
        self.groups = group_contacts(&self.contacts);
        if let Some(id) = self.selected {
            if contact::find(&self.contacts, id).is_none() {
                self.close_details();
            }
        }
        Ok(())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn groups(&self) -> &[ContactGroup] {
        &self.groups
    }

    pub fn selected(&self) -> Option<&Contact> {
        self.selected.and_then(|id| contact::find(&self.contacts, id))
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn form(&self) -> Option<ContactForm> {
        self.form
    }

    pub fn select_contact(&mut self, id: u64) {
        if contact::find(&self.contacts, id).is_some() {
            self.selected = Some(id);
            self.details.show();
        }
    }

    pub fn close_details(&mut self) {
        self.selected = None;
        self.details.hide();
    }

    pub fn open_add_form(&mut self) -> bool {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionAddContact);
            return false;
        }
        self.open_form(ContactForm::Add);
        true
    }

    pub fn open_edit_form(&mut self) -> bool {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionEditContact);
            return false;
        }
        if self.selected().is_none() {
            return false;
        }
        self.open_form(ContactForm::Edit);
        true
    }

    fn open_form(&mut self, form: ContactForm) {
        self.errors.clear();
        self.form = Some(form);
        self.overlay.show();
    }

    pub fn close_form(&mut self) {
        self.errors.clear();
        self.form = None;
        self.overlay.hide();
    }

    /// Validates and stores a new contact with a fresh avatar.
    pub async fn add_contact(&mut self, name: &str, email: &str, phone: &str) -> Result<Outcome> {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionAddContact);
            return Ok(Outcome::Denied);
        }
        let (name, email, phone) = (name.trim(), email.trim(), phone.trim());
        if let Err(errors) = validate_contact(name, email, phone) {
            self.errors = errors.clone();
            return Ok(Outcome::Invalid(errors));
        }

        let answer = self.client.create_contact(&ContactData::new(name, email, phone)).await?;
        if answer_id(&answer).is_none() {
            self.refused(answer);
            return Ok(Outcome::Failed);
        }
        self.close_form();
        self.load_contacts().await?;
        self.notifier.success(Message::ContactAdded);
        Ok(Outcome::Saved)
    }

    /// Stores the edited fields of the selected contact.
    ///
    /// The backend id is looked up by the contact's stored email in a fresh
    /// contact list. Initials and color are regenerated only when the name
    /// changed. Tasks reference contacts by id, so nothing else is written.
    pub async fn edit_contact(&mut self, name: &str, email: &str, phone: &str) -> Result<Outcome> {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionEditContact);
            return Ok(Outcome::Denied);
        }
        let Some(original) = self.selected().cloned() else {
            return Ok(Outcome::Failed);
        };
        let (name, email, phone) = (name.trim(), email.trim(), phone.trim());
        if let Err(errors) = validate_contact(name, email, phone) {
            self.errors = errors.clone();
            return Ok(Outcome::Invalid(errors));
        }

        let Some(id) = self.backend_id(&original.email).await? else {
            self.notifier.warning(Message::ContactNotFound(original.email));
            return Ok(Outcome::Failed);
        };

        let mut data = original.data();
        if data.name != name {
            data = ContactData::new(name, email, phone);
        } else {
            data.email = email.to_string();
            data.phone = phone.to_string();
        }
        let answer = self.client.replace_contact(id, &data).await?;
        if answer_id(&answer).is_none() {
            self.refused(answer);
            return Ok(Outcome::Failed);
        }

        self.close_form();
        self.load_contacts().await?;
        self.selected = Some(id);
        self.notifier.success(Message::ContactUpdated);
        Ok(Outcome::Saved)
    }

    /// Deletes the selected contact and removes it from every task.
    pub async fn delete_contact(&mut self) -> Result<Outcome> {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionDeleteContact);
            return Ok(Outcome::Denied);
        }
        let Some(email) = self.selected().map(|c| c.email.clone()) else {
            return Ok(Outcome::Failed);
        };
        let Some(id) = self.backend_id(&email).await? else {
            self.notifier.warning(Message::ContactNotFound(email));
            return Ok(Outcome::Failed);
        };

        if !self.client.delete_contact(id).await? {
            self.notifier.warning(Message::NoPermissionDeleteContact);
            return Ok(Outcome::Failed);
        }
        self.unassign_everywhere(id).await?;

        self.close_details();
        self.load_contacts().await?;
        self.notifier.success(Message::ContactDeleted);
        Ok(Outcome::Saved)
    }

    /// Keeps the form open and tells the user the backend did not store the contact.
    fn refused(&mut self, answer: Value) {
        tracing::warn!(%answer, "{}", Message::ContactNotSaved);
        self.notifier.warning(Message::ContactNotSaved);
    }

    async fn backend_id(&self, email: &str) -> Result<Option<u64>> {
        let contacts = self.client.contacts().await?;
        Ok(contacts.iter().find(|c| c.email == email).map(|c| c.id))
    }

    /// Patches the assignee list of every task that still references `contact_id`.
    async fn unassign_everywhere(&self, contact_id: u64) -> Result<usize> {
        let tasks = self.client.tasks().await?;
        let mut patched = 0;
        for task in tasks.iter().filter(|t| t.is_assigned(contact_id)) {
            let remaining: Vec<u64> = task.assigned_to.iter().copied().filter(|id| *id != contact_id).collect();
            self.client.patch_task_assignees(task.id, &remaining).await?;
            patched += 1;
        }
        if patched > 0 {
            msg_info!(Message::ContactRemovedFromTasks(patched));
        }
        Ok(patched)
    }

    pub fn render_list(&self) -> Markup {
        views::contacts::list(&self.groups, self.selected)
    }

    pub fn render_details(&self) -> Option<Markup> {
        self.selected().map(views::contacts::details)
    }

    pub fn render_form(&self) -> Option<Markup> {
        let form = self.form?;
        let contact = match form {
            ContactForm::Add => None,
            ContactForm::Edit => self.selected(),
        };
        Some(views::contacts::form(contact, &self.errors))
    }
}
