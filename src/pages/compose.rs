//! Add-task page, also embedded in the board's add-task overlay.

use super::{Navigation, Outcome};
use crate::api::{Gateway, JoinClient};
use crate::libs::config::UiConfig;
use crate::libs::contact::Contact;
use crate::libs::draft::TaskForm;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::libs::task::{Priority, Progress};
use crate::libs::transition::Notifier;
use crate::libs::validation::{Field, FieldError};
use crate::views;
use anyhow::Result;
use chrono::NaiveDate;
use maud::Markup;
use std::time::Duration;

pub struct TaskComposer<G> {
    client: JoinClient<G>,
    session: SessionStore,
    contacts: Vec<Contact>,
    form: TaskForm,
    progress: Progress,
    embedded: bool,
    errors: Vec<FieldError>,
    navigation: Option<Navigation>,
    pub notifier: Notifier,
}

impl<G: Gateway> TaskComposer<G> {
    /// `embedded` composers close the board overlay instead of navigating.
    pub fn new(client: JoinClient<G>, session: SessionStore, ui: &UiConfig, embedded: bool) -> Self {
        TaskComposer {
            client,
            session,
            contacts: Vec::new(),
            form: TaskForm::default(),
            progress: Progress::Todo,
            embedded,
            errors: Vec::new(),
            navigation: None,
            notifier: Notifier::new(ui.clone()),
        }
    }

    pub fn client(&self) -> &JoinClient<G> {
        &self.client
    }

    /// Loads contacts, selects medium priority and picks up the column
    /// handed over by the board (`todo` when none).
    pub async fn open(&mut self) -> Result<()> {
        self.contacts = self.client.contacts().await?;
        self.set_priority(Priority::Medium)?;
        self.progress = self.session.take_progress()?.unwrap_or_default();
        Ok(())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Field values entered by the user.
    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn search_assignees(&mut self, query: &str) {
        self.form.assignees.set_query(query);
    }

    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        self.form.assignees.filter(&self.contacts)
    }

    pub fn toggle_assignee(&mut self, contact_id: u64) {
        self.form.assignees.toggle(contact_id);
    }

    pub fn set_priority(&mut self, priority: Priority) -> Result<()> {
        self.form.priority = priority;
        self.session.set_selected_priority(priority)
    }

    pub fn add_subtask(&mut self, title: &str) -> bool {
        self.form.subtasks.add(title)
    }

    pub fn edit_subtask(&mut self, index: usize, title: &str) {
        self.form.subtasks.edit(index, title);
    }

    pub fn delete_subtask(&mut self, index: usize) {
        self.form.subtasks.delete(index);
    }

    /// Creates the task and its subtasks.
    ///
    /// Guests are stopped before validation. On success the "task added"
    /// popup starts, the form is cleared and [`TaskComposer::take_navigation`]
    /// yields the board (or the overlay close signal when embedded).
    pub async fn submit(&mut self, today: NaiveDate) -> Result<Outcome> {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionAddTask);
            return Ok(Outcome::Denied);
        }
        if let Err(errors) = self.form.validate(today) {
            self.errors = errors.clone();
            return Ok(Outcome::Invalid(errors));
        }
        let Some(data) = self.form.to_data(self.progress) else {
            let errors = vec![FieldError::new(Field::DueDate, Message::FieldRequired)];
            self.errors = errors.clone();
            return Ok(Outcome::Invalid(errors));
        };
        self.errors.clear();

        let task = self.client.create_task(&data).await?;
        for subtask in self.form.subtasks.items() {
            self.client.create_subtask(&subtask.for_task(task.id)).await?;
        }

        self.notifier.task_added();
        self.clear();
        self.navigation = Some(if self.embedded {
            Navigation::CloseAddTaskOverlay
        } else {
            Navigation::Board
        });
        Ok(Outcome::Saved)
    }

    /// Resets fields, selection, subtasks and priority.
    pub fn clear(&mut self) {
        self.form.clear();
        self.errors.clear();
    }

    pub fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }

    pub fn advance(&mut self, delta: Duration) {
        self.notifier.advance(delta);
    }

    pub fn render(&self, today: NaiveDate) -> Markup {
        views::compose::form(&self.form, &self.contacts, today, &self.errors, self.embedded)
    }
}
