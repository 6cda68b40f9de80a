//! Edit overlay of the board.

use super::Outcome;
use crate::api::{Gateway, JoinClient};
use crate::libs::contact::Contact;
use crate::libs::draft::TaskForm;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task};
use crate::libs::validation::{is_valid_due_date, Field, FieldError};
use crate::views;
use anyhow::Result;
use chrono::NaiveDate;
use maud::Markup;

/// Working copy of one task while its edit overlay is open.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEditor {
    task: Task,
    form: TaskForm,
    errors: Vec<FieldError>,
}

impl TaskEditor {
    pub fn new(task: &Task) -> Self {
        TaskEditor {
            task: task.clone(),
            form: TaskForm::from_task(task),
            errors: Vec::new(),
        }
    }

    pub fn task_id(&self) -> u64 {
        self.task.id
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn search_contacts(&mut self, query: &str) {
        self.form.assignees.set_query(query);
    }

    pub fn toggle_assignee(&mut self, contact_id: u64) {
        self.form.assignees.toggle(contact_id);
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.form.priority = priority;
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

    /// Title present and due date not before `today`.
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        self.form.can_submit(today)
    }

    fn check(&mut self, today: NaiveDate) -> bool {
        self.errors.clear();
        if self.form.title.trim().is_empty() {
            self.errors.push(FieldError::new(Field::Title, Message::FieldRequired));
        }
        match self.form.due_date {
            None => self.errors.push(FieldError::new(Field::DueDate, Message::FieldRequired)),
            Some(due) if !is_valid_due_date(due, today) => {
                self.errors.push(FieldError::new(Field::DueDate, Message::DueDateInPast))
            }
            Some(_) => {}
        }
        self.errors.is_empty()
    }

    /// Writes the edit back.
    ///
    /// Existing subtasks of the task are deleted and the drafts posted anew,
    /// then the task itself is replaced. Nothing is sent while the form is
    /// not submittable.
    pub async fn save<G: Gateway>(&mut self, client: &JoinClient<G>, today: NaiveDate) -> Result<Outcome> {
        if !self.check(today) {
            return Ok(Outcome::Invalid(self.errors.clone()));
        }
        let id = self.task.id;

        for stale in client.subtasks().await?.iter().filter(|s| s.task == Some(id)) {
            if let Some(subtask_id) = stale.id {
                client.delete_subtask(subtask_id).await?;
            }
        }
        let drafts: Vec<_> = self.form.subtasks.items().iter().map(|s| s.for_task(id)).collect();
        for draft in &drafts {
            client.create_subtask(draft).await?;
        }

        let mut task = self.task.clone();
        self.form.apply_to(&mut task);
        task.subtasks = drafts;
        client.replace_task(&task).await?;
        self.task = task;
        Ok(Outcome::Saved)
    }

    pub fn render(&self, contacts: &[Contact], today: NaiveDate) -> Markup {
        views::board::edit(self.task.id, &self.form, contacts, today, &self.errors)
    }
}
