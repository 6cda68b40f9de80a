//! Editable state shared by the composer and the board's edit overlay:
//! the assignee picker, the draft subtasks and the form holding both.

use crate::libs::contact::{self, Contact};
use crate::libs::task::{Priority, Progress, Subtask, Task, TaskData};
use crate::libs::validation::{self, FieldError};
use chrono::NaiveDate;

/// Avatars shown under the assignee input before the "+N" badge.
pub const MAX_SELECTED_AVATARS: usize = 7;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssigneePicker {
    query: String,
    selected: Vec<u64>,
}

impl AssigneePicker {
    pub fn with_selected(selected: Vec<u64>) -> Self {
        AssigneePicker {
            query: String::new(),
            selected,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_lowercase();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Contacts whose name contains the query, ignoring case.
    pub fn filter<'a>(&self, contacts: &'a [Contact]) -> Vec<&'a Contact> {
        contacts
            .iter()
            .filter(|c| self.query.is_empty() || c.name.to_lowercase().contains(&self.query))
            .collect()
    }

    pub fn toggle(&mut self, contact_id: u64) {
        if let Some(pos) = self.selected.iter().position(|id| *id == contact_id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(contact_id);
        }
    }

    pub fn is_selected(&self, contact_id: u64) -> bool {
        self.selected.contains(&contact_id)
    }

    pub fn selected(&self) -> &[u64] {
        &self.selected
    }

    /// Selected contacts to draw as avatars and how many are hidden behind
    /// the "+N" badge. Ids without a contact are skipped.
    pub fn avatars<'a>(&self, contacts: &'a [Contact]) -> (Vec<&'a Contact>, usize) {
        let resolved: Vec<&Contact> = self.selected.iter().filter_map(|id| contact::find(contacts, *id)).collect();
        let overflow = resolved.len().saturating_sub(MAX_SELECTED_AVATARS);
        (resolved.into_iter().take(MAX_SELECTED_AVATARS).collect(), overflow)
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubtaskDrafts {
    items: Vec<Subtask>,
}

impl SubtaskDrafts {
    pub fn from_subtasks(subtasks: &[Subtask]) -> Self {
        SubtaskDrafts {
            items: subtasks.to_vec(),
        }
    }

    /// Appends a trimmed subtask. Blank input is ignored.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.items.push(Subtask::new(title));
        true
    }

    /// Renames the subtask at `index`; a blank title removes it.
    pub fn edit(&mut self, index: usize, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.delete(index);
        } else if let Some(item) = self.items.get_mut(index) {
            item.title = title.to_string();
        }
    }

    pub fn delete(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn items(&self) -> &[Subtask] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Field values of the add-task form and the board's edit overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// `None` while the date input is empty.
    pub due_date: Option<NaiveDate>,
    pub category: String,
    pub priority: Priority,
    pub assignees: AssigneePicker,
    pub subtasks: SubtaskDrafts,
}

impl TaskForm {
    /// Form prefilled with a copy of `task`.
    pub fn from_task(task: &Task) -> Self {
        TaskForm {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: Some(task.due_date),
            category: task.category.clone(),
            priority: task.priority,
            assignees: AssigneePicker::with_selected(task.assigned_to.clone()),
            subtasks: SubtaskDrafts::from_subtasks(&task.subtasks),
        }
    }

    /// Parses the value of a `<input type="date">`; blank or malformed input clears it.
    pub fn set_due_date(&mut self, value: &str) {
        self.due_date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok();
    }

    /// Required fields of the composer: title, due date and category.
    pub fn validate(&self, today: NaiveDate) -> Result<(), Vec<FieldError>> {
        validation::validate_task(&self.title, self.due_date, &self.category, today)
    }

    /// Edit overlay gate: non-blank title and a due date from today on.
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        !self.title.trim().is_empty() && self.due_date.is_some_and(|due| validation::is_valid_due_date(due, today))
    }

    /// Task body for the backend, `None` without a due date.
    pub fn to_data(&self, progress: Progress) -> Option<TaskData> {
        Some(TaskData {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            due_date: self.due_date?,
            priority: self.priority,
            category: self.category.clone(),
            progress,
            assigned_to: self.assignees.selected().to_vec(),
        })
    }

    /// Writes the edited fields back into `task`. Category and progress stay.
    pub fn apply_to(&self, task: &mut Task) {
        task.title = self.title.trim().to_string();
        task.description = self.description.trim().to_string();
        if let Some(due) = self.due_date {
            task.due_date = due;
        }
        task.priority = self.priority;
        task.assigned_to = self.assignees.selected().to_vec();
        task.subtasks = self.subtasks.items().to_vec();
    }

    pub fn clear(&mut self) {
        *self = TaskForm::default();
    }
}
