//! Kanban board page.
//!
//! Holds the loaded tasks and contacts, the sticky search filter, the
//! drag-and-drop state, the open move-to menu and the detail, edit and
//! add-task overlays.

use super::edit::TaskEditor;
use super::Outcome;
use crate::api::{Gateway, JoinClient};
use crate::libs::config::UiConfig;
use crate::libs::contact::Contact;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::libs::task::{Progress, Task};
use crate::libs::transition::{Notifier, Transition};
use crate::views::{self, board::CardContext};
use crate::{msg_debug, msg_error};
use anyhow::Result;
use chrono::NaiveDate;
use maud::{html, Markup};
use std::time::Duration;

pub struct Board<G> {
    client: JoinClient<G>,
    session: SessionStore,
    tasks: Vec<Task>,
    contacts: Vec<Contact>,
    /// Lowercase search text; `None` shows every task.
    search: Option<String>,
    dragged: Option<u64>,
    highlighted: Option<Progress>,
    open_menu: Option<u64>,
    detail: Option<u64>,
    editor: Option<TaskEditor>,
    pub detail_overlay: Transition,
    pub edit_overlay: Transition,
    pub add_task_overlay: Transition,
    pub notifier: Notifier,
}

impl<G: Gateway> Board<G> {
    pub fn new(client: JoinClient<G>, session: SessionStore, ui: &UiConfig) -> Self {
        Board {
            client,
            session,
            tasks: Vec::new(),
            contacts: Vec::new(),
            search: None,
            dragged: None,
            highlighted: None,
            open_menu: None,
            detail: None,
            editor: None,
            detail_overlay: Transition::overlay(ui),
            edit_overlay: Transition::overlay(ui),
            add_task_overlay: Transition::overlay(ui),
            notifier: Notifier::new(ui.clone()),
        }
    }

    pub fn client(&self) -> &JoinClient<G> {
        &self.client
    }

    /// Loads tasks, then contacts.
    pub async fn load(&mut self) -> Result<()> {
        self.tasks = self.client.tasks().await?;
        self.contacts = self.client.contacts().await?;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // --- search ---

    /// Filters by title or description, ignoring case. Blank input clears
    /// the filter; otherwise it stays active across reloads and moves.
    pub fn search(&mut self, text: &str) {
        let text = text.trim();
        self.search = (!text.is_empty()).then(|| text.to_lowercase());
    }

    pub fn search_query(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Tasks matching the active search, `None` without one.
    pub fn search_results(&self) -> Option<Vec<&Task>> {
        let needle = self.search.as_deref()?;
        Some(self.tasks.iter().filter(|t| t.matches(needle)).collect())
    }

    /// Tasks of one column after the search filter.
    pub fn column_tasks(&self, progress: Progress) -> Vec<&Task> {
        let source = self.search_results().unwrap_or_else(|| self.tasks.iter().collect());
        source.into_iter().filter(|t| t.progress == progress).collect()
    }

    // --- drag and drop ---

    pub fn start_dragging(&mut self, id: u64) {
        self.dragged = Some(id);
    }

    pub fn dragged(&self) -> Option<u64> {
        self.dragged
    }

    pub fn highlight(&mut self, progress: Progress) {
        self.highlighted = Some(progress);
    }

    pub fn remove_highlight(&mut self, progress: Progress) {
        if self.highlighted == Some(progress) {
            self.highlighted = None;
        }
    }

    pub fn highlighted(&self) -> Option<Progress> {
        self.highlighted
    }

    /// Drops the dragged task on `progress`. `false` when nothing was dragged.
    pub async fn drop_on(&mut self, progress: Progress) -> Result<bool> {
        self.highlighted = None;
        let Some(id) = self.dragged.take() else {
            return Ok(false);
        };
        self.persist_progress(id, progress).await
    }

    /// Move-to menu path of [`Board::drop_on`].
    pub async fn move_task(&mut self, id: u64, progress: Progress) -> Result<bool> {
        self.open_menu = None;
        self.persist_progress(id, progress).await
    }

    /// Stores the moved task; the board changes only once the backend took it.
    async fn persist_progress(&mut self, id: u64, progress: Progress) -> Result<bool> {
        let Some(mut moved) = self.task(id).cloned() else {
            msg_error!(Message::TaskNotFound(id));
            return Ok(false);
        };
        moved.progress = progress;
        self.client.replace_task(&moved).await?;
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.progress = progress;
        }
        msg_debug!(Message::TaskMoved { id, progress });
        Ok(true)
    }

    /// Opens the move-to menu of `id`, closing any other one.
    pub fn toggle_move_menu(&mut self, id: u64) {
        self.open_menu = if self.open_menu == Some(id) { None } else { Some(id) };
    }

    pub fn open_menu(&self) -> Option<u64> {
        self.open_menu
    }

    // --- detail overlay ---

    pub fn show_detail(&mut self, id: u64) -> bool {
        if self.task(id).is_none() {
            return false;
        }
        self.detail = Some(id);
        self.detail_overlay.show();
        true
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_overlay.hide();
    }

    pub fn detail(&self) -> Option<&Task> {
        self.detail.and_then(|id| self.task(id))
    }

    /// Flips one subtask of a task and stores it.
    pub async fn toggle_subtask(&mut self, task_id: u64, index: usize) -> Result<bool> {
        let Some(mut toggled) = self.task(task_id).and_then(|t| t.subtasks.get(index)).cloned() else {
            return Ok(false);
        };
        toggled.completed = !toggled.completed;
        toggled.task.get_or_insert(task_id);
        self.client.replace_subtask(&toggled).await?;

        if let Some(subtask) = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .and_then(|t| t.subtasks.get_mut(index))
        {
            *subtask = toggled;
        }
        Ok(true)
    }

    // --- edit overlay ---

    pub fn show_edit(&mut self, id: u64) -> Outcome {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionEditTask);
            return Outcome::Denied;
        }
        let Some(editor) = self.task(id).map(TaskEditor::new) else {
            return Outcome::Failed;
        };
        self.editor = Some(editor);
        self.detail_overlay.hide();
        self.edit_overlay.show();
        Outcome::Saved
    }

    pub fn editor(&self) -> Option<&TaskEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut TaskEditor> {
        self.editor.as_mut()
    }

    pub fn close_edit(&mut self) {
        self.editor = None;
        self.edit_overlay.hide();
    }

    /// Saves the open editor, reloads and reopens the task's detail overlay.
    pub async fn save_edit(&mut self, today: NaiveDate) -> Result<Outcome> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(Outcome::Failed);
        };
        let outcome = editor.save(&self.client, today).await?;
        if outcome != Outcome::Saved {
            return Ok(outcome);
        }
        let id = editor.task_id();
        self.close_edit();
        self.load().await?;
        self.show_detail(id);
        Ok(Outcome::Saved)
    }

    // --- delete ---

    pub async fn delete_task(&mut self, id: u64) -> Result<Outcome> {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionDeleteTask);
            return Ok(Outcome::Denied);
        }
        if !self.client.delete_task(id).await? {
            return Ok(Outcome::Failed);
        }
        self.close_detail();
        self.load().await?;
        Ok(Outcome::Saved)
    }

    // --- add-task overlay ---

    /// Hands `progress` to the composer and opens the add-task overlay.
    pub fn show_add_task(&mut self, progress: Progress) -> Result<Outcome> {
        if self.session.is_guest() {
            self.notifier.warning(Message::NoPermissionAddTask);
            return Ok(Outcome::Denied);
        }
        self.session.set_progress(progress)?;
        self.add_task_overlay.show();
        Ok(Outcome::Saved)
    }

    /// Closes the add-task overlay and reloads the board.
    pub async fn close_add_task(&mut self) -> Result<()> {
        self.session.take_progress()?;
        self.add_task_overlay.hide();
        self.load().await
    }

    /// Advances overlays and popups.
    pub fn advance(&mut self, delta: Duration) {
        self.detail_overlay.advance(delta);
        self.edit_overlay.advance(delta);
        self.add_task_overlay.advance(delta);
        self.notifier.advance(delta);
    }

    // --- rendering ---

    fn card_context(&self) -> CardContext<'_> {
        CardContext {
            contacts: &self.contacts,
            dragged: self.dragged,
            open_menu: self.open_menu,
        }
    }

    pub fn render_column(&self, progress: Progress) -> Markup {
        let tasks = self.column_tasks(progress);
        views::board::column(progress, &tasks, self.highlighted == Some(progress), self.card_context())
    }

    pub fn render_columns(&self) -> Markup {
        html! {
            @for progress in Progress::ALL {
                (self.render_column(progress))
            }
        }
    }

    pub fn render_detail(&self) -> Option<Markup> {
        self.detail().map(|task| views::board::detail(task, &self.contacts))
    }

    pub fn render_edit(&self, today: NaiveDate) -> Option<Markup> {
        self.editor.as_ref().map(|editor| editor.render(&self.contacts, today))
    }
}
