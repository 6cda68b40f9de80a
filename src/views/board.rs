//! Board columns, task cards and the detail and edit overlays.

use super::{avatar, compose, field_error, resolve};
use crate::libs::contact::Contact;
use crate::libs::draft::TaskForm;
use crate::libs::messages::Message;
use crate::libs::summary::short_date;
use crate::libs::task::{Progress, Subtask, Task};
use crate::libs::validation::{Field, FieldError};
use chrono::NaiveDate;
use maud::{html, Markup};

/// Avatars on a card before the "+N" badge.
pub const MAX_CARD_AVATARS: usize = 5;

/// Board-wide state a card needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct CardContext<'a> {
    pub contacts: &'a [Contact],
    pub dragged: Option<u64>,
    pub open_menu: Option<u64>,
}

pub fn category_class(category: &str) -> &'static str {
    if category == "User Story" {
        "bg-user-story"
    } else {
        "bg-technical-task"
    }
}

fn category(category: &str) -> Markup {
    html! {
        p class={ "task-category " (category_class(category)) } { (category) }
    }
}

pub fn no_tasks(progress: Progress) -> Markup {
    html! {
        div."ctn-no-tasks"."d-flex" { (Message::NoTasks(progress).to_string()) }
    }
}

/// One column with its cards, or the empty placeholder.
pub fn column(progress: Progress, tasks: &[&Task], highlighted: bool, ctx: CardContext<'_>) -> Markup {
    html! {
        div.column.highlight[highlighted]
            id=(progress.column_id())
            data-action="drop"
            data-progress=(progress.as_str()) {
            @if tasks.is_empty() {
                (no_tasks(progress))
            } @else {
                @for task in tasks {
                    (card(task, ctx))
                }
            }
        }
    }
}

pub fn card(task: &Task, ctx: CardContext<'_>) -> Markup {
    let dragging = ctx.dragged == Some(task.id);
    let menu_open = ctx.open_menu == Some(task.id);
    html! {
        div.ctn-task."d-flex-x".rotate[dragging]
            id={ "task-" (task.id) }
            draggable="true"
            data-action="show-detail"
            data-task-id=(task.id) {
            div.ctn-header-task."d-flex-x" {
                (category(&task.category))
                div.move-to-responsive {
                    a.move-task."d-flex" data-action="toggle-move-menu" data-task-id=(task.id) {
                        img.img-menu src="/assets/icon/more.png" alt="More functions";
                    }
                    div.menu-move-to."d-flex-x"."d-none"[!menu_open] id={ "menu-" (task.id) } {
                        ul.ul-move-to."d-flex-x" {
                            @for target in Progress::ALL {
                                li.category-move-to
                                    data-action="move-task"
                                    data-task-id=(task.id)
                                    data-progress=(target.as_str()) { (target.title()) }
                            }
                        }
                    }
                }
            }
            p.task-title { (task.title) }
            p.task-description { (task.description) }
            @if !task.subtasks.is_empty() {
                (progress_bar(task))
            }
            div.ctn-task-bottom."d-flex-y" {
                div.ctn-assigned-to.mesh."d-flex-y" {
                    (card_assignees(&task.assigned_to, ctx.contacts))
                }
                img.image-prio-board src=(task.priority.icon()) alt="";
            }
        }
    }
}

fn progress_bar(task: &Task) -> Markup {
    let total = task.subtasks.len();
    let done = task.completed_subtasks();
    html! {
        div.task-subtasks."d-flex-y" {
            progress max=(total) value=(done) {}
            span.subtasks-count { (Message::SubtasksCount { done, total }.to_string()) }
        }
    }
}

fn card_assignees(ids: &[u64], contacts: &[Contact]) -> Markup {
    let resolved = resolve(ids, contacts);
    let overflow = resolved.len().saturating_sub(MAX_CARD_AVATARS);
    html! {
        @for contact in resolved.iter().take(MAX_CARD_AVATARS) {
            (avatar("assigned-to mesh d-flex", &contact.initials, &contact.color))
        }
        @if overflow > 0 {
            (avatar("assigned-to mesh d-flex", &format!("+{}", overflow), "grey"))
        }
    }
}

/// Read-only overlay of one task.
pub fn detail(task: &Task, contacts: &[Contact]) -> Markup {
    let assignees = resolve(&task.assigned_to, contacts);
    html! {
        div.overlay-detail-task-board.ctn-task.no-hover."d-flex-x" id="overlay-detail-task-board" {
            div.ctn-category-close."d-flex-y" {
                (category(&task.category))
                img.btn-close-detail-task data-action="close-detail" src="/assets/img/close.svg" alt="Image Close";
            }
            div.ctn-main-detail-task."d-flex-x" {
                p.task-title-detail { (task.title) }
                p.task-description-detail { (task.description) }
                div.ctn-due-date."d-flex-y" {
                    p.label { "Due date:" }
                    p.due-date { (short_date(task.due_date)) }
                }
                div.ctn-priority."d-flex-y" {
                    p.label { "Priority:" }
                    p.prio-detail { (task.priority.label()) }
                    img.image-prio-board src=(task.priority.icon()) alt="";
                }
                div {
                    p.label { "Assigned To:" }
                    div.ctn-assigned-to-detail."d-flex-x" {
                        @if assignees.is_empty() {
                            p.no-assignees { (Message::NoAssignees.to_string()) }
                        }
                        @for contact in &assignees {
                            div.person-detail."d-flex-y" {
                                (avatar("assigned-to d-flex", &contact.initials, &contact.color))
                                p { (contact.name) }
                            }
                        }
                    }
                }
                div {
                    p.label { "Subtasks:" }
                    div.ctn-subtasks."d-flex-x" {
                        @if task.subtasks.is_empty() {
                            p.no-subtasks { (Message::NoSubtasks.to_string()) }
                        }
                        @for (index, subtask) in task.subtasks.iter().enumerate() {
                            (detail_subtask(task.id, index, subtask))
                        }
                    }
                }
            }
            div.ctn-delete-edit."d-flex-y" {
                img.btn-delete-task data-action="delete-task" data-task-id=(task.id) src="/assets/img/dustbinDarkText.svg" alt="Image Delete";
                span.vertikal-line {}
                img.btn-edit-task data-action="show-edit" data-task-id=(task.id) src="/assets/img/editDarkText.svg" alt="Image Edit";
            }
        }
    }
}

fn detail_subtask(task_id: u64, index: usize, subtask: &Subtask) -> Markup {
    html! {
        div.subtask-item."d-flex-y" {
            input.subtask
                type="checkbox"
                id={ "checkbox" (index) }
                checked[subtask.completed]
                data-action="toggle-subtask"
                data-task-id=(task_id)
                data-index=(index);
            label.label-overlay-template for={ "checkbox" (index) } { (subtask.title) }
        }
    }
}

/// Edit overlay for the task `task_id`.
pub fn edit(task_id: u64, form: &TaskForm, contacts: &[Contact], today: NaiveDate, errors: &[FieldError]) -> Markup {
    let due = form.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    html! {
        div.overlay-edit-task-board.ctn-task.no-hover."d-flex-x" id="overlay-edit-task-board" {
            div.ctn-close."d-flex-y" {
                img.btn-close-detail-task data-action="close-edit" src="/assets/img/close.svg" alt="Image Close";
            }
            div.ctn-main-edit-task."d-flex-y" {
                form."d-flex-x" autocomplete="off" {
                    div."d-flex-x".column."gap-8" {
                        label for="title-edit" { "Title" }
                        input #"title-edit" type="text" name="title-edit" value=(form.title);
                        (field_error(Field::Title, errors))
                    }
                    div."d-flex-x".column."gap-8" {
                        label for="description-edit" { "Description" }
                        textarea #"description-edit" name="description" rows="4" { (form.description) }
                    }
                    div."d-flex-x".column."gap-8" {
                        label for="due-date-edit" { "Due date" }
                        input #"due-date-edit" type="date" name="due-date-edit" value=(due) min=(today.format("%Y-%m-%d").to_string());
                        (field_error(Field::DueDate, errors))
                    }
                    div."d-flex-x".column."gap-8" {
                        span.label-prio { "Prio" }
                        (compose::priority_buttons(form.priority))
                    }
                    div."d-flex-x".column."gap-8" {
                        label for="input-assigned-edit" { "Assigned to" }
                        input.input-assigned-edit #"input-assigned-edit" type="text" name="assigned-edit"
                            data-action="search-assignee" value=(form.assignees.query())
                            placeholder="Select contacts to assign";
                        (compose::assignee_dropdown(&form.assignees, contacts))
                        (compose::selected_avatars(&form.assignees, contacts))
                    }
                    div."d-flex-x".column."gap-8" {
                        label for="subtasks-edit" { "Subtasks" }
                        input #"subtasks-edit" type="text" name="subtasks" data-action="add-subtask" placeholder="Add new subtask";
                        @if form.subtasks.is_empty() {
                            ul #"no-subtask-edit" {
                                li.subtask-item-edit."d-flex-y" { (Message::NoSubtasks.to_string()) }
                            }
                        } @else {
                            (compose::subtask_list(&form.subtasks))
                        }
                    }
                }
            }
            div.edit-task-footer."d-flex-y" {
                button #"btn-update-task" type="submit" data-action="save-edit" data-task-id=(task_id)
                    disabled[!form.can_submit(today)] {
                    span { "Ok" }
                    img.img-check src="/assets/img/check-white.svg" alt="";
                }
            }
        }
    }
}
