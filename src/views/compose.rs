//! Add-task form and the controls it shares with the edit overlay.

use super::{avatar, field_error};
use crate::libs::contact::Contact;
use crate::libs::draft::{AssigneePicker, SubtaskDrafts, TaskForm};
use crate::libs::task::Priority;
use crate::libs::validation::{Field, FieldError};
use chrono::NaiveDate;
use maud::{html, Markup};

/// Categories offered by the composer.
pub const CATEGORIES: [&str; 2] = ["Technical Task", "User Story"];

/// Exclusive urgent/medium/low toggle; the active button is colored.
pub fn priority_buttons(selected: Priority) -> Markup {
    html! {
        div."d-flex-y".prio-group {
            @for priority in Priority::ALL {
                @let active = priority == selected;
                button.prio."d-flex"
                    id={ "btn-" (priority.as_str()) }
                    type="button"
                    data-action="change-priority"
                    data-priority=(priority.as_str())
                    style=[active.then(|| format!("background-color:{};color:white;", priority.color()))] {
                    (priority.label())
                    img src=(if active { priority.active_icon() } else { priority.icon() }) alt="";
                }
            }
        }
    }
}

/// Contact list filtered by the picker's query, with check state.
pub fn assignee_dropdown(picker: &AssigneePicker, contacts: &[Contact]) -> Markup {
    html! {
        div.dropdown-contacts #"dropdown-contacts" {
            @for contact in picker.filter(contacts) {
                @let checked = picker.is_selected(contact.id);
                div.contact."d-flex-y".checked[checked]
                    id={ "contact" (contact.id) }
                    data-action="toggle-assignee"
                    data-contact-id=(contact.id) {
                    div.contact-left."d-flex-y" {
                        (avatar("assigned-to d-flex", &contact.initials, &contact.color))
                        label for={ "checkboxContact" (contact.id) } { (contact.name) }
                    }
                    div.contact-right {
                        input.checkbox-contact type="checkbox" id={ "checkboxContact" (contact.id) } checked[checked];
                    }
                }
            }
        }
    }
}

/// Avatars of the selected contacts with the "+N" overflow badge.
pub fn selected_avatars(picker: &AssigneePicker, contacts: &[Contact]) -> Markup {
    let (shown, overflow) = picker.avatars(contacts);
    html! {
        div.assigned-content."d-flex-y"."gap-8" #"assigned-content" {
            @for contact in shown {
                (avatar("assigned-to d-flex", &contact.initials, &contact.color))
            }
            @if overflow > 0 {
                (avatar("assigned-to d-flex", &format!("+{}", overflow), "grey"))
            }
        }
    }
}

pub fn subtask_list(drafts: &SubtaskDrafts) -> Markup {
    html! {
        ul.subtask-list {
            @for (index, subtask) in drafts.items().iter().enumerate() {
                li.subtask-item-edit."d-flex-y" id={ "subtask-item-edit" (index) } data-index=(index) {
                    span { "• " (subtask.title) }
                    div.subtask-icons."d-flex-x" {
                        img.img-edit-subtask data-action="edit-subtask" data-index=(index) src="/assets/img/pencilBlue.png" alt="Edit Subtask";
                        span.horizonal-line-subtask {}
                        img.img-delete-subtask data-action="delete-subtask" data-index=(index) src="/assets/img/dustbinDark.svg" alt="Delete Subtask";
                    }
                }
            }
        }
    }
}

/// The whole add-task form. `embedded` marks the board overlay variant.
pub fn form(form: &TaskForm, contacts: &[Contact], today: NaiveDate, errors: &[FieldError], embedded: bool) -> Markup {
    let due = form.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    html! {
        form.add-task-form.embedded[embedded] autocomplete="off" {
            div.add-task-left {
                label for="title" { "Title" span.required { "*" } }
                input #title type="text" name="title" placeholder="Enter a title" value=(form.title);
                (field_error(Field::Title, errors))

                label for="description" { "Description" }
                textarea #description name="description" placeholder="Enter a Description" { (form.description) }

                label for="inputAssigned" { "Assigned to" }
                input #inputAssigned type="text" data-action="search-assignee" value=(form.assignees.query())
                    placeholder="Select contacts to assign";
                (assignee_dropdown(&form.assignees, contacts))
                (selected_avatars(&form.assignees, contacts))
            }
            div.add-task-right {
                label for="dueDate" { "Due date" span.required { "*" } }
                input #dueDate type="date" name="dueDate" value=(due) min=(today.format("%Y-%m-%d").to_string());
                (field_error(Field::DueDate, errors))

                span.label-prio { "Prio" }
                (priority_buttons(form.priority))

                label for="category" { "Category" span.required { "*" } }
                select #category name="category" {
                    option value="" selected[form.category.is_empty()] { "Select task category" }
                    @for category in CATEGORIES {
                        option value=(category) selected[form.category == category] { (category) }
                    }
                }
                (field_error(Field::Category, errors))

                label for="subtasks" { "Subtasks" }
                input #subtasks type="text" name="subtasks" data-action="add-subtask" placeholder="Add new subtask";
                (subtask_list(&form.subtasks))
            }
            div.add-task-footer {
                button.clear-button type="button" data-action="clear-task" { "Clear" }
                button.create-button type="submit" data-action="create-task" { "Create Task" }
            }
        }
    }
}
