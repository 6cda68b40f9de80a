//! Display implementation for Join messages.
//!
//! Every user-facing string of the client is produced here: popup texts,
//! inline validation hints, empty-state placeholders and log lines. Views and
//! controllers only ever hold a [`Message`] and format it at the edge.
//!
//! ## Message Categories
//!
//! - **Contact Messages**: Directory confirmations and guest warnings
//! - **Task Messages**: Board placeholders, composer confirmation, guest warnings
//! - **Validation Messages**: Inline field hints
//! - **Auth Messages**: Login and sign-up failures
//! - **Summary Messages**: Greetings and deadline placeholder
//! - **Gateway / Configuration Messages**: Diagnostic log lines

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONTACT MESSAGES ===
            Message::ContactAdded => "Contact added successfully".to_string(),
            Message::ContactUpdated => "Contact updated successfully".to_string(),
            Message::ContactDeleted => "Contact successfully deleted".to_string(),
            Message::ContactNotFound(email) => format!("No contact found with email {}", email),
            Message::ContactNotSaved => "The contact could not be saved.".to_string(),
            Message::NoPermissionAddContact => "You do not have permission to add a contact.".to_string(),
            Message::NoPermissionEditContact => "You do not have permission to edit this contact!".to_string(),
            Message::NoPermissionDeleteContact => "You do not have permission to delete this contact!".to_string(),
            Message::ContactRemovedFromTasks(count) => format!("Contact removed from {} task(s)", count),

            // === TASK MESSAGES ===
            Message::TaskAdded => "Task added to board".to_string(),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::NoPermissionAddTask => "You do not have permission to add this task!".to_string(),
            Message::NoPermissionEditTask => "You do not have permission to edit this task!".to_string(),
            Message::NoPermissionDeleteTask => "You do not have permission to delete this task!".to_string(),
            Message::NoTasks(progress) => format!("No tasks {}", progress.empty_label()),
            Message::NoSubtasks => "No subtasks in this task!".to_string(),
            Message::NoAssignees => "No contact in Assign To".to_string(),
            Message::SubtasksCount { done, total } => format!("{}/{} Subtasks", done, total),
            Message::TaskMoved { id, progress } => format!("Task {} moved to '{}'", id, progress.as_str()),
            Message::SubtaskWithoutId(title) => format!("Subtask '{}' has not been saved yet", title),

            // === VALIDATION MESSAGES ===
            Message::OnlyTextAllowed => "Only text allowed.".to_string(),
            Message::InvalidEmail => "Please enter a valid email.".to_string(),
            Message::InvalidPhone => "Enter 5-15 digits only.".to_string(),
            Message::FieldRequired => "This field is required".to_string(),
            Message::DueDateInPast => "The due date cannot be in the past.".to_string(),

            // === AUTH MESSAGES ===
            Message::NotRegistered => "This email address is not registered.".to_string(),
            Message::LoginDataMismatch => "Email and password do not match.".to_string(),
            Message::GuestLoginFailed => "Guest login failed.".to_string(),
            Message::EmailAlreadyExists => "This email address is already registered.".to_string(),
            Message::PasswordsDontMatch => "Your passwords don't match. Please try again.".to_string(),
            Message::SignUpSuccessful => "You Signed Up successfully".to_string(),
            Message::SignUpFailed(reason) => format!("Signup failed: {}", reason),

            // === SUMMARY MESSAGES ===
            Message::GreetingMorning => "Good morning,".to_string(),
            Message::GreetingAfternoon => "Good afternoon,".to_string(),
            Message::GreetingEvening => "Good evening,".to_string(),
            Message::NoUpcomingDeadline => "No upcoming Deadline".to_string(),

            // === GATEWAY MESSAGES ===
            Message::RequestSent { method, path } => format!("{} {}", method, path),
            Message::LoadFailed(path) => format!("Loading '{}' failed", path),
            Message::DeleteFailed(path) => format!("Deleting '{}' failed", path),
            Message::RecordSkipped(path) => format!("Skipped an unreadable record from '{}'", path),
            Message::UnexpectedAnswer(path, body) => format!("Unexpected answer from '{}': {}", path, body),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigApiUrlOverride(url) => format!("Backend URL overridden from environment: {}", url),
        };
        write!(f, "{}", text)
    }
}
