use crate::libs::task::Progress;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === CONTACT MESSAGES ===
    ContactAdded,
    ContactUpdated,
    ContactDeleted,
    ContactNotFound(String), // email
    ContactNotSaved,
    NoPermissionAddContact,
    NoPermissionEditContact,
    NoPermissionDeleteContact,
    ContactRemovedFromTasks(usize),

    // === TASK MESSAGES ===
    TaskAdded,
    TaskNotFound(u64),
    NoPermissionAddTask,
    NoPermissionEditTask,
    NoPermissionDeleteTask,
    NoTasks(Progress),
    NoSubtasks,
    NoAssignees,
    SubtasksCount { done: usize, total: usize },
    TaskMoved { id: u64, progress: Progress },
    SubtaskWithoutId(String), // title

    // === VALIDATION MESSAGES ===
    OnlyTextAllowed,
    InvalidEmail,
    InvalidPhone,
    FieldRequired,
    DueDateInPast,

    // === AUTH MESSAGES ===
    NotRegistered,
    LoginDataMismatch,
    GuestLoginFailed,
    EmailAlreadyExists,
    PasswordsDontMatch,
    SignUpSuccessful,
    SignUpFailed(String),

    // === SUMMARY MESSAGES ===
    GreetingMorning,
    GreetingAfternoon,
    GreetingEvening,
    NoUpcomingDeadline,

    // === GATEWAY MESSAGES ===
    RequestSent { method: String, path: String },
    LoadFailed(String),
    DeleteFailed(String),
    RecordSkipped(String),
    UnexpectedAnswer(String, String), // path, body

    // === CONFIGURATION MESSAGES ===
    ConfigApiUrlOverride(String),
}
