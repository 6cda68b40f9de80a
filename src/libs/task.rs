//! Task and subtask records as exchanged with the backend.
//!
//! Field names follow the backend's camelCase JSON (`dueDate`,
//! `assignedTo`). Decoding is lenient where older records are known to be
//! sloppy: `assignedTo` may be `null`, `""` or missing, a subtask's
//! `completed` flag may be `null`, `""` or a string, and `priority` and
//! `progress` are matched case-insensitively with unknown or empty values
//! falling back to `medium` and `todo`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Column a task lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Progress {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "await feedback")]
    AwaitFeedback,
    #[serde(rename = "done")]
    Done,
}

impl Progress {
    /// Board order, left to right.
    pub const ALL: [Progress; 4] = [Progress::Todo, Progress::InProgress, Progress::AwaitFeedback, Progress::Done];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Progress::Todo => "todo",
            Progress::InProgress => "in progress",
            Progress::AwaitFeedback => "await feedback",
            Progress::Done => "done",
        }
    }

    /// Column heading, also used by the move-to menu.
    pub fn title(&self) -> &'static str {
        match self {
            Progress::Todo => "To do",
            Progress::InProgress => "In Progress",
            Progress::AwaitFeedback => "Await Feedback",
            Progress::Done => "Done",
        }
    }

    /// Suffix of the "No tasks ..." placeholder.
    pub fn empty_label(&self) -> &'static str {
        match self {
            Progress::Todo => "To do",
            Progress::InProgress => "In Progress",
            Progress::AwaitFeedback => "Awaiting Feedback",
            Progress::Done => "Done",
        }
    }

    /// Element id of the column container.
    pub fn column_id(&self) -> &'static str {
        match self {
            Progress::Todo => "todo",
            Progress::InProgress => "in-progress",
            Progress::AwaitFeedback => "await-feedback",
            Progress::Done => "done",
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Progress {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Progress::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown progress '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Urgent, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Capitalized form shown in the detail overlay.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Background of the active priority button.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Urgent => "#ff3e06",
            Priority::Medium => "#ffaa18",
            Priority::Low => "#7ee432",
        }
    }

    pub fn icon(&self) -> String {
        format!("/assets/img/{}sym.png", self.as_str())
    }

    /// Icon variant drawn on the active (colored) button.
    pub fn active_icon(&self) -> String {
        format!("/assets/img/{}whitesym.png", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown priority '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<u64>,
}

impl Subtask {
    /// Unsaved, open subtask.
    pub fn new(title: &str) -> Self {
        Subtask {
            id: None,
            title: title.to_string(),
            completed: false,
            task: None,
        }
    }

    /// Copy tagged with its owning task, ready to be posted.
    pub fn for_task(&self, task_id: u64) -> Self {
        Subtask {
            id: None,
            title: self.title.clone(),
            completed: self.completed,
            task: Some(task_id),
        }
    }
}

/// Fields of a task as posted by the composer (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub priority: Priority,
    pub category: String,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub progress: Progress,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub assigned_to: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub progress: Progress,
    #[serde(default, deserialize_with = "lenient_ids")]
    pub assigned_to: Vec<u64>,
    #[serde(default, deserialize_with = "lenient_subtasks")]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    pub fn is_assigned(&self, contact_id: u64) -> bool {
        self.assigned_to.contains(&contact_id)
    }
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().unwrap_or_default(),
        _ => T::default(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    })
}

fn lenient_ids<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.parse().ok(),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_subtasks<'de, D>(deserializer: D) -> Result<Vec<Subtask>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
