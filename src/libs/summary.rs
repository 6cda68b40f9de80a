//! Board counters shown on the summary page, plus greeting and date helpers.

use crate::libs::messages::Message;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Width at or below which the summary greeting plays as an intro.
pub const NARROW_LAYOUT_MAX_WIDTH: u32 = 1280;

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Answer of `GET join/summary`. Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub todo: u64,
    #[serde(default)]
    pub done: u64,
    #[serde(default)]
    pub urgent: u64,
    #[serde(default, rename = "total-tasks")]
    pub total_tasks: u64,
    #[serde(default, rename = "in-progress")]
    pub in_progress: u64,
    #[serde(default, rename = "await-feedback")]
    pub await_feedback: u64,
    #[serde(default, rename = "upcoming-deadline", skip_serializing_if = "Option::is_none")]
    pub upcoming_deadline: Option<String>,
}

impl Summary {
    /// Upcoming deadline as a date. Accepts plain dates and timestamps.
    pub fn deadline(&self) -> Option<NaiveDate> {
        let raw = self.upcoming_deadline.as_deref()?.trim();
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

/// "15. Januar 2025".
pub fn german_long_date(date: NaiveDate) -> String {
    let month = GERMAN_MONTHS[date.month0() as usize];
    format!("{:02}. {} {}", date.day(), month, date.year())
}

/// `dd/mm/yyyy`, as shown in the task detail overlay.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Greeting for the local hour (0..=23).
pub fn greeting(hour: u32) -> Message {
    match hour {
        5..=11 => Message::GreetingMorning,
        12..=17 => Message::GreetingAfternoon,
        _ => Message::GreetingEvening,
    }
}
