//! Summary page and header avatar.

use crate::libs::messages::Message;
use crate::libs::summary::{german_long_date, Summary};
use maud::{html, Markup};

/// Everything the summary page shows besides the counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Greeting {
    pub salutation: Message,
    pub name: String,
    /// Greeting plays full-screen before the counters appear.
    pub animate: bool,
}

fn counter(id: &str, value: u64, label: &str) -> Markup {
    html! {
        div.summary-tile {
            span.counter id=(id) { (value) }
            span.counter-label { (label) }
        }
    }
}

pub fn page(summary: &Summary, greeting: &Greeting) -> Markup {
    html! {
        div.summary-page.greeting-intro[greeting.animate] {
            div #"ctn-tasks-summary" {
                (counter("summary-todo-counter", summary.todo, "To-do"))
                (counter("summary-done-counter", summary.done, "Done"))
                div.summary-urgent {
                    (counter("summary-urgent-counter", summary.urgent, "Urgent"))
                    div #"date-upcoming-deadline" {
                        @match summary.deadline() {
                            Some(date) => {
                                (german_long_date(date))
                            }
                            None => {
                                (Message::NoUpcomingDeadline.to_string())
                            }
                        }
                    }
                    span { "Upcoming Deadline" }
                }
                (counter("tasks-in-board-counter", summary.total_tasks, "Tasks in Board"))
                (counter("tasks-in-progress-counter", summary.in_progress, "Tasks in Progress"))
                (counter("feedback-counter", summary.await_feedback, "Awaiting Feedback"))
            }
            div #"greeting-summary" {
                span #"daytime-greeting" { (greeting.salutation.to_string()) }
                span #"user-greeting" { (greeting.name) }
            }
        }
    }
}

/// Round header button with the user's initials.
pub fn header_avatar(initials: &str) -> Markup {
    html! {
        div.header-user."d-flex" data-action="toggle-header-menu" { (initials) }
    }
}
