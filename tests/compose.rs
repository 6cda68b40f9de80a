mod common;

#[cfg(test)]
mod tests {
    use super::common::{client, contact, MockGateway};
    use chrono::NaiveDate;
    use join::api::paths;
    use join::libs::config::UiConfig;
    use join::libs::messages::Message;
    use join::libs::session::{SessionStore, GUEST_USER};
    use join::libs::task::{Priority, Progress};
    use join::libs::validation::Field;
    use join::pages::compose::TaskComposer;
    use join::pages::{Navigation, Outcome};
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn setup(embedded: bool) -> (MockGateway, SessionStore, TaskComposer<MockGateway>) {
        let gateway = MockGateway::new();
        gateway.on_load(
            paths::CONTACTS,
            json!([contact(1, "Anna Schmidt", "anna@join.dev"), contact(2, "Bert", "bert@join.dev")]),
        );
        let session = SessionStore::in_memory();
        session.set_current_user("Anna Schmidt").unwrap();
        let composer = TaskComposer::new(client(&gateway), session.clone(), &UiConfig::default(), embedded);
        (gateway, session, composer)
    }

    fn fill(composer: &mut TaskComposer<MockGateway>) {
        let form = composer.form_mut();
        form.title = "Plan sprint".into();
        form.description = "Pick stories".into();
        form.category = "User Story".into();
        form.set_due_date("2025-06-20");
    }

    #[tokio::test]
    async fn test_open_takes_handed_over_progress() {
        let (_gateway, session, mut composer) = setup(true);
        session.set_progress(Progress::AwaitFeedback).unwrap();

        composer.open().await.unwrap();
        assert_eq!(composer.progress(), Progress::AwaitFeedback);
        assert_eq!(composer.form().priority, Priority::Medium);
        assert_eq!(composer.contacts().len(), 2);
        assert_eq!(session.take_progress().unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_defaults_to_todo() {
        let (_gateway, session, mut composer) = setup(false);
        composer.open().await.unwrap();

        assert_eq!(composer.progress(), Progress::Todo);
        assert_eq!(session.selected_priority(), Some(Priority::Medium));
    }

    #[tokio::test]
    async fn test_submit_creates_task_then_subtasks() {
        let (gateway, session, mut composer) = setup(false);
        session.set_progress(Progress::InProgress).unwrap();
        composer.open().await.unwrap();
        fill(&mut composer);
        composer.set_priority(Priority::Urgent).unwrap();
        composer.search_assignees("bert");
        assert_eq!(composer.filtered_contacts().len(), 1);
        composer.toggle_assignee(2);
        assert!(composer.add_subtask(" Estimate "));
        assert!(composer.add_subtask("Refine"));
        composer.edit_subtask(1, "Refine backlog");

        let outcome = composer.submit(today()).await.unwrap();
        assert_eq!(outcome, Outcome::Saved);

        let posts = gateway.calls_with("POST");
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].path, "join/tasks");
        let task = posts[0].body.clone().unwrap();
        assert_eq!(task["title"], "Plan sprint");
        assert_eq!(task["dueDate"], "2025-06-20");
        assert_eq!(task["priority"], "urgent");
        assert_eq!(task["progress"], "in progress");
        assert_eq!(task["assignedTo"], json!([2]));

        assert_eq!(posts[1].path, "join/subtasks");
        assert_eq!(posts[1].body.clone().unwrap()["title"], "Estimate");
        assert_eq!(posts[2].body.clone().unwrap()["title"], "Refine backlog");
        assert!(posts[1..].iter().all(|c| c.body.clone().unwrap()["task"] == 101));
        assert!(posts[1..].iter().all(|c| c.body.clone().unwrap()["completed"] == false));

        assert_eq!(composer.notifier.last_message(), Some(&Message::TaskAdded));
        assert_eq!(composer.take_navigation(), Some(Navigation::Board));
        assert_eq!(composer.take_navigation(), None);
        assert!(composer.form().title.is_empty());
        assert!(composer.form().subtasks.is_empty());
    }

    #[tokio::test]
    async fn test_embedded_submit_closes_overlay() {
        let (_gateway, _session, mut composer) = setup(true);
        composer.open().await.unwrap();
        fill(&mut composer);

        composer.submit(today()).await.unwrap();
        assert_eq!(composer.take_navigation(), Some(Navigation::CloseAddTaskOverlay));
    }

    #[tokio::test]
    async fn test_submit_reports_missing_fields() {
        let (gateway, _session, mut composer) = setup(false);
        composer.open().await.unwrap();

        let outcome = composer.submit(today()).await.unwrap();
        let Outcome::Invalid(errors) = outcome else {
            panic!("expected validation errors");
        };
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Title, Field::DueDate, Field::Category]);
        assert!(gateway.writes().is_empty());
        assert!(composer.render(today()).into_string().contains("This field is required"));
    }

    #[tokio::test]
    async fn test_submit_rejects_past_due_date() {
        let (gateway, _session, mut composer) = setup(false);
        composer.open().await.unwrap();
        fill(&mut composer);
        composer.form_mut().set_due_date("2025-06-01");

        let outcome = composer.submit(today()).await.unwrap();
        assert!(matches!(outcome, Outcome::Invalid(ref errors) if errors[0].message == Message::DueDateInPast));
        assert!(gateway.writes().is_empty());
    }

    #[tokio::test]
    async fn test_guest_is_denied_before_validation() {
        let (gateway, session, mut composer) = setup(false);
        session.set_current_user(GUEST_USER).unwrap();

        assert_eq!(composer.submit(today()).await.unwrap(), Outcome::Denied);
        assert!(gateway.writes().is_empty());
        assert_eq!(composer.notifier.last_message(), Some(&Message::NoPermissionAddTask));
    }

    #[tokio::test]
    async fn test_clear_resets_form() {
        let (_gateway, _session, mut composer) = setup(false);
        composer.open().await.unwrap();
        fill(&mut composer);
        composer.toggle_assignee(1);
        composer.set_priority(Priority::Low).unwrap();
        composer.add_subtask("one");

        composer.clear();
        assert_eq!(composer.form().priority, Priority::Medium);
        assert!(composer.form().assignees.selected().is_empty());
        assert!(composer.form().subtasks.is_empty());
        assert!(composer.form().due_date.is_none());
    }
}
