#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use join::libs::contact::{find, full_initials, group_contacts, initials, random_color, Contact, ContactData};
    use join::libs::messages::Message;
    use join::libs::summary::{german_long_date, greeting, short_date, Summary};
    use join::libs::task::{Priority, Progress, Subtask, Task, TaskData};
    use serde_json::json;

    fn contact(id: u64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            email: format!("{}@join.dev", id),
            phone: String::new(),
            initials: initials(name),
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_task_decodes_sloppy_fields() {
        let task: Task = serde_json::from_value(json!({
            "id": 4,
            "title": "Ship",
            "dueDate": "2025-01-15",
            "priority": "urgent",
            "category": "User Story",
            "progress": "await feedback",
            "assignedTo": "",
            "subtasks": [{"id": 1, "title": "a", "completed": null, "task": 4}]
        }))
        .unwrap();

        assert!(task.assigned_to.is_empty());
        assert_eq!(task.progress, Progress::AwaitFeedback);
        assert!(!task.subtasks[0].completed);
        assert_eq!(task.description, "");
        assert_eq!(task.category, "User Story");
    }

    #[test]
    fn test_task_decodes_null_assignees_and_string_flags() {
        let task: Task = serde_json::from_value(json!({
            "id": 5,
            "title": "Review",
            "dueDate": "2025-02-01",
            "assignedTo": null,
            "subtasks": [
                {"id": 1, "title": "a", "completed": "true"},
                {"id": 2, "title": "b", "completed": ""},
                {"id": 3, "title": "c", "completed": true}
            ]
        }))
        .unwrap();

        assert!(task.assigned_to.is_empty());
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.progress, Progress::Todo);
        assert_eq!(task.completed_subtasks(), 2);
    }

    #[test]
    fn test_task_encodes_camel_case() {
        let data = TaskData {
            title: "t".into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            priority: Priority::Low,
            category: "Technical Task".into(),
            progress: Progress::InProgress,
            assigned_to: vec![2, 3],
        };
        let value = serde_json::to_value(&data).unwrap();

        assert_eq!(value["dueDate"], "2025-01-15");
        assert_eq!(value["progress"], "in progress");
        assert_eq!(value["priority"], "low");
        assert_eq!(value["assignedTo"], json!([2, 3]));
    }

    #[test]
    fn test_progress_parses_wire_values() {
        assert_eq!("await feedback".parse::<Progress>().unwrap(), Progress::AwaitFeedback);
        assert_eq!("in progress".parse::<Progress>().unwrap(), Progress::InProgress);
        assert!("later".parse::<Progress>().is_err());
        assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Urgent);
    }

    #[test]
    fn test_task_search_matches_title_and_description() {
        let task: Task = serde_json::from_value(json!({
            "id": 1,
            "title": "Design Login",
            "description": "Draw the Mockups",
            "dueDate": "2025-01-15"
        }))
        .unwrap();

        assert!(task.matches("login"));
        assert!(task.matches("mockups"));
        assert!(!task.matches("board"));
    }

    #[test]
    fn test_subtask_for_task_drops_id() {
        let subtask = Subtask {
            id: Some(9),
            title: "Write tests".into(),
            completed: true,
            task: None,
        };
        let tagged = subtask.for_task(3);

        assert_eq!(tagged.id, None);
        assert_eq!(tagged.task, Some(3));
        assert!(tagged.completed);
        let value = serde_json::to_value(&tagged).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("anna maria schmidt"), "AM");
        assert_eq!(initials("Bob"), "B");
        assert_eq!(initials("  "), "");
        assert_eq!(full_initials("anna maria schmidt"), "AMS");
    }

    #[test]
    fn test_random_color_format() {
        let color = random_color();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_color_varies() {
        let colors: std::collections::HashSet<String> = (0..32).map(|_| random_color()).collect();
        assert!(colors.len() > 1);
    }

    #[test]
    fn test_contact_data_new_builds_avatar() {
        let data = ContactData::new("Lena Koch", "lena@join.dev", "12345");
        assert_eq!(data.initials, "LK");
        assert!(data.color.starts_with('#'));
    }

    #[test]
    fn test_group_contacts_orders_letters_and_members() {
        let contacts = vec![
            contact(1, "bert"),
            contact(2, "Anna"),
            contact(3, "Bea"),
            contact(4, ""),
            contact(5, "alex"),
        ];
        let groups = group_contacts(&contacts);

        let letters: Vec<char> = groups.iter().map(|g| g.letter).collect();
        assert_eq!(letters, vec!['A', 'B']);
        let a: Vec<&str> = groups[0].contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(a, vec!["alex", "Anna"]);
        let b: Vec<&str> = groups[1].contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(b, vec!["Bea", "bert"]);
        assert_eq!(find(&contacts, 3).map(|c| c.name.as_str()), Some("Bea"));
    }

    #[test]
    fn test_summary_decodes_dashed_keys() {
        let summary: Summary = serde_json::from_value(json!({
            "todo": 2,
            "done": 1,
            "urgent": 1,
            "total-tasks": 6,
            "in-progress": 2,
            "await-feedback": 1,
            "upcoming-deadline": "2025-01-05"
        }))
        .unwrap();

        assert_eq!(summary.total_tasks, 6);
        assert_eq!(summary.deadline(), NaiveDate::from_ymd_opt(2025, 1, 5));
        assert_eq!(german_long_date(summary.deadline().unwrap()), "05. Januar 2025");
    }

    #[test]
    fn test_date_helpers() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(german_long_date(date), "15. März 2024");
        assert_eq!(short_date(date), "15/03/2024");
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting(5), Message::GreetingMorning);
        assert_eq!(greeting(11), Message::GreetingMorning);
        assert_eq!(greeting(12), Message::GreetingAfternoon);
        assert_eq!(greeting(17), Message::GreetingAfternoon);
        assert_eq!(greeting(18), Message::GreetingEvening);
        assert_eq!(greeting(2), Message::GreetingEvening);
    }
}
