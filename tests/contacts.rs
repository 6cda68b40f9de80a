mod common;

#[cfg(test)]
mod tests {
    use super::common::{client, contact, task, MockGateway};
    use join::api::paths;
    use join::libs::config::UiConfig;
    use join::libs::messages::Message;
    use join::libs::session::{SessionStore, GUEST_USER};
    use join::libs::validation::Field;
    use join::pages::contacts::{ContactDirectory, ContactForm};
    use join::pages::Outcome;
    use serde_json::json;
    use test_context::{test_context, AsyncTestContext};

    struct ContactsTestContext {
        gateway: MockGateway,
        session: SessionStore,
        page: ContactDirectory<MockGateway>,
    }

    impl AsyncTestContext for ContactsTestContext {
        async fn setup() -> Self {
            let gateway = MockGateway::new();
            let mut shared = task(7, "Shared", "todo");
            shared["assignedTo"] = json!([1, 2]);
            gateway
                .on_load(
                    paths::CONTACTS,
                    json!([
                        contact(2, "bert Brandt", "bert@join.dev"),
                        contact(1, "Anna Schmidt", "anna@join.dev"),
                        contact(3, "Anton", "anton@join.dev")
                    ]),
                )
                .on_load(paths::TASKS, json!([shared, task(8, "Solo", "done")]));

            let session = SessionStore::in_memory();
            session.set_current_user("Anna Schmidt").unwrap();
            let mut page = ContactDirectory::new(client(&gateway), session.clone(), &UiConfig::default());
            page.load_contacts().await.unwrap();
            ContactsTestContext { gateway, session, page }
        }
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_contacts_grouped_by_letter(ctx: &mut ContactsTestContext) {
        let groups = ctx.page.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].letter, 'A');
        let names: Vec<&str> = groups[0].contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Anna Schmidt", "Anton"]);
        assert_eq!(groups[1].letter, 'B');
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_select_contact_shows_details(ctx: &mut ContactsTestContext) {
        ctx.page.select_contact(42);
        assert!(ctx.page.selected().is_none());

        ctx.page.select_contact(1);
        assert!(ctx.page.details.is_visible());
        let html = ctx.page.render_details().unwrap().into_string();
        assert!(html.contains("mailto:anna@join.dev"));
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_add_contact(ctx: &mut ContactsTestContext) {
        assert!(ctx.page.open_add_form());
        assert_eq!(ctx.page.form(), Some(ContactForm::Add));

        let outcome = ctx.page.add_contact(" Clara Weiss ", "clara@join.dev", "+49 30 123456").await.unwrap();
        assert_eq!(outcome, Outcome::Saved);

        let post = &ctx.gateway.calls_with("POST")[0];
        assert_eq!(post.path, "join/contacts");
        let body = post.body.clone().unwrap();
        assert_eq!(body["name"], "Clara Weiss");
        assert_eq!(body["initials"], "CW");
        assert!(body["color"].as_str().unwrap().starts_with('#'));

        assert_eq!(ctx.page.form(), None);
        assert_eq!(ctx.page.notifier.last_message(), Some(&Message::ContactAdded));
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_add_contact_refused_keeps_form_open(ctx: &mut ContactsTestContext) {
        ctx.gateway.answer(
            "POST",
            paths::CONTACTS,
            json!({ "detail": "You do not have permission to perform this action." }),
        );
        ctx.page.open_add_form();

        let outcome = ctx.page.add_contact("Bert Brandt", "bert@join.dev", "12345").await.unwrap();
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(ctx.page.form(), Some(ContactForm::Add));
        assert_eq!(ctx.page.notifier.last_message(), Some(&Message::ContactNotSaved));
        assert_eq!(ctx.page.contacts().len(), 3);
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_add_contact_invalid_sends_nothing(ctx: &mut ContactsTestContext) {
        let outcome = ctx.page.add_contact("Clara 2", "clara", "12").await.unwrap();

        match outcome {
            Outcome::Invalid(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(ctx.gateway.writes().is_empty());
        assert!(ctx.page.errors().iter().any(|e| e.field == Field::Phone));
        let html = ctx.page.render_form();
        assert!(html.is_none());
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_edit_contact_keeps_avatar_when_name_unchanged(ctx: &mut ContactsTestContext) {
        ctx.page.select_contact(1);
        assert!(ctx.page.open_edit_form());
        assert!(ctx.page.render_form().unwrap().into_string().contains("anna@join.dev"));

        let outcome = ctx.page.edit_contact("Anna Schmidt", "anna@schmidt.dev", "12345").await.unwrap();
        assert_eq!(outcome, Outcome::Saved);

        let put = &ctx.gateway.calls_with("PUT")[0];
        assert_eq!(put.path, "join/contacts/1");
        let body = put.body.clone().unwrap();
        assert_eq!(body["email"], "anna@schmidt.dev");
        assert_eq!(body["initials"], "AS");
        assert_eq!(body["color"], "#ff7a00");
        assert_eq!(ctx.page.notifier.last_message(), Some(&Message::ContactUpdated));
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_edit_contact_renamed_gets_new_initials(ctx: &mut ContactsTestContext) {
        ctx.page.select_contact(1);
        ctx.page.edit_contact("Hanna Berg", "anna@join.dev", "12345").await.unwrap();

        let body = ctx.gateway.calls_with("PUT")[0].body.clone().unwrap();
        assert_eq!(body["initials"], "HB");
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_edit_contact_refused_keeps_form_open(ctx: &mut ContactsTestContext) {
        ctx.gateway.answer("PUT", "join/contacts/1", json!({ "detail": "Not found." }));
        ctx.page.select_contact(1);
        ctx.page.open_edit_form();

        let outcome = ctx.page.edit_contact("Anna Schmidt", "anna@schmidt.dev", "12345").await.unwrap();
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(ctx.page.form(), Some(ContactForm::Edit));
        assert_eq!(ctx.page.notifier.last_message(), Some(&Message::ContactNotSaved));
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_delete_contact_unassigns_from_tasks(ctx: &mut ContactsTestContext) {
        ctx.page.select_contact(1);
        assert_eq!(ctx.page.delete_contact().await.unwrap(), Outcome::Saved);

        assert_eq!(ctx.gateway.calls_with("DELETE")[0].path, "join/contacts/1");
        let patches = ctx.gateway.calls_with("PATCH");
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].path, "join/tasks/7");
        assert_eq!(patches[0].body, Some(json!({ "assignedTo": [2] })));

        assert!(ctx.page.selected().is_none());
        assert_eq!(ctx.page.notifier.last_message(), Some(&Message::ContactDeleted));
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_refused_delete_keeps_tasks(ctx: &mut ContactsTestContext) {
        ctx.gateway.refuse_delete("join/contacts/1");
        ctx.page.select_contact(1);

        assert_eq!(ctx.page.delete_contact().await.unwrap(), Outcome::Failed);
        assert!(ctx.gateway.calls_with("PATCH").is_empty());
        assert_eq!(ctx.page.notifier.last_message(), Some(&Message::NoPermissionDeleteContact));
    }

    #[test_context(ContactsTestContext)]
    #[tokio::test]
    async fn test_guest_is_denied(ctx: &mut ContactsTestContext) {
        ctx.session.set_current_user(GUEST_USER).unwrap();
        ctx.page.select_contact(1);

        assert!(!ctx.page.open_add_form());
        assert!(!ctx.page.open_edit_form());
        assert_eq!(ctx.page.delete_contact().await.unwrap(), Outcome::Denied);
        assert_eq!(
            ctx.page.add_contact("Clara", "clara@join.dev", "12345").await.unwrap(),
            Outcome::Denied
        );
        assert!(ctx.gateway.writes().is_empty());
        assert_eq!(ctx.page.notifier.popups().len(), 4);
    }
}
