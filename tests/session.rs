#[cfg(test)]
mod tests {
    use join::libs::session::{SessionStore, CURRENT_USER_KEY, GUEST_USER, TOKEN_KEY};
    use join::libs::task::{Priority, Progress};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("session.json");
            SessionTestContext {
                _temp_dir: temp_dir,
                path,
            }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_persistent_keys_survive_reopen(ctx: &mut SessionTestContext) {
        let store = SessionStore::with_path(&ctx.path).unwrap();
        store.set_token("abc").unwrap();
        store.set_current_user("Anna Schmidt").unwrap();
        store.remember_email("anna@join.dev").unwrap();

        let reopened = SessionStore::with_path(&ctx.path).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("abc"));
        assert_eq!(reopened.current_user().as_deref(), Some("Anna Schmidt"));
        assert_eq!(reopened.remembered_email().as_deref(), Some("anna@join.dev"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_session_scope_is_not_persisted(ctx: &mut SessionTestContext) {
        let store = SessionStore::with_path(&ctx.path).unwrap();
        assert!(!store.intro_played());
        store.mark_intro_played();
        assert!(store.intro_played());
        assert!(store.clone().intro_played());

        let reopened = SessionStore::with_path(&ctx.path).unwrap();
        assert!(!reopened.intro_played());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_clear_login_keeps_remembered_email(ctx: &mut SessionTestContext) {
        let store = SessionStore::with_path(&ctx.path).unwrap();
        store.set_token("abc").unwrap();
        store.set_current_user("Anna").unwrap();
        store.remember_email("anna@join.dev").unwrap();

        store.clear_login().unwrap();
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(CURRENT_USER_KEY).is_none());
        assert!(store.remembered_email().is_some());

        store.logout().unwrap();
        let reopened = SessionStore::with_path(&ctx.path).unwrap();
        assert!(reopened.remembered_email().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_empty_file_opens_empty(ctx: &mut SessionTestContext) {
        std::fs::write(&ctx.path, "").unwrap();
        let store = SessionStore::with_path(&ctx.path).unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_progress_is_taken_once() {
        let store = SessionStore::in_memory();
        store.set_progress(Progress::AwaitFeedback).unwrap();

        assert_eq!(store.take_progress().unwrap(), Some(Progress::AwaitFeedback));
        assert_eq!(store.take_progress().unwrap(), None);
    }

    #[test]
    fn test_guest_detection_and_markers() {
        let store = SessionStore::in_memory();
        assert!(!store.is_guest());
        store.set_current_user(GUEST_USER).unwrap();
        assert!(store.is_guest());

        store.set_selected_priority(Priority::Low).unwrap();
        assert_eq!(store.selected_priority(), Some(Priority::Low));

        assert!(!store.greeting_animation_done());
        store.mark_greeting_animation_done().unwrap();
        assert!(store.greeting_animation_done());
    }
}
