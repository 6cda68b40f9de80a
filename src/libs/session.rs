//! Client-side session state.
//!
//! Two scopes are kept:
//!
//! - **persistent**: survives restarts, flushed as JSON to `session.json` in
//!   the data directory after every write (login token, current user,
//!   remembered email, composer hand-over values, greeting marker);
//! - **session**: lives as long as the process (intro animation marker).
//!
//! Clones share the same state, so every page controller can hold its own
//! handle.

use super::data_storage::DataStorage;
use crate::libs::task::{Priority, Progress};
use anyhow::Result;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const SESSION_FILE_NAME: &str = "session.json";

pub const TOKEN_KEY: &str = "token";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const PROGRESS_KEY: &str = "progressStatus";
pub const PRIORITY_KEY: &str = "selectedPriority";
pub const GREETING_DONE_KEY: &str = "greetingAnimationDone";
pub const ANIMATION_KEY: &str = "animation";

/// Display name the backend assigns to guest logins.
pub const GUEST_USER: &str = "Guest";

#[derive(Debug, Default)]
struct State {
    persistent: BTreeMap<String, String>,
    session: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: Option<PathBuf>,
    state: Arc<RwLock<State>>,
}

impl SessionStore {
    /// Store without a backing file.
    pub fn in_memory() -> Self {
        SessionStore {
            path: None,
            state: Arc::new(RwLock::new(State::default())),
        }
    }

    /// Opens `session.json` in the platform data directory.
    pub fn open() -> Result<Self> {
        let path = DataStorage::new().get_path(SESSION_FILE_NAME)?;
        Self::with_path(&path)
    }

    /// Opens the store backed by `path`, loading it when it exists.
    pub fn with_path(path: &Path) -> Result<Self> {
        let persistent = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        Ok(SessionStore {
            path: Some(path.to_path_buf()),
            state: Arc::new(RwLock::new(State {
                persistent,
                session: HashMap::new(),
            })),
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.state.read().persistent.get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.state.write().persistent.insert(key.to_string(), value.to_string());
        self.flush()
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let removed = self.state.write().persistent.remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.state.read().persistent)?;
        fs::write(path, json)?;
        Ok(())
    }

    // --- login state ---

    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.set(TOKEN_KEY, token)
    }

    pub fn current_user(&self) -> Option<String> {
        self.get(CURRENT_USER_KEY)
    }

    pub fn set_current_user(&self, name: &str) -> Result<()> {
        self.set(CURRENT_USER_KEY, name)
    }

    /// Drops token and current user, keeping the remembered email.
    pub fn clear_login(&self) -> Result<()> {
        self.remove(TOKEN_KEY)?;
        self.remove(CURRENT_USER_KEY)
    }

    pub fn is_guest(&self) -> bool {
        self.current_user().as_deref() == Some(GUEST_USER)
    }

    /// Clears every persistent key.
    pub fn logout(&self) -> Result<()> {
        self.state.write().persistent.clear();
        self.flush()
    }

    pub fn remembered_email(&self) -> Option<String> {
        self.get(USER_EMAIL_KEY)
    }

    pub fn remember_email(&self, email: &str) -> Result<()> {
        self.set(USER_EMAIL_KEY, email)
    }

    pub fn forget_email(&self) -> Result<()> {
        self.remove(USER_EMAIL_KEY)
    }

    // --- composer hand-over ---

    pub fn set_progress(&self, progress: Progress) -> Result<()> {
        self.set(PROGRESS_KEY, progress.as_str())
    }

    /// Returns the stored progress once and removes it.
    pub fn take_progress(&self) -> Result<Option<Progress>> {
        let value = self.get(PROGRESS_KEY);
        self.remove(PROGRESS_KEY)?;
        Ok(value.and_then(|v| v.parse().ok()))
    }

    pub fn selected_priority(&self) -> Option<Priority> {
        self.get(PRIORITY_KEY).and_then(|v| v.parse().ok())
    }

    pub fn set_selected_priority(&self, priority: Priority) -> Result<()> {
        self.set(PRIORITY_KEY, priority.as_str())
    }

    // --- animation markers ---

    pub fn greeting_animation_done(&self) -> bool {
        self.get(GREETING_DONE_KEY).as_deref() == Some("true")
    }

    pub fn mark_greeting_animation_done(&self) -> Result<()> {
        self.set(GREETING_DONE_KEY, "true")
    }

    /// Whether the login intro already played in this process.
    pub fn intro_played(&self) -> bool {
        self.state.read().session.contains_key(ANIMATION_KEY)
    }

    pub fn mark_intro_played(&self) {
        self.state.write().session.insert(ANIMATION_KEY.to_string(), "true".to_string());
    }
}
