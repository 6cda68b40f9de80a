//! Output macros for [`Message`](super::Message) values.
//!
//! Every macro takes anything implementing `Display` (in practice a
//! `Message`) and routes it according to the debug mode:
//!
//! ```text
//! msg_warning!(Message::NoPermissionEditTask)
//!        │
//!        ├── JOIN_DEBUG or RUST_LOG set ──▶ tracing::warn!
//!        └── otherwise ──────────────────▶ println!
//! ```
//!
//! Popups raised by page controllers go through `msg_success!` or
//! `msg_warning!`, so a host running without a subscriber still sees what
//! the user was told. `msg_debug!` is silent outside debug mode.
//!
//! ```rust
//! use join::libs::messages::Message;
//! use join::{msg_debug, msg_success};
//!
//! msg_success!(Message::ContactAdded);
//! msg_debug!(Message::LoadFailed("join/tasks".into()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// `true` when `JOIN_DEBUG` or `RUST_LOG` is set. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("JOIN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Confirmation shown to the user ("Contact added successfully").
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Guest-permission and other user-facing warnings.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` carrying the message text.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}
