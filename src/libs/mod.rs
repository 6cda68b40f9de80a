//! Core library modules for the Join client.
//!
//! ## Features
//!
//! - **Core Infrastructure**: configuration, data storage, session store, messaging, logging
//! - **Domain Records**: tasks, subtasks, contacts, summary counters
//! - **Form Logic**: field validation, task drafts, assignee picker
//! - **Presentation State**: overlay and popup transitions
//!
//! ## Usage
//!
//! ```rust
//! use join::libs::contact::{group_contacts, initials};
//! use join::libs::task::Progress;
//!
//! assert_eq!(initials("anna maria schmidt"), "AM");
//! assert_eq!("await feedback".parse::<Progress>().unwrap(), Progress::AwaitFeedback);
//! assert!(group_contacts(&[]).is_empty());
//! ```

pub mod config;
pub mod contact;
pub mod data_storage;
pub mod draft;
pub mod logging;
pub mod messages;
pub mod session;
pub mod summary;
pub mod task;
pub mod transition;
pub mod validation;
