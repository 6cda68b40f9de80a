//! Page controllers.
//!
//! Each page owns its state (loaded records, selection, open overlays,
//! popups) and talks to the backend through a [`JoinClient`](crate::api::JoinClient).
//! The host forwards UI events to the controller methods and re-renders the
//! fragments the controller produces.
//!
//! ## Pages
//!
//! - [`login`] / [`signup`]: authentication screens
//! - [`summary`] / [`header`]: landing page counters and the user avatar
//! - [`board`] / [`edit`]: kanban board with detail and edit overlays
//! - [`compose`]: add-task form, standalone or inside the board overlay
//! - [`contacts`]: contact directory

use crate::libs::validation::FieldError;

pub mod board;
pub mod compose;
pub mod contacts;
pub mod edit;
pub mod header;
pub mod login;
pub mod signup;
pub mod summary;

/// Result of a user action that may write to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The change was stored.
    Saved,
    /// Guest user; nothing was sent and a warning popup is up.
    Denied,
    /// Form input rejected before anything was sent.
    Invalid(Vec<FieldError>),
    /// The backend refused or the target could not be found.
    Failed,
}

/// Where the host should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Summary,
    Board,
    Login,
    /// Composer inside the board overlay finished; close the overlay.
    CloseAddTaskOverlay,
}
