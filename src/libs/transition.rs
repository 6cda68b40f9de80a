//! Show/hide state of overlays and notification popups.
//!
//! A [`Transition`] walks `Hidden → Entering → Shown → Exiting → Hidden`.
//! Time only moves when the host calls [`Transition::advance`] with the
//! elapsed duration, so nothing in the client sleeps or spawns timers.
//!
//! ```rust
//! use join::libs::config::UiConfig;
//! use join::libs::transition::{Phase, Transition};
//! use std::time::Duration;
//!
//! let mut overlay = Transition::overlay(&UiConfig::default());
//! overlay.show();
//! assert_eq!(overlay.advance(Duration::from_millis(200)), Phase::Shown);
//! ```

use crate::libs::config::UiConfig;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Entering,
    Shown,
    Exiting,
}

impl Phase {
    /// Class the host puts on the animated element.
    pub fn css_class(&self) -> &'static str {
        match self {
            Phase::Hidden => "d-none",
            Phase::Entering => "entering",
            Phase::Shown => "shown",
            Phase::Exiting => "exiting",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    phase: Phase,
    elapsed: Duration,
    enter: Duration,
    /// `None` stays shown until [`Transition::hide`].
    dwell: Option<Duration>,
    exit: Duration,
}

impl Transition {
    pub fn new(enter: Duration, dwell: Option<Duration>, exit: Duration) -> Self {
        Transition {
            phase: Phase::Hidden,
            elapsed: Duration::ZERO,
            enter,
            dwell,
            exit,
        }
    }

    /// Slides in and out, stays open until closed.
    pub fn overlay(ui: &UiConfig) -> Self {
        Self::new(ui.overlay_slide(), None, ui.overlay_slide())
    }

    /// Appears at once, fades out after the visible time.
    pub fn popup(ui: &UiConfig) -> Self {
        Self::new(Duration::ZERO, Some(ui.popup_visible()), ui.popup_fade())
    }

    /// "Task added to board" confirmation of the composer.
    pub fn success_popup(ui: &UiConfig) -> Self {
        Self::new(ui.success_popup_slide(), Some(ui.success_popup_visible()), ui.success_popup_slide())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    pub fn show(&mut self) {
        if matches!(self.phase, Phase::Hidden | Phase::Exiting) {
            self.set(Phase::Entering);
        }
    }

    pub fn hide(&mut self) {
        if matches!(self.phase, Phase::Entering | Phase::Shown) {
            self.set(Phase::Exiting);
        }
    }

    /// Moves time forward, possibly through several phases.
    pub fn advance(&mut self, mut delta: Duration) -> Phase {
        loop {
            let limit = match self.phase {
                Phase::Hidden => break,
                Phase::Entering => Some(self.enter),
                Phase::Shown => self.dwell,
                Phase::Exiting => Some(self.exit),
            };
            let Some(limit) = limit else { break };

            let remaining = limit.saturating_sub(self.elapsed);
            if delta < remaining {
                self.elapsed += delta;
                break;
            }
            delta -= remaining;
            let next = match self.phase {
                Phase::Entering => Phase::Shown,
                Phase::Shown => Phase::Exiting,
                _ => Phase::Hidden,
            };
            self.set(next);
        }
        self.phase
    }

    fn set(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed = Duration::ZERO;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub message: Message,
    pub kind: PopupKind,
    pub transition: Transition,
}

/// Popups currently on screen for one page.
#[derive(Debug, Clone)]
pub struct Notifier {
    ui: UiConfig,
    popups: Vec<Popup>,
}

impl Notifier {
    pub fn new(ui: UiConfig) -> Self {
        Notifier { ui, popups: Vec::new() }
    }

    pub fn success(&mut self, message: Message) {
        msg_success!(message);
        let transition = Transition::popup(&self.ui);
        self.push(message, PopupKind::Success, transition);
    }

    pub fn warning(&mut self, message: Message) {
        msg_warning!(message);
        let transition = Transition::popup(&self.ui);
        self.push(message, PopupKind::Warning, transition);
    }

    /// Sliding confirmation used after a task was created.
    pub fn task_added(&mut self) {
        msg_success!(Message::TaskAdded);
        let transition = Transition::success_popup(&self.ui);
        self.push(Message::TaskAdded, PopupKind::Success, transition);
    }

    fn push(&mut self, message: Message, kind: PopupKind, mut transition: Transition) {
        transition.show();
        self.popups.push(Popup { message, kind, transition });
    }

    /// Advances every popup and drops the ones that finished.
    pub fn advance(&mut self, delta: Duration) {
        for popup in &mut self.popups {
            popup.transition.advance(delta);
        }
        self.popups.retain(|p| p.transition.is_visible());
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.popups.last().map(|p| &p.message)
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier::new(UiConfig::default())
    }
}
