//! Summary page: board counters and the personal greeting.

use crate::api::{Gateway, JoinClient};
use crate::libs::session::{SessionStore, GUEST_USER};
use crate::libs::summary::{greeting, Summary, NARROW_LAYOUT_MAX_WIDTH};
use crate::views::{self, summary::Greeting};
use anyhow::Result;
use maud::Markup;

pub struct SummaryPage<G> {
    client: JoinClient<G>,
    session: SessionStore,
    summary: Summary,
    greeting: Option<Greeting>,
}

impl<G: Gateway> SummaryPage<G> {
    pub fn new(client: JoinClient<G>, session: SessionStore) -> Self {
        SummaryPage {
            client,
            session,
            summary: Summary::default(),
            greeting: None,
        }
    }

    pub fn client(&self) -> &JoinClient<G> {
        &self.client
    }

    /// Fetches the counters and prepares the greeting for `hour` (0..=23).
    ///
    /// On layouts up to [`NARROW_LAYOUT_MAX_WIDTH`] the greeting animates
    /// once; the marker is stored on first play.
    pub async fn load(&mut self, hour: u32, viewport_width: u32) -> Result<()> {
        if let Some(summary) = self.client.summary().await? {
            self.summary = summary;
        }

        let animate = viewport_width <= NARROW_LAYOUT_MAX_WIDTH && !self.session.greeting_animation_done();
        if animate {
            self.session.mark_greeting_animation_done()?;
        }
        self.greeting = Some(Greeting {
            salutation: greeting(hour),
            name: self.session.current_user().unwrap_or_else(|| GUEST_USER.to_string()),
            animate,
        });
        Ok(())
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn greeting(&self) -> Option<&Greeting> {
        self.greeting.as_ref()
    }

    pub fn render(&self) -> Option<Markup> {
        self.greeting.as_ref().map(|g| views::summary::page(&self.summary, g))
    }
}
