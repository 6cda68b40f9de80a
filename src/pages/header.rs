//! Page header with the user avatar and the logout entry.

use super::Navigation;
use crate::api::{Gateway, JoinClient};
use crate::libs::contact::initials;
use crate::libs::session::SessionStore;
use crate::views;
use anyhow::Result;
use maud::Markup;

pub struct Header<G> {
    client: JoinClient<G>,
    session: SessionStore,
    menu_open: bool,
}

impl<G: Gateway> Header<G> {
    pub fn new(client: JoinClient<G>, session: SessionStore) -> Self {
        Header {
            client,
            session,
            menu_open: false,
        }
    }

    /// Initials of the current user, `"G"` without one.
    pub fn initials(&self) -> String {
        self.session
            .current_user()
            .map(|name| initials(&name))
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| "G".to_string())
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn logout(&mut self) -> Result<Navigation> {
        self.menu_open = false;
        super::login::logout(&self.client, &self.session)
    }

    pub fn render_avatar(&self) -> Markup {
        views::summary::header_avatar(&self.initials())
    }
}
