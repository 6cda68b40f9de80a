//! Login screen: credential and guest login, remembered email, intro.

use super::Navigation;
use crate::api::{AuthError, Gateway, JoinClient, LoginSession};
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::msg_debug;
use anyhow::Result;

pub struct LoginPage<G> {
    client: JoinClient<G>,
    session: SessionStore,
    error: Option<Message>,
}

impl<G: Gateway> LoginPage<G> {
    pub fn new(client: JoinClient<G>, session: SessionStore) -> Self {
        LoginPage {
            client,
            session,
            error: None,
        }
    }

    pub fn client(&self) -> &JoinClient<G> {
        &self.client
    }

    /// `true` the first time it is called in a process; the host plays the
    /// logo intro then.
    pub fn start_intro(&self) -> bool {
        if self.session.intro_played() {
            return false;
        }
        self.session.mark_intro_played();
        true
    }

    /// Email to prefill, stored by an earlier "remember me" login.
    pub fn remembered_email(&self) -> Option<String> {
        self.session.remembered_email()
    }

    /// Error shown under the form after the last attempt.
    pub fn error(&self) -> Option<&Message> {
        self.error.as_ref()
    }

    /// Logs in with email and password.
    ///
    /// Rejections end up in [`LoginPage::error`] and yield `None`; only
    /// transport failures are `Err`.
    pub async fn login(&mut self, email: &str, password: &str, remember: bool) -> Result<Option<Navigation>> {
        self.error = None;
        let email = email.trim();
        let answer = self.client.login(email, password).await;
        let Some(login) = self.accept(answer)? else {
            return Ok(None);
        };
        if remember {
            self.session.remember_email(email)?;
        } else {
            self.session.forget_email()?;
        }
        self.start_session(login)?;
        Ok(Some(Navigation::Summary))
    }

    pub async fn guest_login(&mut self, email: &str) -> Result<Option<Navigation>> {
        self.error = None;
        let answer = self.client.guest_login(email.trim()).await;
        let Some(login) = self.accept(answer)? else {
            return Ok(None);
        };
        self.start_session(login)?;
        Ok(Some(Navigation::Summary))
    }

    fn accept(&mut self, answer: Result<LoginSession, AuthError>) -> Result<Option<LoginSession>> {
        match answer {
            Ok(login) => Ok(Some(login)),
            Err(AuthError::Transport(e)) => Err(e),
            Err(e) => {
                msg_debug!(format!("login rejected: {}", e));
                self.error = Some(e.message());
                Ok(None)
            }
        }
    }

    fn start_session(&self, login: LoginSession) -> Result<()> {
        self.session.set_token(&login.token)?;
        self.session.set_current_user(&login.name)?;
        self.client.set_token(Some(login.token));
        Ok(())
    }
}

/// Clears every stored key and the client's token.
pub fn logout<G: Gateway>(client: &JoinClient<G>, session: &SessionStore) -> Result<Navigation> {
    session.logout()?;
    client.set_token(None);
    Ok(Navigation::Login)
}
