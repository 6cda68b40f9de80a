//! Sign-up screen.

use super::Navigation;
use crate::api::{AuthError, Gateway, JoinClient, Registration};
use crate::libs::config::UiConfig;
use crate::libs::contact::{full_initials, random_color, ContactData};
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::libs::transition::Notifier;
use anyhow::Result;
use std::time::Duration;

/// Values typed into the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub policy_accepted: bool,
}

impl SignUpForm {
    /// The sign-up button is enabled only when this holds.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.policy_accepted
    }

    fn registration(&self) -> Registration {
        Registration {
            full_name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            repeated_password: self.confirm_password.clone(),
        }
    }
}

pub struct SignUpPage<G> {
    client: JoinClient<G>,
    session: SessionStore,
    error: Option<AuthError>,
    pub form: SignUpForm,
    pub notifier: Notifier,
}

impl<G: Gateway> SignUpPage<G> {
    pub fn new(client: JoinClient<G>, session: SessionStore, ui: &UiConfig) -> Self {
        SignUpPage {
            client,
            session,
            error: None,
            form: SignUpForm::default(),
            notifier: Notifier::new(ui.clone()),
        }
    }

    pub fn client(&self) -> &JoinClient<G> {
        &self.client
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_complete()
    }

    pub fn error(&self) -> Option<&AuthError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<Message> {
        self.error.as_ref().map(AuthError::message)
    }

    /// Registers the account and its contact entry.
    ///
    /// The contact is created with the new account's token, which is
    /// dropped again afterwards: the user has to log in. Rejections end up
    /// in [`SignUpPage::error`] and yield `None`.
    pub async fn submit(&mut self) -> Result<Option<Navigation>> {
        self.error = None;
        if !self.form.is_complete() {
            return Ok(None);
        }
        if self.form.password != self.form.confirm_password {
            self.error = Some(AuthError::PasswordMismatch);
            return Ok(None);
        }

        match self.register().await {
            Ok(()) => {}
            Err(AuthError::Transport(e)) => return Err(e),
            Err(e) => {
                self.error = Some(e);
                return Ok(None);
            }
        }

        self.notifier.success(Message::SignUpSuccessful);
        self.form = SignUpForm::default();
        Ok(Some(Navigation::Login))
    }

    async fn register(&self) -> Result<(), AuthError> {
        let registration = self.form.registration();
        if self.client.email_taken(&registration.email).await? {
            return Err(AuthError::EmailTaken);
        }
        let token = self.client.register(&registration).await?;

        let contact = ContactData {
            name: registration.full_name.clone(),
            email: registration.email.clone(),
            phone: String::new(),
            initials: full_initials(&registration.full_name),
            color: random_color(),
        };
        self.client.set_token(Some(token));
        let created = self.client.create_contact(&contact).await;

        self.client.set_token(None);
        self.session.clear_login()?;
        created?;
        Ok(())
    }

    pub fn advance(&mut self, delta: Duration) {
        self.notifier.advance(delta);
    }
}
