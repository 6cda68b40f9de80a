//! Contact endpoints.

use super::{decode_list, paths, Gateway, JoinClient};
use crate::libs::contact::{Contact, ContactData};
use anyhow::Result;
use serde_json::Value;

impl<G: Gateway> JoinClient<G> {
    /// All contacts. A refused load yields an empty list.
    pub async fn contacts(&self) -> Result<Vec<Contact>> {
        decode_list(paths::CONTACTS, self.gateway.load(paths::CONTACTS).await?)
    }

    pub async fn create_contact(&self, data: &ContactData) -> Result<Value> {
        self.gateway.create(paths::CONTACTS, &serde_json::to_value(data)?).await
    }

    pub async fn replace_contact(&self, contact_id: u64, data: &ContactData) -> Result<Value> {
        self.gateway.replace(&paths::contact(contact_id), &serde_json::to_value(data)?).await
    }

    pub async fn delete_contact(&self, contact_id: u64) -> Result<bool> {
        self.gateway.delete(&paths::contact(contact_id)).await
    }
}
