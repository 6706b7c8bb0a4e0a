use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::models::Identity;
use super::requests::{IdentityCreate, IdentityUpdate};
use crate::client::request::build_request_props;
use crate::client::transport::dispatch;
use crate::client::Migadu;
use crate::error::Result;
use crate::url_builder::SegmentName;

#[derive(Debug, Deserialize)]
struct IdentityList {
    #[serde(default)]
    identities: Vec<Identity>,
}

/// Handle for the identity endpoint.
///
/// Identities live under a mailbox, so every method names the owning
/// mailbox's local part alongside its own arguments.
#[derive(Debug, Clone, Copy)]
pub struct IdentityApi<'a> {
    client: &'a Migadu,
}

impl<'a> IdentityApi<'a> {
    pub(crate) fn new(client: &'a Migadu) -> Self {
        Self { client }
    }

    fn item_url(&self, mailbox: &str, local_part: &str) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.mailboxes_unchecked(Some(mailbox));
        endpoint.identities_unchecked(Some(local_part));
        endpoint.render(Some(SegmentName::Identities), false)
    }

    fn collection_url(&self, mailbox: &str) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.mailboxes_unchecked(Some(mailbox));
        endpoint.identities_unchecked(None);
        endpoint.render(Some(SegmentName::Identities), true)
    }

    /// Retrieves a single identity of a mailbox by its local part.
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, mailbox: &str, local_part: &str) -> Result<Identity> {
        let url = self.item_url(mailbox, local_part)?;
        debug!("fetching identity at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await
    }

    /// Lists every identity of a mailbox.
    pub async fn get_all(&self, mailbox: &str) -> Result<Vec<Identity>> {
        let url = self.collection_url(mailbox)?;
        let list: IdentityList = dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await?;
        Ok(list.identities)
    }

    /// Creates a new identity under a mailbox.
    pub async fn create(&self, mailbox: &str, data: &IdentityCreate) -> Result<Identity> {
        let url = self.collection_url(mailbox)?;
        let body = serde_json::to_value(data)?;
        debug!("creating identity {} at {url}", data.local_part);
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::POST, Some(body)),
        )
        .await
    }

    /// Updates an existing identity.
    pub async fn update(
        &self,
        mailbox: &str,
        local_part: &str,
        data: &IdentityUpdate,
    ) -> Result<Identity> {
        let url = self.item_url(mailbox, local_part)?;
        let body = serde_json::to_value(data)?;
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::PUT, Some(body)),
        )
        .await
    }

    /// Deletes an identity, returning its last state.
    pub async fn delete(&self, mailbox: &str, local_part: &str) -> Result<Identity> {
        let url = self.item_url(mailbox, local_part)?;
        debug!("deleting identity at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::DELETE, None),
        )
        .await
    }
}
