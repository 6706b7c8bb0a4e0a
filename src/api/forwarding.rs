use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::models::Forwarding;
use super::requests::{ForwardingCreate, ForwardingUpdate};
use crate::client::request::build_request_props;
use crate::client::transport::dispatch;
use crate::client::Migadu;
use crate::error::Result;
use crate::url_builder::SegmentName;

#[derive(Debug, Deserialize)]
struct ForwardingList {
    #[serde(default)]
    forwardings: Vec<Forwarding>,
}

/// Handle for the forwarding endpoint.
///
/// Forwardings live under a mailbox and are keyed by the destination
/// address, so every method names the owning mailbox's local part.
#[derive(Debug, Clone, Copy)]
pub struct ForwardingApi<'a> {
    client: &'a Migadu,
}

impl<'a> ForwardingApi<'a> {
    pub(crate) fn new(client: &'a Migadu) -> Self {
        Self { client }
    }

    fn item_url(&self, mailbox: &str, address: &str) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.mailboxes_unchecked(Some(mailbox));
        endpoint.forwardings_unchecked(Some(address));
        endpoint.render(Some(SegmentName::Forwardings), false)
    }

    fn collection_url(&self, mailbox: &str) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.mailboxes_unchecked(Some(mailbox));
        endpoint.forwardings_unchecked(None);
        endpoint.render(Some(SegmentName::Forwardings), true)
    }

    /// Retrieves a single forwarding of a mailbox by destination address.
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, mailbox: &str, address: &str) -> Result<Forwarding> {
        let url = self.item_url(mailbox, address)?;
        debug!("fetching forwarding at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await
    }

    /// Lists every forwarding of a mailbox.
    pub async fn get_all(&self, mailbox: &str) -> Result<Vec<Forwarding>> {
        let url = self.collection_url(mailbox)?;
        let list: ForwardingList = dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await?;
        Ok(list.forwardings)
    }

    /// Creates a new forwarding under a mailbox.
    pub async fn create(&self, mailbox: &str, data: &ForwardingCreate) -> Result<Forwarding> {
        let url = self.collection_url(mailbox)?;
        let body = serde_json::to_value(data)?;
        debug!("creating forwarding to {} at {url}", data.address);
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::POST, Some(body)),
        )
        .await
    }

    /// Updates an existing forwarding.
    pub async fn update(
        &self,
        mailbox: &str,
        address: &str,
        data: &ForwardingUpdate,
    ) -> Result<Forwarding> {
        let url = self.item_url(mailbox, address)?;
        let body = serde_json::to_value(data)?;
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::PUT, Some(body)),
        )
        .await
    }

    /// Deletes a forwarding, returning its last state.
    pub async fn delete(&self, mailbox: &str, address: &str) -> Result<Forwarding> {
        let url = self.item_url(mailbox, address)?;
        debug!("deleting forwarding at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::DELETE, None),
        )
        .await
    }
}
