use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::models::Mailbox;
use super::requests::{MailboxCreate, MailboxUpdate};
use crate::client::request::build_request_props;
use crate::client::transport::dispatch;
use crate::client::Migadu;
use crate::error::Result;
use crate::url_builder::SegmentName;

/// Collection responses arrive wrapped in a single-key object.
#[derive(Debug, Deserialize)]
struct MailboxList {
    #[serde(default)]
    mailboxes: Vec<Mailbox>,
}

/// Handle for the mailbox endpoint of the client's domain.
///
/// Obtained from [`Migadu::mailbox`]. Every method assembles a fresh
/// endpoint URL and issues exactly one HTTP request.
#[derive(Debug, Clone, Copy)]
pub struct MailboxApi<'a> {
    client: &'a Migadu,
}

impl<'a> MailboxApi<'a> {
    pub(crate) fn new(client: &'a Migadu) -> Self {
        Self { client }
    }

    fn item_url(&self, local_part: &str) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.mailboxes_unchecked(Some(local_part));
        endpoint.render(Some(SegmentName::Mailboxes), false)
    }

    fn collection_url(&self) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.mailboxes_unchecked(None);
        endpoint.render(Some(SegmentName::Mailboxes), true)
    }

    /// Retrieves a single mailbox by its local part.
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, local_part: &str) -> Result<Mailbox> {
        let url = self.item_url(local_part)?;
        debug!("fetching mailbox at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await
    }

    /// Lists every mailbox of the domain.
    #[instrument(level = "debug", skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Mailbox>> {
        let url = self.collection_url()?;
        let list: MailboxList = dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await?;
        Ok(list.mailboxes)
    }

    /// Creates a new mailbox under the domain.
    pub async fn create(&self, data: &MailboxCreate) -> Result<Mailbox> {
        let url = self.collection_url()?;
        let body = serde_json::to_value(data)?;
        debug!("creating mailbox {} at {url}", data.local_part);
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::POST, Some(body)),
        )
        .await
    }

    /// Updates an existing mailbox.
    pub async fn update(&self, local_part: &str, data: &MailboxUpdate) -> Result<Mailbox> {
        let url = self.item_url(local_part)?;
        let body = serde_json::to_value(data)?;
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::PUT, Some(body)),
        )
        .await
    }

    /// Deletes a mailbox, returning its last state.
    pub async fn delete(&self, local_part: &str) -> Result<Mailbox> {
        let url = self.item_url(local_part)?;
        debug!("deleting mailbox at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::DELETE, None),
        )
        .await
    }
}
