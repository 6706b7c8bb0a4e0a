use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::models::Alias;
use super::requests::{AliasCreate, AliasUpdate};
use crate::client::request::build_request_props;
use crate::client::transport::dispatch;
use crate::client::Migadu;
use crate::error::Result;
use crate::url_builder::SegmentName;

#[derive(Debug, Deserialize)]
struct AliasList {
    #[serde(default)]
    aliases: Vec<Alias>,
}

/// Handle for the alias endpoint of the client's domain.
#[derive(Debug, Clone, Copy)]
pub struct AliasApi<'a> {
    client: &'a Migadu,
}

impl<'a> AliasApi<'a> {
    pub(crate) fn new(client: &'a Migadu) -> Self {
        Self { client }
    }

    fn item_url(&self, local_part: &str) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.aliases_unchecked(Some(local_part));
        endpoint.render(Some(SegmentName::Aliases), false)
    }

    fn collection_url(&self) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.aliases_unchecked(None);
        endpoint.render(Some(SegmentName::Aliases), true)
    }

    /// Retrieves a single alias by its local part.
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, local_part: &str) -> Result<Alias> {
        let url = self.item_url(local_part)?;
        debug!("fetching alias at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await
    }

    /// Lists every alias of the domain.
    pub async fn get_all(&self) -> Result<Vec<Alias>> {
        let url = self.collection_url()?;
        let list: AliasList = dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await?;
        Ok(list.aliases)
    }

    /// Creates a new alias under the domain.
    pub async fn create(&self, data: &AliasCreate) -> Result<Alias> {
        let url = self.collection_url()?;
        let body = serde_json::to_value(data)?;
        debug!("creating alias {} at {url}", data.local_part);
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::POST, Some(body)),
        )
        .await
    }

    /// Updates an existing alias.
    pub async fn update(&self, local_part: &str, data: &AliasUpdate) -> Result<Alias> {
        let url = self.item_url(local_part)?;
        let body = serde_json::to_value(data)?;
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::PUT, Some(body)),
        )
        .await
    }

    /// Deletes an alias, returning its last state.
    pub async fn delete(&self, local_part: &str) -> Result<Alias> {
        let url = self.item_url(local_part)?;
        debug!("deleting alias at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::DELETE, None),
        )
        .await
    }
}
