use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::models::Rewrite;
use super::requests::{RewriteCreate, RewriteUpdate};
use crate::client::request::build_request_props;
use crate::client::transport::dispatch;
use crate::client::Migadu;
use crate::error::Result;
use crate::url_builder::SegmentName;

#[derive(Debug, Deserialize)]
struct RewriteList {
    #[serde(default)]
    rewrites: Vec<Rewrite>,
}

/// Handle for the rewrite-rule endpoint of the client's domain.
#[derive(Debug, Clone, Copy)]
pub struct RewriteApi<'a> {
    client: &'a Migadu,
}

impl<'a> RewriteApi<'a> {
    pub(crate) fn new(client: &'a Migadu) -> Self {
        Self { client }
    }

    fn item_url(&self, name: &str) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.rewrites_unchecked(Some(name));
        endpoint.render(Some(SegmentName::Rewrites), false)
    }

    fn collection_url(&self) -> Result<String> {
        let mut endpoint = self.client.endpoint()?;
        endpoint.rewrites_unchecked(None);
        endpoint.render(Some(SegmentName::Rewrites), true)
    }

    /// Retrieves a single rewrite rule by name.
    #[instrument(level = "debug", skip(self))]
    pub async fn get(&self, name: &str) -> Result<Rewrite> {
        let url = self.item_url(name)?;
        debug!("fetching rewrite at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await
    }

    /// Lists every rewrite rule of the domain.
    pub async fn get_all(&self) -> Result<Vec<Rewrite>> {
        let url = self.collection_url()?;
        let list: RewriteList = dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::GET, None),
        )
        .await?;
        Ok(list.rewrites)
    }

    /// Creates a new rewrite rule under the domain.
    pub async fn create(&self, data: &RewriteCreate) -> Result<Rewrite> {
        let url = self.collection_url()?;
        let body = serde_json::to_value(data)?;
        debug!("creating rewrite {} at {url}", data.name);
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::POST, Some(body)),
        )
        .await
    }

    /// Updates an existing rewrite rule.
    pub async fn update(&self, name: &str, data: &RewriteUpdate) -> Result<Rewrite> {
        let url = self.item_url(name)?;
        let body = serde_json::to_value(data)?;
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::PUT, Some(body)),
        )
        .await
    }

    /// Deletes a rewrite rule, returning its last state.
    pub async fn delete(&self, name: &str) -> Result<Rewrite> {
        let url = self.item_url(name)?;
        debug!("deleting rewrite at {url}");
        dispatch(
            self.client.http(),
            build_request_props(url, self.client.basic_auth(), Method::DELETE, None),
        )
        .await
    }
}
