// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use linkshare_base::invalid_argument;
use linkshare_base::msg::link_api::{
    CreatedLink, LinkCollection, LinkDetails, LinkFilter, NewLink,
};

use crate::base_uri::BaseUri;
use crate::client::Result;
use crate::http_client::{ApiRequest, RequestExecutor};

pub(crate) static LINKS_PATH: &str = "/pubapi/v1/links";

/// List, inspect, create and delete shareable links.
///
/// The service keeps no state between calls, clones share the same executor.
#[derive(Clone)]
pub struct LinkService {
    base_uri: BaseUri,
    executor: Arc<dyn RequestExecutor>,
}

impl LinkService {
    pub fn new(base_uri: BaseUri, executor: Arc<dyn RequestExecutor>) -> Self {
        Self { base_uri, executor }
    }

    /// Base URL of the provider.
    pub fn url(&self) -> &str {
        self.base_uri.as_str()
    }

    /// List the links visible to the current user.
    ///
    /// # Arguments
    ///
    /// * `filter` - Only the filters which are set go into the query.
    ///
    /// # Returns
    ///
    /// The page of link ids exactly as the provider returned it.
    pub async fn list_links(&self, filter: &LinkFilter) -> Result<LinkCollection> {
        let url = self.base_uri.build(LINKS_PATH, &filter.query_pairs())?;
        self.send_and_receive_json(ApiRequest::new(Method::GET, url.as_str()))
            .await
    }

    /// Get the details of a link.
    ///
    /// # Arguments
    ///
    /// * `link_id` - Id of the link, must not be blank.
    pub async fn get_link_details(&self, link_id: &str) -> Result<LinkDetails> {
        let url = self.link_url(link_id)?;
        self.send_and_receive_json(ApiRequest::new(Method::GET, url.as_str()))
            .await
    }

    /// Create a link.
    ///
    /// # Arguments
    ///
    /// * `link` - The link to create. The path must not be blank, a leading `/` is added if it is missing.
    ///
    /// # Returns
    ///
    /// The created link with all its URLs.
    pub async fn create_link(&self, link: &NewLink) -> Result<CreatedLink> {
        link.validate()?;

        let url = self.base_uri.build(LINKS_PATH, &[])?;
        let request = ApiRequest::new(Method::POST, url.as_str()).json_body(&link.to_wire())?;
        let created: CreatedLink = self.send_and_receive_json(request).await?;
        debug!(
            "Created {} link(s) for '{}'",
            created.links.len(),
            link.normalized_path()
        );
        Ok(created)
    }

    /// Create a link from an optional request, `None` is an invalid argument.
    pub async fn create_link_opt(&self, link: Option<&NewLink>) -> Result<CreatedLink> {
        match link {
            Some(link) => self.create_link(link).await,
            None => Err(invalid_argument!("A new link must be given")),
        }
    }

    /// Delete a link.
    ///
    /// # Arguments
    ///
    /// * `link_id` - Id of the link, must not be blank.
    ///
    /// # Returns
    ///
    /// `true` if the provider accepted the request. The response has no body to check.
    pub async fn delete_link(&self, link_id: &str) -> Result<bool> {
        let url = self.link_url(link_id)?;
        self.executor
            .execute(ApiRequest::new(Method::DELETE, url.as_str()))
            .await?;
        Ok(true)
    }

    fn link_url(&self, link_id: &str) -> Result<Url> {
        if link_id.trim().is_empty() {
            return Err(invalid_argument!("Link id must not be empty"));
        }
        self.base_uri.build_with_segment(LINKS_PATH, link_id)
    }

    async fn send_and_receive_json<Out: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Out> {
        let body = self.executor.execute(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
