// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;
use std::time::Duration;

use linkshare_base::error::LinkShareError;
use linkshare_base::invalid_argument;
use linkshare_base::msg::link_api::{
    CreatedLink, LinkCollection, LinkDetails, LinkFilter, NewLink,
};

use crate::base_uri::BaseUri;
use crate::http_client::{HttpClient, RequestExecutor, DEFAULT_TIMEOUT};
use crate::links::LinkService;

pub type Result<T> = std::result::Result<T, LinkShareError>;

pub struct LinkShareClientBuilder {
    url: String,
    api_token: String,
    timeout: Duration,
    verify_ssl: bool,
    executor: Option<Arc<dyn RequestExecutor>>,
}

impl LinkShareClientBuilder {
    fn new() -> Self {
        Self {
            url: String::new(),
            api_token: String::new(),
            timeout: DEFAULT_TIMEOUT,
            verify_ssl: true,
            executor: None,
        }
    }

    /// Build the client.
    ///
    /// # Panics
    ///
    /// Panics if the URL is not set or invalid, see [`LinkShareClientBuilder::try_build`].
    pub fn build(self) -> LinkShareClient {
        self.try_build()
            .unwrap_or_else(|err| panic!("Failed to build the client: {}", err))
    }

    /// Build the client or return an error if the settings are invalid.
    pub fn try_build(self) -> Result<LinkShareClient> {
        if self.url.is_empty() {
            return Err(invalid_argument!("URL must be set"));
        }

        let base_uri = BaseUri::parse(&self.url)?;
        let executor: Arc<dyn RequestExecutor> = match self.executor {
            Some(executor) => executor,
            None => Arc::new(HttpClient::new(
                &self.api_token,
                self.timeout,
                self.verify_ssl,
            )?),
        };

        Ok(LinkShareClient {
            service: LinkService::new(base_uri, executor),
            api_token: self.api_token,
        })
    }

    /// Set the URL of the provider, e.g. `https://acme.example.com`.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    /// Set the API token to use for authentication.
    pub fn api_token(mut self, api_token: &str) -> Self {
        self.api_token = api_token.to_string();
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Verify the TLS certificate of the provider. Default is true.
    pub fn verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    /// Use a custom request executor instead of the built-in HTTP client.
    ///
    /// The API token, timeout and SSL settings are then up to the executor.
    pub fn executor(mut self, executor: Arc<dyn RequestExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }
}

/// Link sharing client.
#[derive(Clone)]
pub struct LinkShareClient {
    service: LinkService,
    api_token: String,
}

impl LinkShareClient {
    /// Create a new LinkShareClientBuilder.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use linkshare_rs::LinkShareClient;
    ///
    /// let client = LinkShareClient::builder()
    ///    .url("https://acme.example.com")
    ///    .api_token("my-api-token")
    ///    .build();
    /// ```
    pub fn builder() -> LinkShareClientBuilder {
        LinkShareClientBuilder::new()
    }

    /// URL of the provider.
    pub fn url(&self) -> &str {
        self.service.url()
    }

    /// API token used for authentication.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// The links resource.
    pub fn links(&self) -> &LinkService {
        &self.service
    }

    /// List links, see [`LinkService::list_links`].
    ///
    /// ```no_run
    /// use linkshare_rs::{LinkFilter, LinkShareClient, LinkShareError, LinkType};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), LinkShareError> {
    ///     let client = LinkShareClient::builder()
    ///         .url("https://acme.example.com")
    ///         .api_token("my-api-token")
    ///         .build();
    ///     let filter = LinkFilter::new().path("/Shared/Documents").link_type(LinkType::File);
    ///     for id in client.list_links(&filter).await?.ids {
    ///         let details = client.get_link_details(&id).await?;
    ///         println!("{} -> {}", details.path, details.url);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list_links(&self, filter: &LinkFilter) -> Result<LinkCollection> {
        self.service.list_links(filter).await
    }

    /// Get the details of a link, see [`LinkService::get_link_details`].
    pub async fn get_link_details(&self, link_id: &str) -> Result<LinkDetails> {
        self.service.get_link_details(link_id).await
    }

    /// Create a link, see [`LinkService::create_link`].
    pub async fn create_link(&self, link: &NewLink) -> Result<CreatedLink> {
        self.service.create_link(link).await
    }

    /// Delete a link, see [`LinkService::delete_link`].
    pub async fn delete_link(&self, link_id: &str) -> Result<bool> {
        self.service.delete_link(link_id).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::links::tests::{executor, MockExecutor};
    use bytes::Bytes;
    use linkshare_base::error::ErrorCode;
    use linkshare_base::msg::link_api::{LinkAccessibility, LinkType};
    use mockito::{Matcher, Server, ServerGuard};
    use rstest::{fixture, rstest};

    mod builder {
        use super::*;

        #[rstest]
        fn test_build() {
            let client = LinkShareClient::builder()
                .url("https://acme.example.com/")
                .api_token("secret")
                .timeout(Duration::from_secs(5))
                .verify_ssl(false)
                .build();
            assert_eq!(client.url(), "https://acme.example.com");
            assert_eq!(client.api_token(), "secret");
        }

        #[rstest]
        fn test_no_url() {
            let err = LinkShareClient::builder().try_build().err().unwrap();
            assert!(err.is_invalid_argument());
        }

        #[rstest]
        fn test_invalid_url() {
            let err = LinkShareClient::builder()
                .url("acme.example.com")
                .try_build()
                .err()
                .unwrap();
            assert_eq!(err.status(), ErrorCode::UrlParseError);
        }

        #[rstest]
        #[should_panic(expected = "Failed to build the client")]
        fn test_build_panics() {
            LinkShareClient::builder().build();
        }

        #[rstest]
        #[tokio::test]
        async fn test_custom_executor(mut executor: MockExecutor) {
            executor
                .expect_execute()
                .withf(|request| request.url == "https://acme.example.com/pubapi/v1/links")
                .times(1)
                .returning(|_| Ok(Bytes::from(r#"{"ids":["x"]}"#)));

            let client = LinkShareClient::builder()
                .url("https://acme.example.com")
                .executor(Arc::new(executor))
                .build();
            let list = client.list_links(&LinkFilter::default()).await.unwrap();
            assert_eq!(list.ids, vec!["x"]);
        }
    }

    mod links_api {
        use super::*;

        #[rstest]
        #[tokio::test]
        async fn test_list_links(#[future] server: ServerGuard) {
            let mut server = server.await;
            let mock = server
                .mock("GET", "/pubapi/v1/links")
                .match_header("authorization", "Bearer test-token")
                .match_query(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("path".into(), "/Shared/Q1 Reports".into()),
                    Matcher::UrlEncoded("type".into(), "file".into()),
                ]))
                .with_status(200)
                .with_body(r#"{"ids":["a","b"],"offset":0,"count":2,"total_count":9}"#)
                .create_async()
                .await;

            let filter = LinkFilter::new()
                .path("/Shared/Q1 Reports")
                .link_type(LinkType::File);
            let list = client(&server).list_links(&filter).await.unwrap();

            mock.assert_async().await;
            assert_eq!(list.total_count, 9);
        }

        #[rstest]
        #[tokio::test]
        async fn test_get_link_details(#[future] server: ServerGuard) {
            let mut server = server.await;
            server
                .mock("GET", "/pubapi/v1/links/abc123")
                .with_status(200)
                .with_body(
                    r#"{"id":"abc123","url":"https://acme.example.com/fl/abc123","path":"/Shared","type":"folder","accessibility":"anyone","protection":"NONE"}"#,
                )
                .create_async()
                .await;

            let details = client(&server).get_link_details("abc123").await.unwrap();
            assert_eq!(details.url, "https://acme.example.com/fl/abc123");
            assert_eq!(details.accessibility, LinkAccessibility::Anyone);
        }

        #[rstest]
        #[tokio::test]
        async fn test_get_link_not_found(#[future] server: ServerGuard) {
            let mut server = server.await;
            server
                .mock("GET", "/pubapi/v1/links/missing")
                .with_status(404)
                .with_body(r#"{"errorMessage":"Link does not exist"}"#)
                .create_async()
                .await;

            let err = client(&server)
                .get_link_details("missing")
                .await
                .unwrap_err();
            assert_eq!(err, LinkShareError::not_found("Link does not exist"));
        }

        #[rstest]
        #[tokio::test]
        async fn test_create_link(#[future] server: ServerGuard) {
            let mut server = server.await;
            let mock = server
                .mock("POST", "/pubapi/v1/links")
                .match_header("content-type", "application/json")
                .match_body(
                    r#"{"path":"/docs/q1","type":"file","accessibility":"password","expiry_clicks":"5"}"#,
                )
                .with_status(200)
                .with_body(
                    r#"{"links":[{"id":"q1","url":"https://acme.example.com/fl/q1","recipients":[]}],"path":"/docs/q1","type":"file","accessibility":"password"}"#,
                )
                .create_async()
                .await;

            let link = NewLink::new("docs/q1", LinkType::File, LinkAccessibility::Password)
                .expiry_clicks(5);
            let created = client(&server).create_link(&link).await.unwrap();

            mock.assert_async().await;
            assert_eq!(created.urls(), vec!["https://acme.example.com/fl/q1"]);
        }

        #[rstest]
        #[tokio::test]
        async fn test_delete_link(#[future] server: ServerGuard) {
            let mut server = server.await;
            let mock = server
                .mock("DELETE", "/pubapi/v1/links/abc123")
                .with_status(200)
                .create_async()
                .await;

            assert!(client(&server).delete_link("abc123").await.unwrap());
            mock.assert_async().await;
        }
    }

    #[fixture]
    pub(crate) async fn server() -> ServerGuard {
        Server::new_async().await
    }

    pub(crate) fn client(server: &ServerGuard) -> LinkShareClient {
        LinkShareClient::builder()
            .url(&server.url())
            .api_token("test-token")
            .build()
    }
}
