// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::client::Result;
use linkshare_base::invalid_argument;
use url::Url;

/// Builds absolute request URLs for the configured host.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseUri {
    url: String,
}

impl BaseUri {
    /// Parse the base URL, e.g. `https://acme.example.com`.
    ///
    /// A path prefix is kept, a query or fragment is dropped.
    pub fn parse(url: &str) -> Result<Self> {
        let mut base = Url::parse(url)?;
        if base.cannot_be_a_base() {
            return Err(invalid_argument!("'{}' can't be used as a base URL", url));
        }

        base.set_query(None);
        base.set_fragment(None);
        Ok(Self {
            url: base.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// The base URL without a trailing slash.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Absolute URL for a path relative to the base with optional query parameters.
    ///
    /// Parameter values are percent-encoded, there is no `?` if `query` is empty.
    pub fn build(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    /// Absolute URL for a path with one more, percent-encoded, path segment.
    pub fn build_with_segment(&self, path: &str, segment: &str) -> Result<Url> {
        let mut url = self.build(path, &[])?;
        url.path_segments_mut()
            .map_err(|_| invalid_argument!("'{}' can't be used as a base URL", self.url))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }
}
