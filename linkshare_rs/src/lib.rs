// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod base_uri;
mod client;
mod http_client;
mod links;

pub use base_uri::BaseUri;
pub use client::{LinkShareClient, LinkShareClientBuilder, Result};
pub use http_client::{ApiRequest, HttpClient, RequestExecutor};
pub use links::LinkService;

// Re-export
pub use linkshare_base::error::{ErrorCode, LinkShareError};
pub use linkshare_base::msg::link_api::{
    CreatedLink, LinkAccessibility, LinkCollection, LinkDetails, LinkFilter, LinkSummary,
    LinkType, NewLink, ProtectionType,
};
