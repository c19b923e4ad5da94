// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::LinkShareError;
use crate::invalid_argument;
use crate::msg::wire::{flag, format_date, nullable, opt_count, opt_date, opt_datetime, opt_flag};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Implements the string conversions of a wire enum from its `as_str` and `from_wire` methods.
///
/// Serialization writes the lowercase token. Deserialization never fails: unknown tokens and
/// non-string values give the default. `FromStr` is strict and meant for user input.
macro_rules! wire_enum {
    ($name:ident, [$($variant:ident),+]) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = LinkShareError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim().to_ascii_lowercase();
                $(
                    if token == $name::$variant.as_str() {
                        return Ok($name::$variant);
                    }
                )+
                Err(invalid_argument!(
                    "'{}' is not a valid {}, expected one of: {}",
                    s,
                    stringify!($name),
                    [$($name::$variant.as_str()),+].join(", ")
                ))
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match Value::deserialize(deserializer)? {
                    Value::String(value) => Ok($name::from_wire(&value)),
                    _ => Ok($name::default()),
                }
            }
        }
    };
}

/// What a link points to.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkType {
    File,
    #[default]
    Folder,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::File => "file",
            LinkType::Folder => "folder",
        }
    }

    /// Decode a wire token. Anything except `file` is a folder.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => LinkType::File,
            _ => LinkType::Folder,
        }
    }
}

wire_enum!(LinkType, [File, Folder]);

/// Who may use a link without extra credentials.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkAccessibility {
    #[default]
    Anyone,
    Domain,
    Password,
    Recipients,
}

impl LinkAccessibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkAccessibility::Anyone => "anyone",
            LinkAccessibility::Domain => "domain",
            LinkAccessibility::Password => "password",
            LinkAccessibility::Recipients => "recipients",
        }
    }

    /// Decode a wire token. Unknown tokens give [`LinkAccessibility::Anyone`].
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "domain" => LinkAccessibility::Domain,
            "password" => LinkAccessibility::Password,
            "recipients" => LinkAccessibility::Recipients,
            _ => LinkAccessibility::Anyone,
        }
    }
}

wire_enum!(LinkAccessibility, [Anyone, Domain, Password, Recipients]);

/// Content protection of a link.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtectionType {
    #[default]
    None,
    Preview,
    PreviewDownload,
}

impl ProtectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtectionType::None => "none",
            ProtectionType::Preview => "preview",
            ProtectionType::PreviewDownload => "preview_download",
        }
    }

    /// Decode a wire token. Unknown tokens give [`ProtectionType::None`].
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "preview" => ProtectionType::Preview,
            "preview_download" => ProtectionType::PreviewDownload,
            _ => ProtectionType::None,
        }
    }
}

wire_enum!(ProtectionType, [None, Preview, PreviewDownload]);

/// Filters for listing links. Every filter is optional.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct LinkFilter {
    /// Only links for this path
    pub path: Option<String>,
    /// Only links created by this user
    pub username: Option<String>,
    /// Only links created before this date
    pub created_before: Option<NaiveDate>,
    /// Only links created after this date
    pub created_after: Option<NaiveDate>,
    /// Only links of this type
    pub link_type: Option<LinkType>,
    /// Only links with this accessibility
    pub accessibility: Option<LinkAccessibility>,
    /// Index of the first link to return
    pub offset: Option<u64>,
    /// Max number of links to return
    pub count: Option<u64>,
}

impl LinkFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    pub fn created_before(mut self, date: NaiveDate) -> Self {
        self.created_before = Some(date);
        self
    }

    pub fn created_after(mut self, date: NaiveDate) -> Self {
        self.created_after = Some(date);
        self
    }

    pub fn link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = Some(link_type);
        self
    }

    pub fn accessibility(mut self, accessibility: LinkAccessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Query parameters for the filters which are set, in a stable order.
    ///
    /// Values are not percent-encoded here.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(path) = &self.path {
            pairs.push(("path", path.clone()));
        }
        if let Some(username) = &self.username {
            pairs.push(("username", username.clone()));
        }
        if let Some(date) = &self.created_before {
            pairs.push(("created_before", format_date(date)));
        }
        if let Some(date) = &self.created_after {
            pairs.push(("created_after", format_date(date)));
        }
        if let Some(link_type) = self.link_type {
            pairs.push(("type", link_type.to_string()));
        }
        if let Some(accessibility) = self.accessibility {
            pairs.push(("accessibility", accessibility.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(count) = self.count {
            pairs.push(("count", count.to_string()));
        }
        pairs
    }
}

/// Request to create a link.
///
/// Optional settings left as `None` are not sent at all, the provider treats
/// the presence of a field as the intent to set it.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLink {
    /// Path of the file or folder to share. A leading `/` is added if missing.
    pub path: String,
    /// File or folder link
    pub link_type: LinkType,
    /// Who may use the link
    pub accessibility: LinkAccessibility,
    /// Send the link to the recipients by email
    pub send_email: Option<bool>,
    /// Recipients of the link, without duplicates
    pub recipients: Option<Vec<String>>,
    /// Message for the email
    pub message: Option<String>,
    /// Send a copy of the email to the creator
    pub copy_me: Option<bool>,
    /// Notify the creator when the link is used
    pub notify: Option<bool>,
    /// File links only: always point to the current version of the file
    pub link_to_current: Option<bool>,
    /// The link expires at the end of this date
    pub expiry_date: Option<NaiveDate>,
    /// The link expires after this number of clicks, must be positive
    pub expiry_clicks: Option<u32>,
}

impl NewLink {
    pub fn new(path: &str, link_type: LinkType, accessibility: LinkAccessibility) -> Self {
        Self {
            path: path.to_string(),
            link_type,
            accessibility,
            send_email: None,
            recipients: None,
            message: None,
            copy_me: None,
            notify: None,
            link_to_current: None,
            expiry_date: None,
            expiry_clicks: None,
        }
    }

    pub fn send_email(mut self, send_email: bool) -> Self {
        self.send_email = Some(send_email);
        self
    }

    /// Add a recipient. Repeated recipients are ignored.
    pub fn add_recipient(mut self, recipient: &str) -> Self {
        let recipients = self.recipients.get_or_insert_with(Vec::new);
        if !recipients.iter().any(|r| r == recipient) {
            recipients.push(recipient.to_string());
        }
        self
    }

    /// Set and overwrite the recipients.
    pub fn recipients<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.recipients = Some(Vec::new());
        for recipient in recipients {
            self = self.add_recipient(recipient.as_ref());
        }
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn copy_me(mut self, copy_me: bool) -> Self {
        self.copy_me = Some(copy_me);
        self
    }

    pub fn notify(mut self, notify: bool) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn link_to_current(mut self, link_to_current: bool) -> Self {
        self.link_to_current = Some(link_to_current);
        self
    }

    pub fn expiry_date(mut self, date: NaiveDate) -> Self {
        self.expiry_date = Some(date);
        self
    }

    pub fn expiry_clicks(mut self, clicks: u32) -> Self {
        self.expiry_clicks = Some(clicks);
        self
    }

    /// The path as it is sent: always starts with `/`.
    pub fn normalized_path(&self) -> String {
        if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        }
    }

    /// Check the request before it is sent.
    pub fn validate(&self) -> Result<(), LinkShareError> {
        if self.path.trim().is_empty() {
            return Err(invalid_argument!("Path of a new link must not be empty"));
        }

        if self.expiry_clicks == Some(0) {
            return Err(invalid_argument!(
                "Expiry clicks of a new link must be a positive number"
            ));
        }

        Ok(())
    }

    /// JSON body of the create request: only the fields which are set, in a stable order.
    pub fn to_wire(&self) -> Map<String, Value> {
        fn as_flag(value: bool) -> Value {
            Value::from(if value { "true" } else { "false" })
        }

        let mut body = Map::new();
        body.insert("path".into(), Value::from(self.normalized_path()));
        body.insert("type".into(), Value::from(self.link_type.as_str()));
        body.insert(
            "accessibility".into(),
            Value::from(self.accessibility.as_str()),
        );

        if let Some(send_email) = self.send_email {
            body.insert("send_email".into(), as_flag(send_email));
        }
        if let Some(recipients) = &self.recipients {
            body.insert(
                "recipients".into(),
                Value::Array(recipients.iter().map(|r| Value::from(r.as_str())).collect()),
            );
        }
        if let Some(message) = &self.message {
            body.insert("message".into(), Value::from(message.as_str()));
        }
        if let Some(copy_me) = self.copy_me {
            body.insert("copy_me".into(), as_flag(copy_me));
        }
        if let Some(notify) = self.notify {
            body.insert("notify".into(), as_flag(notify));
        }
        if let Some(link_to_current) = self.link_to_current {
            body.insert("link_to_current".into(), as_flag(link_to_current));
        }
        if let Some(date) = &self.expiry_date {
            body.insert("expiry_date".into(), Value::from(format_date(date)));
        }
        if let Some(clicks) = self.expiry_clicks {
            body.insert("expiry_clicks".into(), Value::from(clicks.to_string()));
        }
        body
    }
}

/// A page of link ids as the provider returns it.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct LinkCollection {
    /// Link ids on this page
    #[serde(default, deserialize_with = "nullable")]
    pub ids: Vec<String>,
    /// Index of the first link on this page
    #[serde(default, deserialize_with = "nullable")]
    pub offset: u64,
    /// Number of links on this page
    #[serde(default, deserialize_with = "nullable")]
    pub count: u64,
    /// Number of links matching the filters
    #[serde(default, deserialize_with = "nullable")]
    pub total_count: u64,
}

/// One URL of a created link.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct LinkSummary {
    /// Link id
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    /// Share URL
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    /// Recipients of this URL
    #[serde(default, deserialize_with = "nullable")]
    pub recipients: Vec<String>,
}

/// Full information about a link.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct LinkDetails {
    /// Link id
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    /// Canonical share URL
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    /// Path of the shared file or folder
    #[serde(default, deserialize_with = "nullable")]
    pub path: String,
    #[serde(rename = "type", default)]
    pub link_type: LinkType,
    #[serde(default)]
    pub accessibility: LinkAccessibility,
    /// The creator is notified when the link is used
    #[serde(default, deserialize_with = "flag")]
    pub notify: bool,
    /// The link always points to the current version of the file
    #[serde(default, deserialize_with = "flag")]
    pub link_to_current: bool,
    #[serde(default, with = "opt_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
    /// Username of the creator
    #[serde(default, deserialize_with = "nullable")]
    pub created_by: String,
    #[serde(default, with = "opt_date")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub protection: ProtectionType,
    #[serde(default, deserialize_with = "nullable")]
    pub recipients: Vec<String>,
    #[serde(default, with = "opt_datetime")]
    pub last_accessed: Option<DateTime<Utc>>,
}

/// Response for a created link.
///
/// The provider may create several URLs for one path, e.g. one per recipient.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct CreatedLink {
    /// Created URLs
    #[serde(default, deserialize_with = "nullable")]
    pub links: Vec<LinkSummary>,
    /// Path of the shared file or folder
    #[serde(default, deserialize_with = "nullable")]
    pub path: String,
    #[serde(rename = "type", default)]
    pub link_type: LinkType,
    #[serde(default)]
    pub accessibility: LinkAccessibility,
    #[serde(default, deserialize_with = "flag")]
    pub notify: bool,
    #[serde(default, deserialize_with = "flag")]
    pub link_to_current: bool,
    #[serde(default, with = "opt_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_by: String,
    #[serde(default, with = "opt_date")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_count")]
    pub expiry_clicks: Option<u32>,
    #[serde(default)]
    pub protection: ProtectionType,
    #[serde(default, deserialize_with = "opt_flag")]
    pub send_email: Option<bool>,
    #[serde(default, deserialize_with = "opt_flag")]
    pub copy_me: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreatedLink {
    /// All share URLs of the link.
    pub fn urls(&self) -> Vec<&str> {
        self.links.iter().map(|link| link.url.as_str()).collect()
    }

    /// Recipients of all URLs, without duplicates.
    pub fn recipients(&self) -> Vec<String> {
        let mut recipients: Vec<String> = Vec::new();
        for recipient in self.links.iter().flat_map(|link| link.recipients.iter()) {
            if !recipients.contains(recipient) {
                recipients.push(recipient.clone());
            }
        }
        recipients
    }
}
