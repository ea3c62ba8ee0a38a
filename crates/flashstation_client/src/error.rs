// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Any failure that aborts a lookup run.
#[derive(Error, Debug)]
pub(crate) enum FlashstationError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A request failed at the transport level, returned a non-success status or
/// returned a body that could not be decoded.
#[derive(Error, Debug)]
#[error("request to '{url}' failed: {source}")]
pub(crate) struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

impl FetchError {
    /// The URL is dropped from `source` since it can carry the API key as a query parameter.
    pub fn new(url: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError {
            url: url.into(),
            source: source.without_url(),
        }
    }
}

/// Fetched content is missing an element the lookup depends on. This usually
/// means the web front-end or the API changed shape.
#[derive(Error, Debug)]
pub(crate) enum ParseError {
    #[error("landing page <body> has no data-client-config attribute")]
    MissingClientConfig,
    #[error("no API key found in client config: {client_config}")]
    ApiKeyNotFound { client_config: String },
    #[error("no <link as=\"script\"> element found on landing page")]
    ScriptLinkNotFound,
    #[error("<link as=\"script\"> element has no href")]
    ScriptLinkWithoutHref,
    #[error("invalid script URL '{href}': {source}")]
    InvalidScriptUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },
    #[error("malformed build list: {0}")]
    MalformedBuilds(#[from] serde_json::Error),
    #[error("build '{name}' has a non-numeric build id '{build_id}'")]
    InvalidBuildId { name: String, build_id: String },
}
