// SPDX-License-Identifier: Apache-2.0

use reqwest::Client;
use reqwest::header::REFERER;
use serde_json::Value;
use tracing::{info, instrument};

use crate::app_config::AppConfig;
use crate::error::FlashstationError;
use crate::fetch::fetch_json;
use crate::models::lookup_options::LookupOptions;

/// Queries the builds endpoint for every product in `options`.
///
/// The web front-end goes through a batch endpoint, but a single request is all
/// that's needed here. Products are sent in sorted order, one `product` parameter
/// each.
#[instrument(skip_all, fields(products = options.products().len()))]
pub(crate) async fn fetch_metadata(
    client: &Client,
    config: &AppConfig,
    options: &LookupOptions,
) -> Result<Value, FlashstationError> {
    let builds_url = config.service().builds_url();

    let mut query = Vec::with_capacity(options.products().len() + 1);
    query.push(("key", options.api_key()));
    query.extend(options.products().iter().map(|product| ("product", product.as_str())));

    info!("Fetching build metadata");
    let request = client
        .get(builds_url)
        .header(REFERER, config.service().referer())
        .query(&query);

    Ok(fetch_json(request, builds_url).await?)
}
