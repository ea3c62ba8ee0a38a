// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ParseError;
use crate::models::build::{BuildChannel, BuildRecord, BuildsResponse};
use crate::models::summary::{BuildSummary, GroupedResult};

/// Reshapes a raw builds response into summaries grouped by product.
pub(crate) fn normalize(raw: &Value) -> Result<GroupedResult, ParseError> {
    let response = BuildsResponse::deserialize(raw)?;

    let mut builds = response
        .flashstation_build
        .into_iter()
        .map(|build| {
            let build_id = build
                .build_id
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidBuildId {
                    name: build.release_candidate_name.clone(),
                    build_id: build.build_id.clone(),
                })?;
            Ok((build_id, build))
        })
        .collect::<Result<Vec<(u64, BuildRecord)>, ParseError>>()?;
    builds.sort_by_key(|(build_id, _)| *build_id);

    let mut by_product = GroupedResult::new();
    for (_, build) in builds {
        let product = build.product.clone();
        by_product.entry(product).or_default().push(summarize(build));
    }
    debug!("Normalized builds for {} products", by_product.len());

    Ok(by_product)
}

fn summarize(build: BuildRecord) -> BuildSummary {
    let version = build.version_name.or_else(|| {
        build.channel.as_ref().and_then(BuildChannel::preview).map(|preview| {
            format!(
                "{} - {}",
                preview.release_track_name, preview.release_track_version_name
            )
        })
    });

    let (latest_in_category, description) = match build.channel {
        Some(BuildChannel::Release { release, .. }) => (
            release.latest,
            release.notes.filter(|notes| !notes.is_empty()),
        ),
        Some(BuildChannel::Preview(preview)) => (preview.active, None),
        None => (false, None),
    };

    BuildSummary {
        name: build.release_candidate_name,
        description,
        latest_in_category,
        version,
        url: build.factory_image_download_url,
    }
}
