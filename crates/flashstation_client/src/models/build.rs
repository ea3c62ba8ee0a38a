// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// The part of the builds endpoint response that gets normalized.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuildsResponse {
    #[serde(default)]
    pub flashstation_build: Vec<BuildRecord>,
}

/// A single factory image build as returned by the builds endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "WireBuildRecord")]
pub(crate) struct BuildRecord {
    pub product: String,
    /// Numeric, but sent as a string.
    pub build_id: String,
    pub release_candidate_name: String,
    pub factory_image_download_url: String,
    pub version_name: Option<String>,
    pub channel: Option<BuildChannel>,
}

/// Stable and preview builds carry different metadata bundles.
///
/// The upstream data does not guarantee that only one bundle is present. When
/// both are, the release bundle decides the channel and the preview bundle is
/// kept for its track name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BuildChannel {
    Release {
        release: ReleaseBuildMetadata,
        preview: Option<PreviewMetadata>,
    },
    Preview(PreviewMetadata),
}

impl BuildChannel {
    pub fn preview(&self) -> Option<&PreviewMetadata> {
        match self {
            BuildChannel::Release { preview, .. } => preview.as_ref(),
            BuildChannel::Preview(preview) => Some(preview),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct ReleaseBuildMetadata {
    #[serde(default)]
    pub latest: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PreviewMetadata {
    pub release_track_name: String,
    pub release_track_version_name: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBuildRecord {
    product: String,
    build_id: String,
    release_candidate_name: String,
    factory_image_download_url: String,
    version_name: Option<String>,
    release_build_metadata: Option<ReleaseBuildMetadata>,
    preview_metadata: Option<PreviewMetadata>,
}

impl From<WireBuildRecord> for BuildRecord {
    fn from(wire: WireBuildRecord) -> Self {
        let channel = match (wire.release_build_metadata, wire.preview_metadata) {
            (Some(release), preview) => Some(BuildChannel::Release { release, preview }),
            (None, Some(preview)) => Some(BuildChannel::Preview(preview)),
            (None, None) => None,
        };

        BuildRecord {
            product: wire.product,
            build_id: wire.build_id,
            release_candidate_name: wire.release_candidate_name,
            factory_image_download_url: wire.factory_image_download_url,
            version_name: wire.version_name,
            channel,
        }
    }
}
