// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;
use serde::Serialize;

/// Simplified view of a build, as printed for the user.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct BuildSummary {
    /// Release candidate name, e.g. "BP2A.250605.031.A3".
    pub name: String,
    pub description: Option<String>,
    /// Whether this is the newest build of its track.
    pub latest_in_category: bool,
    pub version: Option<String>,
    pub url: String,
}

/// Build summaries keyed by product id. Products appear in the order they were
/// first seen; summaries within a product are ordered by build id.
pub(crate) type GroupedResult = IndexMap<String, Vec<BuildSummary>>;
