// SPDX-License-Identifier: Apache-2.0

pub(crate) mod build;
pub(crate) mod lookup_options;
pub(crate) mod summary;
