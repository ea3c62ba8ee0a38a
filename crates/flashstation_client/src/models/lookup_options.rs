// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

/// Everything needed to query the builds endpoint for one device.
///
/// Built once per run. The product set is ordered, so iterating it yields the
/// sorted, deduplicated product list the endpoint is queried with.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LookupOptions {
    api_key: String,
    products: BTreeSet<String>,
}

impl LookupOptions {
    /// The codename is always part of the product set.
    pub fn new(
        api_key: String,
        codename: &str,
        candidates: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut products: BTreeSet<String> = candidates.into_iter().collect();
        products.insert(codename.to_string());
        LookupOptions { api_key, products }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn products(&self) -> &BTreeSet<String> {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_always_includes_the_codename() {
        let options = LookupOptions::new("key".to_string(), "komodo", Vec::new());

        assert_eq!(options.products().iter().collect::<Vec<_>>(), vec!["komodo"]);
    }

    #[test]
    fn new_sorts_and_deduplicates_products() {
        let candidates =
            ["komodo_fullmte", "aosp_komodo", "komodo", "aosp_komodo"].map(String::from);
        let options = LookupOptions::new("key".to_string(), "komodo", candidates);

        assert_eq!(
            options.products().iter().collect::<Vec<_>>(),
            vec!["aosp_komodo", "komodo", "komodo_fullmte"]
        );
    }
}
