// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

// Template fragments used internally by the front-end, e.g. `${h}ms` or `directive_chipid_${d}`.
static DENIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\$\{[a-z]+\}(ms|px)?|directive_chipid_\$\{[a-z]+\})$")
        .expect("valid deny pattern")
});

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[a-zA-Z0-9_]+\}").expect("valid placeholder pattern"));

static GSI_ARCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*_)?(arm(64)?|aarch64)(_.*)?$").expect("valid GSI pattern"));

/// Outcome of a single rule. `Skip` hands the token to the next rule.
#[derive(Debug, PartialEq)]
enum Verdict {
    Reject,
    Accept(String),
    Skip,
}

/// Classifier rules, evaluated in declaration order. The first rule that does not
/// skip decides.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Denylist,
    SingleSubstitution,
    DirectInclusion,
    GsiArchitecture,
}

const RULES: [Rule; 4] = [
    Rule::Denylist,
    Rule::SingleSubstitution,
    Rule::DirectInclusion,
    Rule::GsiArchitecture,
];

impl Rule {
    fn apply(self, codename: &str, gsi: bool, token: &str) -> Verdict {
        match self {
            Rule::Denylist if DENIED.is_match(token) => Verdict::Reject,
            // Eg. ${d}_fullmte
            Rule::SingleSubstitution if PLACEHOLDER.find_iter(token).count() == 1 => {
                Verdict::Accept(PLACEHOLDER.replace(token, NoExpand(codename)).into_owned())
            }
            // Eg. aosp_komodo_16k, komodo_16k
            Rule::DirectInclusion if token.contains(codename) && token.contains('_') => {
                Verdict::Accept(token.to_string())
            }
            // Eg. aosp_arm64_pubsign, kernel_aarch64
            Rule::GsiArchitecture if gsi && GSI_ARCH.is_match(token) => {
                Verdict::Accept(token.to_string())
            }
            _ => Verdict::Skip,
        }
    }
}

/// Decides whether a string literal from the front-end script names a product for
/// `codename`, returning the concrete product id when it does.
pub(crate) fn classify(codename: &str, gsi: bool, token: &str) -> Option<String> {
    for rule in RULES {
        match rule.apply(codename, gsi, token) {
            Verdict::Reject => return None,
            Verdict::Accept(product) => return Some(product),
            Verdict::Skip => {}
        }
    }
    None
}
