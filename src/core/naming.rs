// src/core/naming.rs

use crate::{
    constants::{FEATURES_MARKER, NO_DEFAULT_MARKER},
    models::RunConfig,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is not safe to carry into a file name.
    static ref UNSAFE_NAME_CHARS: Regex =
        Regex::new(r"[^A-Za-z0-9_.,+=\-]").expect("static regex is valid");
}

/// Builds a name fragment that keeps distinct build configurations from
/// overwriting each other's output.
///
/// The result is always `base`, then the no-default marker (if default features are
/// disabled), then the feature marker with the literal feature string (if any).
pub fn output_name(base_name: &str, config: &RunConfig) -> String {
    let mut name = base_name.to_string();
    if config.no_default_features {
        name.push_str(NO_DEFAULT_MARKER);
    }
    if config.has_features() {
        name.push_str(FEATURES_MARKER);
        name.push_str(&sanitize(config.features.trim()));
    }
    name
}

/// Replaces every character that is unsafe in a file name with `-`.
fn sanitize(fragment: &str) -> String {
    UNSAFE_NAME_CHARS.replace_all(fragment, "-").into_owned()
}
