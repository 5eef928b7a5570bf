//! Comparison of the running version against the catalog version
//!
//! Versions are compared as plain strings, byte by byte. No semantic-version
//! parsing happens here, so `"9.0.0"` sorts after `"10.0.0"`.

use serde::Deserialize;

/// Rule deciding when the running version counts as up to date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpToDatePolicy {
    /// Up to date when the current version sorts at or after the catalog version
    #[default]
    AtLeastCatalog,
    /// Up to date only when both versions are identical
    ExactMatch,
}

impl UpToDatePolicy {
    pub fn is_up_to_date(self, current_version: &str, latest_version: &str) -> bool {
        match self {
            UpToDatePolicy::AtLeastCatalog => current_version >= latest_version,
            UpToDatePolicy::ExactMatch => current_version == latest_version,
        }
    }
}
