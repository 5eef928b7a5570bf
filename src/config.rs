use serde::Deserialize;

use crate::version::compare::UpToDatePolicy;

/// Default base URL for the App Store lookup API
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Region used when the caller cannot supply one
pub const DEFAULT_REGION: &str = "US";

/// Timeout for lookup requests in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

pub const DEFAULT_USER_AGENT: &str = "appstore-version";

/// Locale variables consulted by [`region_from_env`], highest precedence first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Version checker configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    pub base_url: String,
    pub default_region: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    pub user_agent: String,
    pub policy: UpToDatePolicy,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            policy: UpToDatePolicy::default(),
        }
    }
}

/// Returns the region code of the current locale, if one can be derived.
///
/// Reads `LC_ALL`, `LC_MESSAGES` and `LANG` in that order, so `en_GB.UTF-8`
/// yields `GB`. Returns `None` for `C`/`POSIX` or unset variables.
pub fn region_from_env() -> Option<String> {
    region_from_locale_vars(LOCALE_VARS.iter().map(|var| std::env::var(var).ok()))
}

fn region_from_locale_vars<I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let locale = values
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())?;

    region_from_locale(&locale)
}

/// Extracts the region from a POSIX locale string like `pt_BR.UTF-8@euro`
fn region_from_locale(locale: &str) -> Option<String> {
    let without_modifier = locale.split('@').next().unwrap_or_default();
    let without_codeset = without_modifier.split('.').next().unwrap_or_default();
    let (_, region) = without_codeset.split_once(['_', '-'])?;

    if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(region.to_ascii_uppercase())
    } else {
        None
    }
}
