//! Lookup endpoint construction

use reqwest::Url;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_REGION};
use crate::version::error::CheckError;

/// Query parameter carrying the application identifier
const BUNDLE_ID_PARAM: &str = "bundleId";

/// Builds App Store lookup URLs of the form `<base>/<region>/lookup?bundleId=<id>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointBuilder {
    base_url: String,
    default_region: String,
}

impl EndpointBuilder {
    /// Creates a new EndpointBuilder with a custom base URL and fallback region
    pub fn new(base_url: &str, default_region: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_region: default_region.to_string(),
        }
    }

    pub fn build(
        &self,
        application_identifier: &str,
        region_code: Option<&str>,
    ) -> Result<Url, CheckError> {
        if application_identifier.trim().is_empty() {
            return Err(CheckError::InvalidEndpoint);
        }

        let region = region_code.unwrap_or(&self.default_region);
        if !is_region_code(region) {
            return Err(CheckError::InvalidEndpoint);
        }

        let endpoint = format!(
            "{}/{}/lookup?{}={}",
            self.base_url, region, BUNDLE_ID_PARAM, application_identifier
        );
        let url = Url::parse(&endpoint).map_err(|_| CheckError::InvalidEndpoint)?;

        // An identifier containing '&', '#' or '+' would be silently altered by the parser
        let bundle_id = url
            .query_pairs()
            .find(|(key, _)| key == BUNDLE_ID_PARAM)
            .map(|(_, value)| value.into_owned());
        if bundle_id.as_deref() != Some(application_identifier) {
            return Err(CheckError::InvalidEndpoint);
        }

        Ok(url)
    }
}

impl Default for EndpointBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_REGION)
    }
}

fn is_region_code(region: &str) -> bool {
    region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic())
}
