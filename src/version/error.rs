use thiserror::Error;

/// Reasons a version check can fail to produce a usable comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CheckError {
    #[error("Invalid lookup endpoint")]
    InvalidEndpoint,

    #[error("App Store lookup returned an invalid response code")]
    InvalidResponseCode,

    #[error("Unable to read App Store lookup response")]
    UnableToReadResponse,

    #[error("Mandatory keys not found in App Store lookup response")]
    MandatoryKeysNotFound,

    #[error("App Store version not found in lookup response")]
    AppStoreVersionNotFound,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

impl From<CatalogError> for CheckError {
    // Transport failures and bad statuses both mean the catalog could not be consulted.
    fn from(_: CatalogError) -> Self {
        CheckError::InvalidResponseCode
    }
}
