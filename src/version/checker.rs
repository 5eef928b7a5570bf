//! Version check pipeline: endpoint, fetch, parse, compare, cache

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::CheckerConfig;
use crate::version::cache::{CachedEntry, MemoryStore, VersionStore};
use crate::version::catalog::{Catalog, HttpCatalog};
use crate::version::compare::UpToDatePolicy;
use crate::version::endpoint::EndpointBuilder;
use crate::version::error::{CatalogError, CheckError};
use crate::version::lookup::parse_lookup;

/// Input of a single version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Bundle or package identifier (e.g. "com.example.app")
    pub application_identifier: String,
    /// Version of the running application (e.g. "1.2.3")
    pub current_version: String,
    /// Two-letter region; the configured default applies when `None`
    pub region_code: Option<String>,
}

impl LookupRequest {
    pub fn new(application_identifier: &str, current_version: &str) -> Self {
        Self {
            application_identifier: application_identifier.to_string(),
            current_version: current_version.to_string(),
            region_code: None,
        }
    }

    pub fn with_region(mut self, region_code: Option<String>) -> Self {
        self.region_code = region_code;
        self
    }
}

/// Result of a version check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the running version is current; always false when `error` is set
    pub up_to_date: bool,
    pub error: Option<CheckError>,
}

impl CheckOutcome {
    pub fn up_to_date() -> Self {
        Self {
            up_to_date: true,
            error: None,
        }
    }

    pub fn update_available() -> Self {
        Self {
            up_to_date: false,
            error: None,
        }
    }

    pub fn failed(error: CheckError) -> Self {
        Self {
            up_to_date: false,
            error: Some(error),
        }
    }

    /// Converts into `Ok(up_to_date)` or `Err(error)`
    pub fn into_result(self) -> Result<bool, CheckError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.up_to_date),
        }
    }
}

/// Checks application versions against the App Store lookup API
pub struct VersionChecker {
    endpoints: EndpointBuilder,
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn VersionStore>,
    policy: UpToDatePolicy,
}

impl VersionChecker {
    pub fn new(
        endpoints: EndpointBuilder,
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn VersionStore>,
        policy: UpToDatePolicy,
    ) -> Self {
        Self {
            endpoints,
            catalog,
            store,
            policy,
        }
    }

    /// Creates a checker talking HTTP to the configured catalog, caching into `store`
    pub fn from_config(
        config: &CheckerConfig,
        store: Arc<dyn VersionStore>,
    ) -> Result<Self, CatalogError> {
        Ok(Self::new(
            EndpointBuilder::new(&config.base_url, &config.default_region),
            Arc::new(HttpCatalog::new(config)?),
            store,
            config.policy,
        ))
    }

    /// Creates a checker with default configuration and a fresh [`MemoryStore`]
    pub fn with_defaults() -> Result<Self, CatalogError> {
        Self::from_config(&CheckerConfig::default(), Arc::new(MemoryStore::new()))
    }

    /// Store updated by successful checks
    pub fn store(&self) -> &Arc<dyn VersionStore> {
        &self.store
    }

    /// Runs one check; always resolves to exactly one outcome
    pub async fn check(&self, request: &LookupRequest) -> CheckOutcome {
        let outcome = match self.run(request).await {
            Ok(outcome) => outcome,
            Err(error) => CheckOutcome::failed(error),
        };

        if let Some(error) = outcome.error {
            warn!(
                "app store version check failed ({}): {}",
                request.current_version, error
            );
        }

        outcome
    }

    /// Runs [`VersionChecker::check`] on the tokio runtime
    pub fn spawn(self: &Arc<Self>, request: LookupRequest) -> JoinHandle<CheckOutcome> {
        let checker = Arc::clone(self);
        tokio::spawn(async move { checker.check(&request).await })
    }

    async fn run(&self, request: &LookupRequest) -> Result<CheckOutcome, CheckError> {
        let endpoint = self
            .endpoints
            .build(
                &request.application_identifier,
                request.region_code.as_deref(),
            )?;

        debug!("Looking up {}", endpoint);

        let body = self.catalog.fetch(&endpoint).await.map_err(|e| {
            debug!("Lookup request failed: {}", e);
            CheckError::from(e)
        })?;

        let record = parse_lookup(&body)?;

        self.store.replace(CachedEntry {
            latest_version: record.version.clone(),
            store_url: record.track_view_url,
        });

        let up_to_date = self
            .policy
            .is_up_to_date(&request.current_version, &record.version);

        debug!(
            "Compared current {} with catalog {}: up_to_date={}",
            request.current_version, record.version, up_to_date
        );

        if up_to_date {
            Ok(CheckOutcome::up_to_date())
        } else {
            info!(
                "Newer version {} available for {} (running {})",
                record.version, request.application_identifier, request.current_version
            );
            Ok(CheckOutcome::update_available())
        }
    }
}
