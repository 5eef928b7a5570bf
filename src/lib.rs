//! Checks whether a running application is up to date against its App Store lookup entry.

pub mod config;
pub mod version;

pub use config::CheckerConfig;
pub use version::cache::{CachedEntry, MemoryStore, VersionStore};
pub use version::checker::{CheckOutcome, LookupRequest, VersionChecker};
pub use version::compare::UpToDatePolicy;
pub use version::error::CheckError;
