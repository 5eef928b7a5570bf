//! Version check pipeline for the App Store lookup API
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Endpoint   │────▶│   Checker   │────▶│    Cache    │
//! │  (build)    │     │  (compare)  │     │  (storage)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Catalog   │────▶│   Lookup    │
//!                     │   (fetch)   │     │   (parse)   │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`endpoint`]: Lookup URL construction from identifier and region
//! - [`catalog`]: Catalog trait and its reqwest-backed implementation
//! - [`lookup`]: Lookup response parsing
//! - [`compare`]: Up-to-date policy and string comparison
//! - [`cache`]: In-memory store for the latest successful lookup
//! - [`checker`]: The check pipeline tying the above together
//! - [`error`]: Error types for checks and catalog requests

pub mod cache;
pub mod catalog;
pub mod checker;
pub mod compare;
pub mod endpoint;
pub mod error;
pub mod lookup;
