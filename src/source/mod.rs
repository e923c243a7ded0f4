//! Remote data source abstraction.
//!
//! This module defines the [`ListingSource`] trait, the [`FetchError`] every
//! source fails with, and the [`Listing`] / [`Product`] types.  The concrete
//! HTTP implementation lives in [`http`].
//!
//! ## For contributors: adding a new source
//!
//! 1. Create a new file in this directory (e.g. `fixture.rs`).
//! 2. Define a struct and implement [`ListingSource`] for it.
//! 3. Add `mod fixture;` below and re-export your struct.
//! 4. Construct it in `main.rs` instead of [`HttpSource`].
//!
//! The controller and the UI only ever see the trait.

mod http;
mod listing;

pub use http::HttpSource;
pub use listing::{Listing, Product};

use async_trait::async_trait;

/// Boxed cause carried by [`FetchError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The one way fetching a listing can fail.
///
/// Transport failures, non-success HTTP statuses, and malformed payloads are
/// all folded into this type.  The underlying cause is kept for logging.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch product listing: {source}")]
pub struct FetchError {
    #[source]
    source: BoxError,
}

impl FetchError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err)
    }
}

/// Trait that every listing source must implement.
///
/// The controller calls [`fetch_listing()`](ListingSource::fetch_listing)
/// from a spawned tokio task, so implementations must be `Send + Sync`.
///
/// ```ignore
/// pub struct MySource;
///
/// #[async_trait]
/// impl ListingSource for MySource {
///     fn name(&self) -> &str { "my-source" }
///
///     async fn fetch_listing(&self) -> Result<Listing, FetchError> {
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Human-readable label used in log records.
    fn name(&self) -> &str;

    /// Fetch the first page of the product listing.
    ///
    /// Success is all-or-nothing: either a fully decoded [`Listing`] or a
    /// [`FetchError`].
    async fn fetch_listing(&self) -> Result<Listing, FetchError>;
}
