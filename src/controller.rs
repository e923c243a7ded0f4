//! Single-flight listing fetch.
//!
//! [`ListingController::start`] publishes `Loading`, spawns one tokio task
//! that calls [`ListingSource::fetch_listing`] exactly once, and hands back
//! read-only views of the two cells that task writes: the status and the
//! item sequence.
//!
//! ## Ordering
//!
//! * `Loading` is published before the fetch task is spawned, so anyone
//!   holding the controller sees it immediately.
//! * On completion the items are published first and the terminal status
//!   second.  An observer that sees `Done` or `Error` and then reads the items
//!   always gets the final sequence.
//!
//! There is no retry, no refresh, and no cancellation: dropping the controller
//! leaves the task running to completion.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use crate::observable::{self, Observable, Publisher};
use crate::source::{FetchError, Listing, ListingSource, Product};

/// Where the listing fetch currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Error,
    Done,
}

impl ListingStatus {
    /// `Done` and `Error` are final for a controller.
    pub fn is_terminal(self) -> bool {
        matches!(self, ListingStatus::Done | ListingStatus::Error)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ListingStatus::Loading => "Loading",
            ListingStatus::Error => "Error",
            ListingStatus::Done => "Done",
        };
        f.write_str(label)
    }
}

/// Owns one listing fetch and exposes its outcome.
#[derive(Debug, Clone)]
pub struct ListingController {
    status: Observable<Option<ListingStatus>>,
    items: Observable<Vec<Product>>,
}

impl ListingController {
    /// Start the fetch and return the controller.
    ///
    /// Must be called from within a tokio runtime.  Does not wait for the
    /// fetch.
    pub fn start(source: Arc<dyn ListingSource>) -> Self {
        let (status_tx, status) = observable::channel(None);
        let (items_tx, items) = observable::channel(Vec::new());

        status_tx.publish(Some(ListingStatus::Loading));
        tokio::spawn(fetch_and_publish(
            source,
            Cells {
                status: status_tx,
                items: items_tx,
            },
        ));

        Self { status, items }
    }

    /// Read-only view of the status.  `None` only before [`start`](Self::start)
    /// has published, which no caller can observe.
    pub fn status(&self) -> Observable<Option<ListingStatus>> {
        self.status.clone()
    }

    /// Read-only view of the fetched items; empty until success and after
    /// failure.
    pub fn items(&self) -> Observable<Vec<Product>> {
        self.items.clone()
    }

    /// Wait for the fetch to reach `Done` or `Error`.
    ///
    /// Returns immediately if it already has.  Returns `None` if the fetch
    /// task went away without settling (it panicked).
    pub async fn settled(&self) -> Option<ListingStatus> {
        let mut status = self.status();
        loop {
            if let Some(done) = status.get().filter(|s| s.is_terminal()) {
                return Some(done);
            }
            if !status.changed().await {
                return status.get().filter(|s| s.is_terminal());
            }
        }
    }
}

/// Write side of the two cells.
trait OutcomeWriter {
    fn write_items(&self, items: Vec<Product>);
    fn write_status(&self, status: ListingStatus);
}

/// The controller's private publishers, moved into the fetch task.
struct Cells {
    status: Publisher<Option<ListingStatus>>,
    items: Publisher<Vec<Product>>,
}

impl OutcomeWriter for Cells {
    fn write_items(&self, items: Vec<Product>) {
        self.items.publish(items);
    }

    fn write_status(&self, status: ListingStatus) {
        self.status.publish(Some(status));
    }
}

async fn fetch_and_publish(source: Arc<dyn ListingSource>, cells: Cells) {
    info!(source = source.name(), "fetching product listing");
    let outcome = source.fetch_listing().await;
    publish_outcome(&cells, source.name(), outcome);
}

/// Items first, terminal status second, on both branches.
fn publish_outcome(
    cells: &impl OutcomeWriter,
    source_name: &str,
    outcome: Result<Listing, FetchError>,
) {
    match outcome {
        Ok(listing) => {
            info!(
                source = source_name,
                count = listing.items.len(),
                total = listing.total,
                "product listing loaded"
            );
            cells.write_items(listing.items);
            cells.write_status(ListingStatus::Done);
        }
        Err(err) => {
            warn!(source = source_name, error = %err, "product listing fetch failed");
            cells.write_items(Vec::new());
            cells.write_status(ListingStatus::Error);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
