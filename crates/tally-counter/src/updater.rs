//! Fetch-and-display operation for the view count.
//!
//! This module provides the [`ViewCountUpdater`] struct that encapsulates the
//! workflow for refreshing a display target from the counter endpoint:
//!
//! 1. Fetch the current count from the endpoint
//! 2. Render it as decimal text
//! 3. Write the text into the display sink
//!
//! [`ViewCountUpdater::update`] is the fire-and-forget form bound to the
//! hosting shell's lifecycle: every failure is reported through `tracing`
//! and swallowed, so a broken counter never disturbs the shell.
//!
//! # Example
//!
//! ```no_run
//! use tally_counter::{CounterClient, ViewCountUpdater};
//! use tally_display::TermDisplay;
//!
//! let client = CounterClient::new("https://api.example.com/prod/views");
//! let display = TermDisplay::new();
//!
//! ViewCountUpdater::new(&client, &display).update();
//! ```

use tally_display::DisplaySink;

use crate::client::CounterClient;
use crate::error::FetchError;

/// Outcome of a completed fetch.
#[derive(Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The count was written to the display sink.
    Displayed(u64),
    /// The count was fetched but the sink did not take it.
    ///
    /// A missing display target is a warning, not a failure of the fetch,
    /// so the fetched count still arrives in the outcome.
    Skipped {
        /// The fetched view count.
        views: u64,
        /// Why the sink rejected the write.
        reason: String,
    },
}

/// Handles refreshing a display sink from the counter endpoint.
pub struct ViewCountUpdater<'a> {
    client: &'a CounterClient,
    display: &'a dyn DisplaySink,
}

impl<'a> ViewCountUpdater<'a> {
    /// Create a new view-count updater.
    #[must_use]
    pub fn new(client: &'a CounterClient, display: &'a dyn DisplaySink) -> Self {
        Self { client, display }
    }

    /// Fetch the count and offer it to the display sink.
    ///
    /// Display failures do not propagate: they land in
    /// [`UpdateOutcome::Skipped`] with the fetched count. Repeating a
    /// successful update overwrites the display with the same text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the count could not be retrieved.
    pub fn try_update(&self) -> Result<UpdateOutcome, FetchError> {
        let count = self.client.fetch_views()?;
        let text = count.views.to_string();

        match self.display.set_view_count(&text) {
            Ok(()) => Ok(UpdateOutcome::Displayed(count.views)),
            Err(e) => Ok(UpdateOutcome::Skipped {
                views: count.views,
                reason: e.to_string(),
            }),
        }
    }

    /// Fetch the count, display it, and report any failure through `tracing`.
    ///
    /// This is the trigger-facing form of [`ViewCountUpdater::try_update`]:
    /// it never panics and never propagates an error.
    pub fn update(&self) {
        match self.try_update() {
            Ok(UpdateOutcome::Displayed(views)) => {
                tracing::debug!(views, "View count displayed");
            }
            Ok(UpdateOutcome::Skipped { views, reason }) => {
                tracing::warn!(views, reason = %reason, "View count fetched but not displayed");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch view count");
            }
        }
    }
}
