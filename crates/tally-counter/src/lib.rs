//! Counter service integration for Tally.
//!
//! This crate provides the complete view-count retrieval workflow:
//! - [`CounterClient`]: blocking HTTP client for the counter endpoint
//! - [`ViewCountUpdater`]: fetch-and-display operation that reports failures
//!   instead of propagating them
//!
//! # Example
//!
//! ```ignore
//! use tally_counter::{CounterClient, ViewCountUpdater};
//! use tally_display::TermDisplay;
//!
//! let client = CounterClient::new("https://api.example.com/prod/views");
//! let display = TermDisplay::new();
//!
//! ViewCountUpdater::new(&client, &display).update();
//! ```

// API client
mod client;
pub use client::CounterClient;

// Errors
mod error;
pub use error::FetchError;

// Response payload
mod types;
pub use types::ViewCount;

// Fetch-and-display operation
mod updater;
pub use updater::{UpdateOutcome, ViewCountUpdater};

#[cfg(test)]
mod testutil;
