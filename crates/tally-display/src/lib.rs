//! Display sink abstraction for Tally.
//!
//! This crate provides a [`DisplaySink`] trait for abstracting where the
//! fetched view count gets rendered. This enables:
//!
//! - **Unit testing** without touching a real terminal
//! - **Target flexibility** (terminal, status bar, embedding hosts)
//! - **Clean separation** between fetch logic and presentation
//!
//! # Architecture
//!
//! The crate provides:
//! - [`DisplaySink`] trait with a single `set_view_count()` method
//! - [`TermDisplay`] implementation writing to the terminal
//! - [`MockDisplay`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use tally_display::{DisplaySink, TermDisplay};
//!
//! let display = TermDisplay::new();
//! display.set_view_count("42")?;
//! ```

#[cfg(feature = "mock")]
mod mock;
mod sink;
mod term;

#[cfg(feature = "mock")]
pub use mock::MockDisplay;
pub use sink::{DisplayError, DisplaySink};
pub use term::TermDisplay;
