//! Mock display implementation for testing.
//!
//! Provides [`MockDisplay`] for unit testing without terminal access.

use std::sync::RwLock;

use crate::sink::{DisplayError, DisplaySink};

/// Mock display for testing.
///
/// Records every write in memory. Construct with [`MockDisplay::unavailable`]
/// to simulate a missing display target.
///
/// # Example
///
/// ```ignore
/// use tally_display::{DisplaySink, MockDisplay};
///
/// let display = MockDisplay::new();
/// display.set_view_count("42").unwrap();
///
/// assert_eq!(display.last_text(), Some("42".to_owned()));
/// ```
#[derive(Debug)]
pub struct MockDisplay {
    texts: RwLock<Vec<String>>,
    available: bool,
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self {
            texts: RwLock::new(Vec::new()),
            available: true,
        }
    }
}

impl MockDisplay {
    /// Create a new available mock display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock display whose target is absent.
    ///
    /// Every write returns [`DisplayError::Unavailable`] and records nothing.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            texts: RwLock::new(Vec::new()),
            available: false,
        }
    }

    /// All recorded writes, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.texts.read().unwrap().clone()
    }

    /// The most recent write, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn last_text(&self) -> Option<String> {
        self.texts.read().unwrap().last().cloned()
    }
}

impl DisplaySink for MockDisplay {
    fn set_view_count(&self, text: &str) -> Result<(), DisplayError> {
        if !self.available {
            return Err(DisplayError::Unavailable("mock".to_owned()));
        }
        self.texts.write().unwrap().push(text.to_owned());
        Ok(())
    }
}
