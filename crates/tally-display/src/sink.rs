//! Display sink trait and error type.
//!
//! Provides the core [`DisplaySink`] trait for abstracting the display
//! target, along with [`DisplayError`] for unified error handling across
//! implementations.

/// Display error.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// The display target is absent.
    ///
    /// Consumers treat this as a warning: the fetched count is valid, there
    /// is just nowhere to put it.
    #[error("display target '{0}' not available")]
    Unavailable(String),
    /// Writing to the display target failed.
    #[error("display write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Display target for the fetched view count.
///
/// Implementations own a fixed display location and overwrite its text on
/// every call. The count arrives pre-rendered as decimal text so sinks never
/// need to know about the payload format.
pub trait DisplaySink: Send + Sync {
    /// Overwrite the display target's text with the given count.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Unavailable`] if the target is absent, or
    /// [`DisplayError::Write`] if writing to it fails.
    fn set_view_count(&self, text: &str) -> Result<(), DisplayError>;
}
