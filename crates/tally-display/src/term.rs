//! Terminal display implementation.

use console::Term;

use crate::sink::{DisplayError, DisplaySink};

/// Display sink that writes the view count to the terminal.
///
/// Each update is written as one line to stdout. The terminal handle is
/// always present, so this sink never reports itself unavailable.
#[derive(Debug, Clone)]
pub struct TermDisplay {
    term: Term,
}

impl TermDisplay {
    /// Create a terminal display writing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for TermDisplay {
    fn set_view_count(&self, text: &str) -> Result<(), DisplayError> {
        self.term.write_line(text)?;
        Ok(())
    }
}
