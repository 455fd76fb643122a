//! Counter endpoint payload types.

use serde::Deserialize;

/// View-count payload served by the counter endpoint.
///
/// The endpoint answers with a JSON object carrying a numeric `views` field,
/// e.g. `{"views": 42}`. Sibling fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ViewCount {
    /// Total number of page views.
    pub views: u64,
}
