use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A finalized link registration.
///
/// Records are created exactly once at submission time and never mutated or
/// deleted afterwards. No expiry sweep runs: records past `expires_at`
/// remain listed and visitable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The trimmed source URL. May be empty; no validation is performed.
    pub original: String,
    /// The short identifier for this link.
    pub code: ShortCode,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the link stops being considered active. Always after
    /// `created_at`.
    pub expires_at: Timestamp,
}

impl LinkRecord {
    /// Renders the creation event for the audit log.
    pub fn audit_entry(&self) -> String {
        format!(
            "Created short code \"{}\" for {} (valid until {})",
            self.code, self.original, self.expires_at
        )
    }
}
