use crate::entry::PendingEntry;
use crate::error::Result;
use crate::record::LinkRecord;

/// The call seam consumed by presentation layers.
///
/// Implementations hold the authoritative ordered sequence of link records
/// and the audit log derived from it. The registry has a single logical
/// state, monotonic growth: submissions append, nothing mutates or removes.
/// All operations are synchronous and complete in bounded time.
pub trait Registry: Send + Sync + 'static {
    /// Expands a batch of raw entries into finalized records, in submission
    /// order, and appends them to the registry.
    ///
    /// Each created record also appends one audit entry to the log, in the
    /// same order. Submission never fails on input: malformed validity
    /// values fall back to the default window, missing codes are generated,
    /// and empty URLs are stored as empty strings.
    fn submit_batch(&self, entries: Vec<PendingEntry>) -> Result<Vec<LinkRecord>>;

    /// Snapshot of all records, in creation order.
    fn records(&self) -> Result<Vec<LinkRecord>>;

    /// Number of records currently held.
    fn count(&self) -> Result<usize>;

    /// Snapshot of the audit log, in creation order.
    fn audit_log(&self) -> Result<Vec<String>>;
}
