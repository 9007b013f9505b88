//! Core types and traits for the pinhole link registry.
//!
//! This crate provides the shared data model (pending entries, finalized
//! link records, short codes), the [`Registry`] trait consumed by
//! presentation layers, and the clock seam used for expiry math.

pub mod clock;
pub mod entry;
pub mod error;
pub mod record;
pub mod registry;
pub mod shortcode;
pub mod visit;

pub use clock::{Clock, SystemClock};
pub use entry::PendingEntry;
pub use error::RegistryError;
pub use record::LinkRecord;
pub use registry::Registry;
pub use shortcode::ShortCode;
pub use visit::normalize;
