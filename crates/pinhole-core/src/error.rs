use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors surfaced by registry implementations.
///
/// User input never produces an error: every malformed field has a
/// permissive fallback. The only failure mode is internal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry lock was poisoned by a panicking writer.
    #[error("registry state lock is poisoned")]
    StatePoisoned,
}
