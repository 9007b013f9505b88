use crate::Generator;
use pinhole_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic counter-based code generator.
///
/// Produces codes like `demo0000`, `demo0001`, ... in order. Codes are
/// unique only within a single instance; use it where stable, predictable
/// codes matter more than randomness (tests, scripted demos).
#[derive(Debug)]
pub struct SeqGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SeqGenerator {
    /// Creates a generator whose codes start with the given prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        ShortCode::new(format!("{}{:04}", self.prefix, count))
    }
}
