//! Short-code generation for the pinhole link registry.
//!
//! Generators are pure: they never consult the registry, so nothing here
//! guarantees uniqueness across submissions. Two submissions can collide;
//! the registry stores whatever it is given.

pub mod random;
pub mod seq;

pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use pinhole_core::ShortCode;

/// Trait for producing short codes.
///
/// Implementations don't interact with storage and must not block.
/// Generation is side-effect-free apart from consuming randomness.
pub trait Generator: Send + Sync + 'static {
    /// Generates a fresh short code.
    fn generate(&self) -> ShortCode;

    /// Honors a caller-supplied custom code verbatim, falling back to
    /// [`generate`](Self::generate) when none was given.
    fn resolve(&self, custom: Option<ShortCode>) -> ShortCode {
        custom.unwrap_or_else(|| self.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_the_custom_code() {
        let generator = SeqGenerator::with_prefix("gen");
        let code = generator.resolve(Some(ShortCode::new("abc")));
        assert_eq!(code.as_str(), "abc");
    }

    #[test]
    fn resolve_falls_back_to_generation() {
        let generator = SeqGenerator::with_prefix("gen");
        let code = generator.resolve(None);
        assert_eq!(code.as_str(), "gen0000");
    }
}
