use crate::Generator;
use pinhole_core::ShortCode;
use rand::Rng;
use typed_builder::TypedBuilder;

/// Lowercase base-36 alphabet: digits then letters.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const DEFAULT_LENGTH: usize = 5;

/// A pseudo-random alphanumeric code generator.
///
/// Draws fixed-length codes from the base-36 alphabet using the thread-local
/// RNG. With the default length of 5 the code space is 36^5 (~60 million),
/// so collisions across many submissions are possible and not detected.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RandomGenerator {
    /// Number of characters per generated code.
    #[builder(default = DEFAULT_LENGTH)]
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of the default length.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Configured code length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new(code)
    }
}
