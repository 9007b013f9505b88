use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short identifier associated with an original URL.
///
/// Codes are stored verbatim: user-supplied custom codes are not checked
/// against any character set, and generated codes are not checked for
/// collisions. Uniqueness is desired but not enforced.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Creates a short code from any string value, as-is.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShortCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_value_verbatim() {
        let code = ShortCode::new("abc");
        assert_eq!(code.as_str(), "abc");
        assert_eq!(code.to_string(), "abc");
    }

    #[test]
    fn no_character_set_restrictions() {
        // Custom codes are honored as-is, spaces and punctuation included.
        assert_eq!(ShortCode::new("my code!").as_str(), "my code!");
        assert_eq!(ShortCode::new(" ").as_str(), " ");
    }

    #[test]
    fn length_accessors() {
        assert_eq!(ShortCode::new("ab1cd").len(), 5);
        assert!(ShortCode::new("").is_empty());
    }
}
