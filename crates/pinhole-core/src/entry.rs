use crate::shortcode::ShortCode;
use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Validity window applied when the field is blank or does not parse as a
/// positive number.
pub const DEFAULT_VALIDITY: SignedDuration = SignedDuration::from_mins(10);

/// A single raw submission row, exactly as collected from user-editable
/// fields.
///
/// Values arrive untyped; interpretation happens at submission time. Pending
/// entries are not retained after the batch they belong to is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
pub struct PendingEntry {
    /// The original URL to register. Trimmed at submission; an empty value
    /// is still accepted and stored as an empty string.
    #[builder(setter(into))]
    pub url: String,
    /// Raw validity-window field, in minutes. May be empty or non-numeric.
    #[builder(default, setter(into, strip_option))]
    pub validity: Option<String>,
    /// Optional custom short code, honored verbatim when non-empty.
    #[builder(default, setter(into, strip_option))]
    pub code: Option<String>,
}

impl PendingEntry {
    /// Interprets the raw validity field as a duration.
    ///
    /// Empty, non-numeric, non-finite, and non-positive values all fall back
    /// to [`DEFAULT_VALIDITY`]. Fractional minutes are honored.
    pub fn validity_duration(&self) -> SignedDuration {
        self.validity
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
            .and_then(|minutes| SignedDuration::try_from_secs_f64(minutes * 60.0).ok())
            .unwrap_or(DEFAULT_VALIDITY)
    }

    /// Returns the custom code, if a non-empty one was supplied.
    ///
    /// Only the empty string counts as absent; whitespace is a code like any
    /// other character.
    pub fn custom_code(&self) -> Option<ShortCode> {
        self.code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(ShortCode::new)
    }
}
