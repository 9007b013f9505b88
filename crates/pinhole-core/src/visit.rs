/// Produces a navigable absolute URL from an arbitrary user-entered link.
///
/// Trims surrounding whitespace and prefixes `https://` unless the value
/// already names an http or https scheme. Total: never fails, including on
/// empty input. Actually opening the returned address is the caller's
/// concern.
pub fn normalize(link: &str) -> String {
    let trimmed = link.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}
