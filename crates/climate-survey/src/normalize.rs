/// Flatten line breaks to spaces, drop everything through the first `]`, and
/// trim.
///
/// Only the first closing bracket is consumed, so a second bracketed token
/// stays in the body verbatim. A block with no `]` keeps all of its text.
#[must_use]
pub fn normalize_body(block: &str) -> String {
    let flattened = block.replace("\r\n", "\n").replace(['\n', '\r'], " ");
    let body = match flattened.find(']') {
        Some(close) => &flattened[close + 1..],
        None => flattened.as_str(),
    };
    body.trim().to_string()
}
