//! Cleanup of model output before it is treated as JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RelayError;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Removes markdown code-fence markers from model output.
///
/// Surrounding whitespace is trimmed, then every ```` ```json ```` opening
/// marker and every bare ```` ``` ```` marker is dropped wherever it appears.
pub fn strip_code_fences(text: &str) -> String {
    text.trim()
        .replace(JSON_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// Strips fences, parses the remainder as JSON and checks it against `T`.
///
/// Syntax errors surface as [`RelayError::Parse`], well-formed JSON of the
/// wrong shape as [`RelayError::Schema`].
pub fn parse_generated<T: DeserializeOwned>(text: &str) -> Result<T, RelayError> {
    let cleaned = strip_code_fences(text);
    let value: Value = serde_json::from_str(&cleaned).map_err(RelayError::Parse)?;
    serde_json::from_value(value).map_err(RelayError::Schema)
}
