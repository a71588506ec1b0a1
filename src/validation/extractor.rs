/*!
 * Extraction of a JSON object from free-form model output.
 *
 * Generative models do not reliably emit bare JSON: replies arrive wrapped in
 * markdown fences, preceded by chatter, or cut off at the token limit. The
 * routine here is a best-effort cleanup pass, not a parser. Its output may
 * still be invalid JSON and the caller is expected to handle that.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ExtractionError;

/// Markdown fence markers, with or without the `json` language tag
static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:json)?").unwrap()
});

/// Extract and repair the JSON object embedded in `raw`
///
/// Steps, in order:
/// 1. remove code fences and surrounding whitespace
/// 2. slice from the first `{` to the last `}` when they are in order
/// 3. if the text does not end with `}` and has more `{` than `}`, close a
///    dangling string (odd quote count) and append the missing braces
///
/// Fails only when the text contains no `{` at all.
pub fn extract_json_object(raw: &str) -> Result<String, ExtractionError> {
    let unfenced = CODE_FENCE.replace_all(raw, "");
    let mut text = unfenced.trim();

    let start = text.find('{').ok_or(ExtractionError)?;
    if let Some(end) = text.rfind('}') {
        if end > start {
            text = &text[start..=end];
        }
    }

    let mut repaired = text.to_string();
    if !repaired.ends_with('}') {
        let opens = repaired.matches('{').count();
        let closes = repaired.matches('}').count();

        if opens > closes {
            if repaired.matches('"').count() % 2 != 0 {
                repaired.push('"');
            }
            repaired.push_str(&"}".repeat(opens - closes));
            debug!("Repaired truncated model output: {}", repaired);
        }
    }

    Ok(repaired)
}
