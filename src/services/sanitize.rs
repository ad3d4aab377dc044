//! Cleanup of raw model output before JSON parsing.
//!
//! The model is asked for pure JSON but commonly wraps it in markdown code
//! fences, and not always at the start or end of the text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening fence with a json language tag.
static TAGGED_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json").expect("tagged fence pattern"));

/// Bare fence, covering untagged openings and all closings.
static BARE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```").expect("bare fence pattern"));

/// Remove every code-fence marker from `raw`, wherever it appears, leaving
/// the candidate JSON substring. Text without fences passes through
/// unchanged.
pub fn strip_code_fences(raw: &str) -> String {
    let without_tagged = TAGGED_FENCE.replace_all(raw, "");
    BARE_FENCE.replace_all(&without_tagged, "").into_owned()
}
