/// Fallback pair used by the random-word endpoint
pub const DEFAULT_LANGUAGE_FROM: &str = "EN";
pub const DEFAULT_LANGUAGE_TO: &str = "CZ";

/// Normalize a language tag such as `en` or ` CZ ` to its stored upper-case form.
///
/// Tags are 2 to 8 ASCII letters. Returns `None` for anything else.
pub fn normalize_language(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if !(2..=8).contains(&tag.len()) || !tag.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(tag.to_ascii_uppercase())
}

/// Like [`normalize_language`] but treats a blank tag as the given default
pub fn normalize_language_or(tag: Option<&str>, default: &str) -> Option<String> {
    match tag.map(str::trim) {
        None | Some("") => Some(default.to_string()),
        Some(tag) => normalize_language(tag),
    }
}
