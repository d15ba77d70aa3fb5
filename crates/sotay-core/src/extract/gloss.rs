use std::sync::LazyLock;

use regex::Regex;

/// A parenthetical closing the gloss, optionally followed by a period
static TRAILING_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)\s*\.?\s*$").expect("context pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gloss {
    pub translation: String,
    pub context: Option<String>,
}

/// Split a trailing `(context)` off the translation text.
///
/// Only the last parenthetical is considered, and only when nothing but an
/// optional period follows it. Earlier parentheticals stay in the translation.
/// A blank `( )` is still cut from the translation but yields no context
/// rather than an empty one.
pub fn split_gloss(raw: &str) -> Gloss {
    let raw = raw.trim();

    let Some(caps) = TRAILING_CONTEXT.captures(raw) else {
        return Gloss {
            translation: raw.to_string(),
            context: None,
        };
    };

    let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
        return Gloss {
            translation: raw.to_string(),
            context: None,
        };
    };

    let context = inner.as_str().trim();
    let translation = raw[..whole.start()].trim().trim_end_matches(['.', ',']);

    Gloss {
        translation: translation.to_string(),
        context: (!context.is_empty()).then(|| context.to_string()),
    }
}
