use std::sync::LazyLock;

use regex::{Captures, Regex};
use sotay_types::ExamplePair;

/// `word /phonetic/ <sep> translation`, separator one of `:` `-` `–` `—`.
/// Headwords are letters, spaces, tabs, hyphens and apostrophes; never span lines.
const DEFINITION: &str =
    r"([A-Za-z][\p{L}\p{M} \t\-']*?)[ \t]*/([^/\n]+)/[ \t]*[\-:–—][ \t]*([^\n]+)";

/// `"source sentence" (target sentence)`, curly quotes and fullwidth parens allowed
const EXAMPLE: &str = r#"["“]([^"“”]+)["”]\s*[(（]([^)）]+)[)）]"#;

static DEFINITION_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFINITION).expect("definition pattern is valid"));

static DEFINITION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{DEFINITION})")).expect("definition pattern is valid")
});

static EXAMPLE_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXAMPLE).expect("example pattern is valid"));

static EXAMPLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{EXAMPLE})")).expect("example pattern is valid"));

/// Trimmed pieces of a recognized definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionMatch<'t> {
    pub word: &'t str,
    pub phonetic: &'t str,
    /// Everything after the separator, context not yet split off
    pub gloss: &'t str,
}

/// Match a definition at the start of an already trimmed line
pub fn match_definition_line(line: &str) -> Option<DefinitionMatch<'_>> {
    DEFINITION_LINE
        .captures(line)
        .and_then(|caps| definition_from(&caps))
}

/// Match an example pair at the start of an already trimmed line
pub fn match_example_line(line: &str) -> Option<ExamplePair> {
    EXAMPLE_LINE.captures(line).and_then(|caps| example_from(&caps))
}

/// Every definition anywhere in the text, in document order
pub fn find_definitions(text: &str) -> impl Iterator<Item = DefinitionMatch<'_>> {
    DEFINITION_ANYWHERE
        .captures_iter(text)
        .filter_map(|caps| definition_from(&caps))
}

/// Every example pair anywhere in the text, in document order
pub fn find_examples(text: &str) -> impl Iterator<Item = ExamplePair> + '_ {
    EXAMPLE_ANYWHERE
        .captures_iter(text)
        .filter_map(|caps| example_from(&caps))
}

fn definition_from<'t>(caps: &Captures<'t>) -> Option<DefinitionMatch<'t>> {
    let word = caps.get(1)?.as_str().trim();
    if word.is_empty() {
        return None;
    }

    Some(DefinitionMatch {
        word,
        phonetic: caps.get(2)?.as_str().trim(),
        gloss: caps.get(3)?.as_str().trim(),
    })
}

fn example_from(caps: &Captures<'_>) -> Option<ExamplePair> {
    let source = caps.get(1)?.as_str().trim();
    let target = caps.get(2)?.as_str().trim();
    if source.is_empty() || target.is_empty() {
        return None;
    }

    Some(ExamplePair {
        source: source.to_string(),
        target: target.to_string(),
    })
}
