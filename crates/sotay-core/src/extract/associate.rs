use std::collections::HashSet;

use sotay_types::{ExamplePair, VocabularyCandidate};

/// Pair examples with definitions and return phrase entries for the leftovers.
///
/// Each definition without an example takes the first example whose source
/// contains its word, case-insensitively. An example may serve several
/// definitions. This is a substring heuristic: a short headword can land on an
/// unrelated sentence that happens to contain it.
pub fn associate(
    definitions: &mut [VocabularyCandidate],
    examples: &[ExamplePair],
) -> Vec<VocabularyCandidate> {
    let lowered: Vec<String> = examples.iter().map(|ex| ex.source.to_lowercase()).collect();

    for candidate in definitions.iter_mut() {
        if candidate.has_example() {
            continue;
        }

        let word = candidate.word.to_lowercase();
        if let Some(index) = lowered.iter().position(|source| source.contains(&word)) {
            tracing::debug!("Paired '{}' with example #{}", candidate.word, index);
            candidate.attach_example(&examples[index]);
        }
    }

    let used: HashSet<(&str, &str)> = definitions
        .iter()
        .filter_map(|c| Some((c.example_source.as_deref()?, c.example_target.as_deref()?)))
        .collect();

    examples
        .iter()
        .filter(|ex| !used.contains(&(ex.source.as_str(), ex.target.as_str())))
        .map(VocabularyCandidate::phrase)
        .collect()
}
