use sotay_types::VocabularyCandidate;

use super::patterns;

/// Walk the text line by line, keeping one open entry at a time.
///
/// A definition line closes the open entry and starts a new one. An example
/// line attaches to the open entry unless it already has one.
pub fn scan_lines(text: &str) -> Vec<VocabularyCandidate> {
    let mut results = Vec::new();
    let mut current: Option<VocabularyCandidate> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(definition) = patterns::match_definition_line(line) {
            if let Some(previous) = current.take() {
                results.push(previous);
            }
            tracing::debug!("Definition line: '{}'", definition.word);
            current = Some(definition.into());
            continue;
        }

        if let Some(example) = patterns::match_example_line(line) {
            match current.as_mut() {
                Some(candidate) if !candidate.has_example() => {
                    candidate.attach_example(&example);
                }
                Some(candidate) => {
                    tracing::debug!("'{}' already has an example, skipping", candidate.word);
                }
                None => {
                    tracing::debug!("Example before any definition: '{}'", example.source);
                }
            }
        }
    }

    results.extend(current);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_definition_without_example() {
        let results = scan_lines("Cache /kæʃ/: Bộ nhớ đệm");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "Cache");
        assert_eq!(results[0].phonetic.as_deref(), Some("kæʃ"));
        assert_eq!(results[0].translation, "Bộ nhớ đệm");
        assert!(results[0].context.is_none());
        assert!(results[0].example_source.is_none());
        assert!(results[0].example_target.is_none());
    }

    #[test]
    fn test_example_attaches_across_blank_and_noise_lines() {
        let text = "Bypass /bɪˈpɑːs/: Bỏ qua (Bypass the proxy).\n\nSome note here\n\"I will bypass the firewall.\" (Tôi sẽ bỏ qua tường lửa.)";
        let results = scan_lines(text);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].context.as_deref(), Some("Bypass the proxy"));
        assert_eq!(
            results[0].example_source.as_deref(),
            Some("I will bypass the firewall.")
        );
        assert_eq!(
            results[0].example_target.as_deref(),
            Some("Tôi sẽ bỏ qua tường lửa.")
        );
    }

    #[test]
    fn test_first_example_wins() {
        let text = "Cache /kæʃ/: Bộ nhớ đệm\n\"First cache.\" (Một.)\n\"Second cache.\" (Hai.)";
        let results = scan_lines(text);
        assert_eq!(results[0].example_source.as_deref(), Some("First cache."));
        assert_eq!(results[0].example_target.as_deref(), Some("Một."));
    }

    #[test]
    fn test_example_goes_to_nearest_definition_above() {
        let text = "Cache /kæʃ/: Bộ nhớ đệm\nProxy /ˈprɒksi/: Máy chủ trung gian\n\"Clear it now.\" (Xoá nó ngay.)";
        let results = scan_lines(text);
        assert_eq!(results.len(), 2);
        assert!(results[0].example_source.is_none());
        assert_eq!(results[1].example_source.as_deref(), Some("Clear it now."));
    }

    #[test]
    fn test_leading_example_is_dropped() {
        let text = "\"Orphan.\" (Mồ côi.)\nCache /kæʃ/: Bộ nhớ đệm";
        let results = scan_lines(text);
        assert_eq!(results.len(), 1);
        assert!(results[0].example_source.is_none());
    }

    #[test]
    fn test_indented_lines_are_trimmed() {
        let results = scan_lines("    Cache /kæʃ/: Bộ nhớ đệm\n\t\"Cache it.\" (Lưu đệm nó.)");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].example_source.as_deref(), Some("Cache it."));
    }
}
