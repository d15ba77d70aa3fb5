use sotay_types::{ExamplePair, VocabularyCandidate};

use super::patterns;

/// Definitions and examples found independently over the whole text
#[derive(Debug, Default)]
pub struct GlobalScan {
    pub definitions: Vec<VocabularyCandidate>,
    pub examples: Vec<ExamplePair>,
}

pub fn scan_text(text: &str) -> GlobalScan {
    let definitions: Vec<VocabularyCandidate> = patterns::find_definitions(text)
        .map(VocabularyCandidate::from)
        .collect();
    let examples: Vec<ExamplePair> = patterns::find_examples(text).collect();

    tracing::debug!(
        "Global scan: {} definitions, {} examples",
        definitions.len(),
        examples.len()
    );

    GlobalScan {
        definitions,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_both_kinds_in_order() {
        let text = "1. Từ khóa:\nCache /kæʃ/: Bộ nhớ đệm\n2. Mẫu câu:\n\"Clear the cache.\" (Xoá bộ nhớ đệm.)\nProxy /ˈprɒksi/ - Máy chủ trung gian";
        let scan = scan_text(text);
        let words: Vec<&str> = scan.definitions.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["Cache", "Proxy"]);
        assert_eq!(scan.examples.len(), 1);
        assert!(scan.definitions.iter().all(|c| !c.has_example()));
    }

    #[test]
    fn test_heading_without_colon_not_merged() {
        let scan = scan_text("Tu khoa\nCache /kæʃ/: Bộ nhớ đệm\n\"Clear the cache.\" (Xoá bộ nhớ đệm.)");
        let words: Vec<&str> = scan.definitions.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["Cache"]);
        assert_eq!(scan.examples.len(), 1);
    }

    #[test]
    fn test_definitions_mid_line() {
        let scan = scan_text("Notes: see Cache /kæʃ/: Bộ nhớ đệm");
        assert_eq!(scan.definitions.len(), 1);
        assert_eq!(scan.definitions[0].translation, "Bộ nhớ đệm");
    }

    #[test]
    fn test_nothing_recognizable() {
        let scan = scan_text("just some prose without structure");
        assert!(scan.definitions.is_empty());
        assert!(scan.examples.is_empty());
    }
}
