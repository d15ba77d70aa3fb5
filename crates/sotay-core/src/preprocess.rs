use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default notes preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Composed form so decomposed diacritics scan like precomposed ones
        let text: String = text.nfc().collect();

        text.replace("\r\n", "\n").replace('\r', "\n")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
