use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default chat-line preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), then fold line breaks and
        // repeated whitespace into single spaces
        let text: String = text.nfkc().collect();

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct ChatPreprocessor;
impl Preprocessor for ChatPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(ChatPreprocessor.process("  bonjour \n"), "bonjour");
    }

    #[test]
    fn folds_line_breaks_into_spaces() {
        assert_eq!(
            ChatPreprocessor.process("salut\r\ntout  le monde"),
            "salut tout le monde"
        );
    }

    #[test]
    fn normalizes_fullwidth_forms() {
        assert_eq!(ChatPreprocessor.process("Ｈｅｌｌｏ"), "Hello");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(ChatPreprocessor.process("   "), "");
    }
}
