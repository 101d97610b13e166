use whatlang::{Detector, Lang};

use crate::preprocess::{ChatPreprocessor, Preprocessor};

/// One ranked guess from [`LanguageClassifier::detect`].
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    /// ISO 639-1 code where one exists, ISO 639-3 otherwise.
    pub code: String,
    pub probability: f64,
}

/// Statistical language classifier over whatlang's built-in trigram
/// profiles. Cheap to rebuild; a rebuild only changes the floor, the
/// profile corpus is fixed.
pub struct LanguageClassifier {
    detector: Detector,
    floor: f64,
}

impl LanguageClassifier {
    pub fn new(floor: f64) -> Self {
        Self {
            detector: Detector::new(),
            floor,
        }
    }

    /// Minimum probability a guess needs to be reported.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Guesses above the floor, strongest first; empty when the text
    /// carries too little signal. No I/O, deterministic per input.
    pub fn detect(&self, text: &str) -> Vec<DetectedLanguage> {
        let cleaned = ChatPreprocessor.process(text);
        if cleaned.is_empty() {
            return Vec::new();
        }

        let mut guesses: Vec<DetectedLanguage> = self
            .detector
            .detect(&cleaned)
            .map(|info| DetectedLanguage {
                code: iso_code(info.lang()).to_string(),
                probability: info.confidence(),
            })
            .into_iter()
            .collect();

        guesses.retain(|guess| guess.probability >= self.floor);
        guesses.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        guesses
    }
}

/// Map whatlang's language ids to ISO 639-1 codes, falling back to the
/// ISO 639-3 code for languages without a mapping here.
fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Fra => "fr",
        Lang::Spa => "es",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Swe => "sv",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Tha => "th",
        Lang::Vie => "vi",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        l => l.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_plain_english() {
        let classifier = LanguageClassifier::new(0.0);
        let guesses =
            classifier.detect("This is a longer English sentence to ensure correct detection.");
        assert_eq!(guesses[0].code, "en");
    }

    #[test]
    fn detects_french() {
        let classifier = LanguageClassifier::new(0.0);
        let guesses = classifier.detect("Bonjour tout le monde, comment allez-vous aujourd'hui ?");
        assert_eq!(guesses[0].code, "fr");
    }

    #[test]
    fn empty_input_yields_no_guesses() {
        let classifier = LanguageClassifier::new(0.0);
        assert!(classifier.detect("   \n ").is_empty());
    }

    #[test]
    fn floor_above_any_confidence_yields_empty() {
        let classifier = LanguageClassifier::new(1.1);
        let guesses =
            classifier.detect("This is a longer English sentence to ensure correct detection.");
        assert!(guesses.is_empty());
    }

    #[test]
    fn floor_is_exposed_for_snapshot_checks() {
        assert_eq!(LanguageClassifier::new(0.25).floor(), 0.25);
    }
}
