//! Rule-based mood classifier.
//!
//! Lowercases the text, counts how many terms of each set appear in it (a
//! repeated term counts once), and picks the strictly highest-scoring label.
//! Ties between leading labels and texts with no matches classify as neutral.

use avyo_common::MoodLabel;
use serde::Serialize;

const HAPPY_TERMS: &[&str] = &[
    "happy", "great", "awesome", "excellent", "joy", "love", "like", ":)", "😊", "😄",
];

const SAD_TERMS: &[&str] = &[
    "sad",
    "unhappy",
    "depressed",
    "disappointed",
    "upset",
    "down",
    ":(",
    "😢",
    "😭",
];

const ANGRY_TERMS: &[&str] = &[
    "angry",
    "mad",
    "frustrated",
    "frustrating",
    "annoyed",
    "furious",
    "hate",
    "upsetting",
    "😠",
    "😡",
];

/// Per-label match counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MoodScores {
    pub happy: usize,
    pub sad: usize,
    pub angry: usize,
}

impl MoodScores {
    /// Strict-majority label; any tie for the lead is neutral.
    pub fn label(&self) -> MoodLabel {
        let Self { happy, sad, angry } = *self;
        if happy > sad && happy > angry {
            MoodLabel::Happy
        } else if sad > happy && sad > angry {
            MoodLabel::Sad
        } else if angry > happy && angry > sad {
            MoodLabel::Angry
        } else {
            MoodLabel::Neutral
        }
    }
}

/// The three keyword sets used for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodLexicon {
    happy: Vec<String>,
    sad: Vec<String>,
    angry: Vec<String>,
}

impl Default for MoodLexicon {
    fn default() -> Self {
        Self::with_terms(HAPPY_TERMS, SAD_TERMS, ANGRY_TERMS)
    }
}

impl MoodLexicon {
    /// Build a lexicon from custom term sets. Terms are lowercased and empty
    /// terms dropped.
    pub fn with_terms<S: AsRef<str>>(happy: &[S], sad: &[S], angry: &[S]) -> Self {
        fn normalize<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
            terms
                .iter()
                .map(|t| t.as_ref().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        }
        Self {
            happy: normalize(happy),
            sad: normalize(sad),
            angry: normalize(angry),
        }
    }

    pub fn scores(&self, text: &str) -> MoodScores {
        let text = text.to_lowercase();
        let count = |terms: &[String]| -> usize {
            terms
                .iter()
                .filter(|term| text.contains(term.as_str()))
                .count()
        };
        MoodScores {
            happy: count(&self.happy),
            sad: count(&self.sad),
            angry: count(&self.angry),
        }
    }

    pub fn classify(&self, text: &str) -> MoodLabel {
        self.scores(text).label()
    }

    /// Classify a whole conversation as one text joined by spaces.
    pub fn classify_history<S: AsRef<str>>(&self, messages: &[S]) -> MoodLabel {
        let joined = messages
            .iter()
            .map(|m| m.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        self.classify(&joined)
    }
}

/// Classify one message with the default lexicon.
pub fn classify(text: &str) -> MoodLabel {
    MoodLexicon::default().classify(text)
}

/// Classify a conversation with the default lexicon.
pub fn classify_history<S: AsRef<str>>(messages: &[S]) -> MoodLabel {
    MoodLexicon::default().classify_history(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral() {
        assert_eq!(classify(""), MoodLabel::Neutral);
    }

    #[test]
    fn two_happy_terms_win() {
        assert_eq!(classify("I am so happy and excellent today"), MoodLabel::Happy);
    }

    #[test]
    fn equal_counts_fall_through_to_neutral() {
        assert_eq!(classify("I am happy but also sad"), MoodLabel::Neutral);
    }

    #[test]
    fn frustrating_and_upsetting_is_angry() {
        let scores = MoodLexicon::default().scores("this is frustrating and upsetting");
        assert_eq!(scores.angry, 2);
        assert_eq!(scores.sad, 1);
        assert_eq!(classify("this is frustrating and upsetting"), MoodLabel::Angry);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("I'M FURIOUS"), MoodLabel::Angry);
        assert_eq!(classify("Feeling Depressed"), MoodLabel::Sad);
    }

    #[test]
    fn repeated_term_counts_once() {
        let scores = MoodLexicon::default().scores("sad sad great");
        assert_eq!(scores.sad, 1);
        assert_eq!(scores.happy, 1);
        assert_eq!(classify("sad sad great"), MoodLabel::Neutral);
        assert_eq!(classify("so happy happy, a bit sad"), MoodLabel::Neutral);
    }

    #[test]
    fn distinct_terms_each_count() {
        let scores = MoodLexicon::default().scores("sad, upset and depressed but great");
        assert_eq!(scores.sad, 3);
        assert_eq!(scores.label(), MoodLabel::Sad);
    }

    #[test]
    fn emoji_and_emoticons_count() {
        assert_eq!(classify("😊"), MoodLabel::Happy);
        assert_eq!(classify("today :("), MoodLabel::Sad);
        assert_eq!(classify("😡😡"), MoodLabel::Angry);
    }

    #[test]
    fn no_matches_is_neutral() {
        assert_eq!(classify("what's on the calendar tomorrow?"), MoodLabel::Neutral);
    }

    #[test]
    fn three_way_tie_is_neutral() {
        assert_eq!(classify("great, sad, angry"), MoodLabel::Neutral);
    }

    #[test]
    fn history_is_classified_as_one_text() {
        let messages = ["I'm annoyed", "and mad", "but I love pizza"];
        assert_eq!(classify_history(&messages), MoodLabel::Angry);
        let empty: [&str; 0] = [];
        assert_eq!(classify_history(&empty), MoodLabel::Neutral);
    }

    #[test]
    fn custom_lexicon_drops_empty_terms() {
        let lexicon = MoodLexicon::with_terms(&["YAY", ""], &["boo"], &["grr"]);
        let scores = lexicon.scores("yay");
        assert_eq!(scores, MoodScores { happy: 1, sad: 0, angry: 0 });
        assert_eq!(lexicon.classify(""), MoodLabel::Neutral);
    }

    #[test]
    fn label_requires_strict_lead() {
        let s = MoodScores { happy: 2, sad: 2, angry: 1 };
        assert_eq!(s.label(), MoodLabel::Neutral);
        let s = MoodScores { happy: 0, sad: 1, angry: 2 };
        assert_eq!(s.label(), MoodLabel::Angry);
    }
}
