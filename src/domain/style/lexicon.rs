//! Fixed word lists used by the style heuristics.

/// Words skipped when ranking frequent content words.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with", "she", "her", "his",
    "him", "they", "them", "their", "we", "us", "our", "you", "your", "i", "me", "my", "this",
    "these", "those", "there", "where", "when", "what", "why", "how", "can", "could", "would",
    "should", "may", "might", "must", "shall", "do", "does", "did", "have", "had",
];

/// Emotion categories and the words that signal them, in reporting order.
pub const EMOTION_WORDS: &[(&str, &[&str])] = &[
    (
        "joy",
        &["happy", "excited", "thrilled", "delighted", "cheerful", "elated", "joyful", "ecstatic"],
    ),
    (
        "sadness",
        &["sad", "depressed", "melancholy", "gloomy", "sorrowful", "heartbroken", "dejected"],
    ),
    (
        "anger",
        &["angry", "furious", "irritated", "annoyed", "rage", "mad", "outraged", "livid"],
    ),
    (
        "fear",
        &["scared", "afraid", "terrified", "anxious", "worried", "nervous", "frightened"],
    ),
    (
        "love",
        &["love", "adore", "cherish", "treasure", "devoted", "affectionate", "fond"],
    ),
    (
        "surprise",
        &["surprised", "shocked", "amazed", "astonished", "stunned", "bewildered"],
    ),
];

/// Markers of formal register.
pub const FORMAL_MARKERS: &[&str] = &[
    "therefore",
    "furthermore",
    "consequently",
    "moreover",
    "nevertheless",
    "however",
    "indeed",
    "thus",
    "hence",
    "accordingly",
    "subsequently",
];

/// Markers of informal register.
pub const INFORMAL_MARKERS: &[&str] = &[
    "i'm", "don't", "can't", "won't", "isn't", "aren't", "wasn't", "weren't", "gonna", "wanna",
    "gotta", "yeah", "ok", "okay", "totally", "really",
];

/// Conjunctions counted as clause boundaries.
pub const CLAUSE_CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "so", "yet", "for", "nor", "because", "although", "since", "while", "if",
    "unless", "when", "where", "after", "before",
];

/// Positive sentiment cues.
pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "like", "enjoy",
    "happy", "pleased",
];

/// Negative sentiment cues.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "dislike", "sad", "angry", "disappointed",
    "upset",
];

/// Suffixes treated as adjective-like by the part-of-speech heuristic.
pub const ADJECTIVE_SUFFIXES: &[&str] = &["ly", "ful", "less", "able", "ible"];

/// Returns true if the word is in the stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Counts how many of `markers` occur anywhere in `text_lower`.
///
/// Each marker counts at most once, and matches are plain substring hits.
pub fn count_marker_hits(text_lower: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|m| text_lower.contains(*m)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_hits_count_each_marker_once() {
        let text = "however, however, therefore";
        assert_eq!(count_marker_hits(text, FORMAL_MARKERS), 2);
    }

    #[test]
    fn marker_hits_match_substrings() {
        // "ok" is found inside "took"
        assert_eq!(count_marker_hits("she took it", &["ok"]), 1);
    }

    #[test]
    fn emotion_lexicon_has_six_categories() {
        let names: Vec<_> = EMOTION_WORDS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["joy", "sadness", "anger", "fear", "love", "surprise"]);
    }

    #[test]
    fn stop_words_are_lowercase() {
        assert!(STOP_WORDS.iter().all(|w| w.chars().all(|c| c.is_lowercase())));
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("garden"));
    }
}
