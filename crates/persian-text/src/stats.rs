//! Text statistics for editor status bars

use std::fmt;

/// Character and word counts of raw (unfixed) text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Number of chars, including spaces and line breaks
    pub chars: usize,
    /// Number of non-empty, space-separated words
    pub words: usize,
}

impl TextStats {
    /// Count chars and words in `text`
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.split(' ').filter(|w| !w.is_empty()).count(),
        }
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :Char  |  {} :Word", self.chars, self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(TextStats::of(""), TextStats { chars: 0, words: 0 });
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let stats = TextStats::of("سلام دنیا");
        assert_eq!(stats.chars, 9);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_repeated_spaces() {
        assert_eq!(TextStats::of("  a   b ").words, 2);
    }

    #[test]
    fn test_newline_is_not_a_separator() {
        assert_eq!(TextStats::of("a\nb").words, 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(TextStats::of("ab cd").to_string(), "5 :Char  |  2 :Word");
    }
}
