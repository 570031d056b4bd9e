//! Simplified visual reordering
//!
//! Not UAX #9: a shaped line is reversed as a whole, then every embedded
//! Latin-class run is reversed back so numbers, Latin words and punctuation
//! still read left-to-right. No embedding levels, no mirroring.

/// Check whether a character belongs to a Latin-class run
pub fn is_latin_class(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '+' | '-' | '*' | '/' | '.' | ',' | '!' | '?' | ':' | ';' | '\'' | '"'
                | '(' | ')' | '[' | ']' | '@' | '#' | '$' | '%' | '&' | '=' | '_'
                | '<' | '>'
        )
}

/// Maximal Latin-class run within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatinRun {
    /// Start index in the line
    pub start: usize,
    /// End index in the line (exclusive)
    pub end: usize,
}

impl LatinRun {
    /// Number of chars covered by the run
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find every maximal Latin-class run in `chars`
///
/// A run starts and ends on a qualifying char. Whitespace is absorbed only
/// when another qualifying char follows the gap.
pub fn latin_runs(chars: &[char]) -> Vec<LatinRun> {
    let len = chars.len();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < len {
        if !is_latin_class(chars[i]) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        loop {
            while end < len && is_latin_class(chars[end]) {
                end += 1;
            }

            let mut gap_end = end;
            while gap_end < len && chars[gap_end].is_whitespace() {
                gap_end += 1;
            }

            if gap_end > end && gap_end < len && is_latin_class(chars[gap_end]) {
                end = gap_end;
            } else {
                break;
            }
        }

        runs.push(LatinRun { start, end });
        i = end;
    }

    runs
}

/// Convert a shaped logical-order line into visual order, in place
pub fn reorder_line(chars: &mut [char]) {
    chars.reverse();

    for run in latin_runs(chars) {
        chars[run.start..run.end].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn reordered(s: &str) -> String {
        let mut line = chars(s);
        reorder_line(&mut line);
        line.into_iter().collect()
    }

    #[test]
    fn test_latin_class() {
        assert!(is_latin_class('a'));
        assert!(is_latin_class('Z'));
        assert!(is_latin_class('0'));
        assert!(is_latin_class('%'));
        assert!(is_latin_class('_'));
        assert!(!is_latin_class(' '));
        assert!(!is_latin_class('{'));
        assert!(!is_latin_class('é'));
        assert!(!is_latin_class('\u{06F1}'));
        assert!(!is_latin_class('\u{060C}'));
    }

    #[test]
    fn test_runs_absorb_inner_whitespace() {
        assert_eq!(latin_runs(&chars("ab  cd")), vec![LatinRun { start: 0, end: 6 }]);
        assert_eq!(latin_runs(&chars("ab\tcd")), vec![LatinRun { start: 0, end: 5 }]);
    }

    #[test]
    fn test_runs_exclude_edge_whitespace() {
        assert_eq!(latin_runs(&chars("  ab  ")), vec![LatinRun { start: 2, end: 4 }]);
    }

    #[test]
    fn test_runs_split_by_persian() {
        let runs = latin_runs(&chars("ab \u{FEB3} cd"));
        assert_eq!(runs, vec![LatinRun { start: 0, end: 2 }, LatinRun { start: 5, end: 7 }]);
        assert_eq!(runs[0].len(), 2);
    }

    #[test]
    fn test_no_runs() {
        assert!(latin_runs(&chars("\u{FEB3}\u{FEDE} \u{FE8D}")).is_empty());
        assert!(latin_runs(&[]).is_empty());
    }

    #[test]
    fn test_latin_only_line_is_identity() {
        assert_eq!(reordered("abc def"), "abc def");
        assert_eq!(reordered("file_v2.txt (copy)"), "file_v2.txt (copy)");
    }

    #[test]
    fn test_persian_only_line_is_reversed() {
        assert_eq!(reordered("\u{FE8D}\u{FEEF}"), "\u{FEEF}\u{FE8D}");
    }

    #[test]
    fn test_mixed_line() {
        // Logical: <seen-initial> <lam-final> space 1 2 3
        assert_eq!(reordered("\u{FEB3}\u{FEDE} 123"), "123 \u{FEDE}\u{FEB3}");
    }

    #[test]
    fn test_brackets_not_mirrored() {
        assert_eq!(reordered("\u{FEB3} (x)"), "(x) \u{FEB3}");
    }
}
