//! Persian Joining Analysis
//!
//! Joining classes and positional forms for the letters in the joining
//! table.

use super::table::{ELONGATOR, presentation_forms};

/// Joining class of a character (derived from the joining table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoiningClass {
    /// No table entry (spaces, digits, Latin, punctuation, ...)
    #[default]
    NonConnecting,
    /// Isolated and final forms only
    RightOnly,
    /// All four positional forms
    DualJoining,
    /// Tatweel: never shaped, but joins forward
    Elongator,
}

impl JoiningClass {
    /// Get the joining class for a character
    pub fn of(c: char) -> Self {
        if c == ELONGATOR {
            return JoiningClass::Elongator;
        }

        match presentation_forms(c).map(<[char]>::len) {
            Some(4) => JoiningClass::DualJoining,
            Some(_) => JoiningClass::RightOnly,
            None => JoiningClass::NonConnecting,
        }
    }
}

/// Whether `c` counts as a joining neighbour when it follows a letter
///
/// True for dual-joining letters and the elongator.
pub fn joins_forward(c: char) -> bool {
    matches!(
        JoiningClass::of(c),
        JoiningClass::DualJoining | JoiningClass::Elongator
    )
}

/// Whether `c` counts as a joining neighbour when it precedes a letter
///
/// True for any letter with a table entry. The elongator is not.
pub fn joins_backward(c: char) -> bool {
    matches!(
        JoiningClass::of(c),
        JoiningClass::RightOnly | JoiningClass::DualJoining
    )
}

/// Positional form of a shaped letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalForm {
    /// Isolated form (no connections)
    Isolated,
    /// Final form (connects to previous only)
    Final,
    /// Initial form (connects to next only)
    Initial,
    /// Medial form (connects both sides)
    Medial,
}

impl PositionalForm {
    /// Select a form from the joining state of both neighbours
    pub fn from_context(prev_joins: bool, next_joins: bool) -> Self {
        match (prev_joins, next_joins) {
            (false, false) => PositionalForm::Isolated,
            (true, false) => PositionalForm::Final,
            (false, true) => PositionalForm::Initial,
            (true, true) => PositionalForm::Medial,
        }
    }

    /// Index of this form within a table entry
    pub fn index(self) -> usize {
        match self {
            PositionalForm::Isolated => 0,
            PositionalForm::Final => 1,
            PositionalForm::Initial => 2,
            PositionalForm::Medial => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joining_class_alef() {
        assert_eq!(JoiningClass::of('\u{0627}'), JoiningClass::RightOnly);
    }

    #[test]
    fn test_joining_class_beh() {
        assert_eq!(JoiningClass::of('\u{0628}'), JoiningClass::DualJoining);
    }

    #[test]
    fn test_joining_class_space() {
        assert_eq!(JoiningClass::of(' '), JoiningClass::NonConnecting);
        assert_eq!(JoiningClass::of('7'), JoiningClass::NonConnecting);
    }

    #[test]
    fn test_joining_class_tatweel() {
        assert_eq!(JoiningClass::of(ELONGATOR), JoiningClass::Elongator);
    }

    #[test]
    fn test_elongator_joins_forward_only() {
        assert!(joins_forward(ELONGATOR));
        assert!(!joins_backward(ELONGATOR));
    }

    #[test]
    fn test_right_only_joins_backward_only() {
        assert!(joins_backward('\u{0648}'));
        assert!(!joins_forward('\u{0648}'));
    }

    #[test]
    fn test_dual_joins_both() {
        assert!(joins_forward('\u{0633}'));
        assert!(joins_backward('\u{0633}'));
    }

    #[test]
    fn test_unmapped_joins_neither() {
        for c in [' ', 'x', '\n', '\u{200C}', '\u{FEDD}'] {
            assert!(!joins_forward(c), "{c:?}");
            assert!(!joins_backward(c), "{c:?}");
        }
    }

    #[test]
    fn test_form_selection() {
        assert_eq!(PositionalForm::from_context(false, false), PositionalForm::Isolated);
        assert_eq!(PositionalForm::from_context(true, false), PositionalForm::Final);
        assert_eq!(PositionalForm::from_context(false, true), PositionalForm::Initial);
        assert_eq!(PositionalForm::from_context(true, true).index(), 3);
    }
}
