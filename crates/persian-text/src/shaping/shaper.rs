//! Contextual shaper
//!
//! Replaces each letter of a logical line with the presentation form picked
//! by its neighbours. Characters without a table entry pass through.

use super::joining::{PositionalForm, joins_backward, joins_forward};
use super::table::presentation_forms;

/// Contextual shaper with a reusable scratch buffer
///
/// Shaping needs `&mut self`, so one shaper serves one call at a time.
#[derive(Debug, Default)]
pub struct ContextualShaper {
    /// Decoded chars of the line being shaped
    chars: Vec<char>,
}

impl ContextualShaper {
    /// Create new shaper
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Shape one logical line into a fresh buffer
    pub fn shape(&mut self, line: &str) -> Vec<char> {
        let mut out = Vec::with_capacity(line.len());
        self.shape_into(line, &mut out);
        out
    }

    /// Shape one logical line, appending presentation forms to `out`
    ///
    /// The line must not contain `\n`; joining context ends at both edges.
    pub fn shape_into(&mut self, line: &str, out: &mut Vec<char>) {
        self.chars.clear();
        self.chars.extend(line.chars());
        out.reserve(self.chars.len());

        for (i, &c) in self.chars.iter().enumerate() {
            let Some(forms) = presentation_forms(c) else {
                out.push(c);
                continue;
            };

            let prev_joins = i
                .checked_sub(1)
                .is_some_and(|p| joins_backward(self.chars[p]));
            let next_joins = self
                .chars
                .get(i + 1)
                .is_some_and(|&n| joins_forward(n));

            // Right-joining letters have no initial/medial: fall back to isolated
            let form = PositionalForm::from_context(prev_joins, next_joins);
            let glyph = forms.get(form.index()).unwrap_or(&forms[0]);
            out.push(*glyph);
        }
    }
}

/// Shape a single logical line
pub fn shape_line(line: &str) -> Vec<char> {
    ContextualShaper::new().shape(line)
}
