//! Line orchestration
//!
//! Splits text on `\n`, shapes and reorders every line on its own, and joins
//! the lines back with `\n`. Joining context never crosses a line break and
//! blank lines survive as blank lines.

use crate::config::{FixerConfig, ShapedInputPolicy};
use crate::shaping::{ContextualShaper, is_presentation_form, reorder_line};
use crate::{Result, TextError};

/// Reusable Persian text fixer
///
/// Holds scratch buffers between calls. Use one fixer per thread, or the
/// free functions for one-off calls.
#[derive(Debug, Default)]
pub struct PersianFixer {
    config: FixerConfig,
    shaper: ContextualShaper,
    /// Current line, shaped then reordered in place
    line: Vec<char>,
}

impl PersianFixer {
    /// Create a fixer with the default configuration
    pub fn new() -> Self {
        Self::with_config(FixerConfig::default())
    }

    /// Create a fixer with a custom configuration
    pub fn with_config(config: FixerConfig) -> Self {
        Self {
            config,
            shaper: ContextualShaper::new(),
            line: Vec::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    /// Fix text, applying the configured [`ShapedInputPolicy`]
    ///
    /// Only fails with [`ShapedInputPolicy::Reject`].
    pub fn fix(&mut self, text: &str) -> Result<String> {
        if self.config.shaped_input != ShapedInputPolicy::Allow {
            if let Some((line, column, found)) = find_presentation_form(text) {
                tracing::warn!(line, column, "Input already contains presentation form {:?}", found);

                if self.config.shaped_input == ShapedInputPolicy::Reject {
                    return Err(TextError::AlreadyShaped { line, column, found });
                }
                return Ok(text.to_owned());
            }
        }

        Ok(self.transform(text))
    }

    /// Shape and reorder text without any shaped-input check
    pub fn transform(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.transform_into(text, &mut out);
        out
    }

    /// Shape and reorder text, appending the result to `out`
    pub fn transform_into(&mut self, text: &str, out: &mut String) {
        if text.is_empty() {
            return;
        }

        let mut lines = 0usize;
        for line in text.split('\n') {
            if lines > 0 {
                out.push('\n');
            }

            self.line.clear();
            self.shaper.shape_into(line, &mut self.line);
            if self.config.visual_order {
                reorder_line(&mut self.line);
            }
            out.extend(self.line.iter());

            lines += 1;
        }

        tracing::debug!("Fixed {} lines ({} bytes)", lines, text.len());
    }
}

/// Locate the first presentation-form char as (line, column, char), 1-based
fn find_presentation_form(text: &str) -> Option<(usize, usize, char)> {
    text.split('\n').enumerate().find_map(|(line_idx, line)| {
        line.chars()
            .enumerate()
            .find(|&(_, c)| is_presentation_form(c))
            .map(|(col_idx, c)| (line_idx + 1, col_idx + 1, c))
    })
}

fn fix_text(text: &str) -> String {
    PersianFixer::new().transform(text)
}

/// Fix text for in-game UI and text components
///
/// Input must be unshaped, logical-order text.
pub fn fix_for_runtime(text: &str) -> String {
    fix_text(text)
}

/// Fix text for editor preview rendering
///
/// Same behavior as [`fix_for_runtime`].
pub fn fix_for_inspector(text: &str) -> String {
    fix_text(text)
}

/// Fix text that may be absent; `None` yields an empty string
pub fn fix_optional(text: Option<&str>) -> String {
    text.map(fix_text).unwrap_or_default()
}
