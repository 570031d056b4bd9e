//! Persian Text - RTL fixing for LTR-only renderers
//!
//! This crate turns Persian/Arabic text written in logical Unicode order into
//! presentation-form glyphs laid out in visual order, for renderers that can
//! only draw left-to-right:
//! - Contextual letter shaping (isolated/final/initial/medial forms)
//! - Simplified visual reordering (line reversal with embedded Latin runs kept
//!   readable)
//! - Line-by-line orchestration over `\n`-separated text
//! - Character/word statistics for editor status bars
//!
//! # Example
//! ```
//! let fixed = persian_text::fix_for_runtime("او");
//! assert_eq!(fixed, "\u{FEEF}\u{FE8D}");
//! ```
//!
//! # Input contract
//! Input must be unshaped text in logical order. Feeding the output back in
//! does not reshape anything (presentation forms are not table keys) and only
//! flips the line again. Use [`ShapedInputPolicy`] to detect or skip such
//! input instead.

pub mod shaping;
pub mod fixer;
pub mod config;
pub mod stats;

pub use shaping::{
    ContextualShaper, JoiningClass, LatinRun, PositionalForm,
    ELONGATOR, is_latin_class, latin_runs, presentation_forms, reorder_line,
};
pub use fixer::{PersianFixer, fix_optional, fix_for_inspector, fix_for_runtime};
pub use config::{FixerConfig, ShapedInputPolicy};
pub use stats::TextStats;

/// Text fixing error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Input already shaped: found {found:?} at line {line}, column {column}")]
    AlreadyShaped {
        /// 1-based line number
        line: usize,
        /// 1-based column, counted in chars
        column: usize,
        /// The presentation-form codepoint that was found
        found: char,
    },
}

pub type Result<T> = std::result::Result<T, TextError>;
