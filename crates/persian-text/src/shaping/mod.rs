//! Text shaping module

mod table;
mod joining;
mod shaper;
mod reorder;

pub use table::{ALPHABET, ELONGATOR, is_presentation_form, presentation_forms};
pub use joining::{JoiningClass, PositionalForm, joins_backward, joins_forward};
pub use shaper::{ContextualShaper, shape_line};
pub use reorder::{LatinRun, is_latin_class, latin_runs, reorder_line};
