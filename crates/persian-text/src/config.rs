//! Fixer Configuration

use serde::{Deserialize, Serialize};

/// What to do with input that already contains presentation forms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapedInputPolicy {
    /// Transform anyway (letters are not reshaped, lines flip again)
    #[default]
    Allow,
    /// Fail with [`crate::TextError::AlreadyShaped`]
    Reject,
    /// Return the input unchanged
    PassThrough,
}

/// Fixer configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixerConfig {
    /// Policy for already-shaped input
    pub shaped_input: ShapedInputPolicy,

    /// Reorder lines into visual order. When false, lines are shaped but
    /// left in logical order (for renderers that handle RTL themselves).
    pub visual_order: bool,
}

impl FixerConfig {
    /// Set shaped-input policy
    pub fn shaped_input(mut self, policy: ShapedInputPolicy) -> Self {
        self.shaped_input = policy;
        self
    }

    /// Enable or disable visual reordering
    pub fn visual_order(mut self, enabled: bool) -> Self {
        self.visual_order = enabled;
        self
    }
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            shaped_input: ShapedInputPolicy::Allow,
            visual_order: true,
        }
    }
}
