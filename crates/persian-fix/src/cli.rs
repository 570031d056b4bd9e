//! Command-line interface for persian-fix.

use clap::Parser;
use persian_text::ShapedInputPolicy;
use std::path::PathBuf;

/// Shaped-input policy argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShapedInputArg {
    Allow,
    Reject,
    PassThrough,
}

impl From<ShapedInputArg> for ShapedInputPolicy {
    fn from(arg: ShapedInputArg) -> Self {
        match arg {
            ShapedInputArg::Allow => ShapedInputPolicy::Allow,
            ShapedInputArg::Reject => ShapedInputPolicy::Reject,
            ShapedInputArg::PassThrough => ShapedInputPolicy::PassThrough,
        }
    }
}

/// persian-fix - Shape and reorder Persian text for LTR-only renderers
#[derive(Debug, Parser)]
#[command(name = "persian-fix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input files (reads stdin when none are given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Load fixer settings from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How to treat input that already contains presentation forms
    #[arg(long, value_enum, value_name = "POLICY")]
    pub shaped_input: Option<ShapedInputArg>,

    /// Shorthand for `--shaped-input reject`
    #[arg(long, conflicts_with = "shaped_input")]
    pub strict: bool,

    /// Keep shaped text in logical order (skip visual reordering)
    #[arg(long)]
    pub no_reorder: bool,

    /// Print character and word counts of each input to stderr
    #[arg(long)]
    pub stats: bool,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

impl Cli {
    /// Shaped-input policy requested on the command line, if any
    pub fn shaped_input_policy(&self) -> Option<ShapedInputPolicy> {
        if self.strict {
            Some(ShapedInputPolicy::Reject)
        } else {
            self.shaped_input.map(Into::into)
        }
    }
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevelArg::Off => "off",
            LogLevelArg::Error => "error",
            LogLevelArg::Warn => "warn",
            LogLevelArg::Info => "info",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Trace => "trace",
        }
    }
}
