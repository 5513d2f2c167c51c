//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use salestats::error::EngineError;

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

/// Default and allowed range for ranked-table length, matching the
/// dashboard's seller-count widget.
const TOP_DEFAULT: usize = 5;
const TOP_MIN: usize = 2;
const TOP_MAX: usize = 10;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "salestats")]
#[command(about = "Fast sales transaction statistics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Path to the exported transaction records (JSON array)
    #[arg(short, long, global = true)]
    pub(crate) input: Option<PathBuf>,

    /// Keep only purchases from this year
    #[arg(short, long, global = true)]
    pub(crate) year: Option<i32>,

    /// Keep only these sellers (repeatable)
    #[arg(short = 'S', long = "seller", global = true, value_name = "NAME")]
    pub(crate) sellers: Vec<String>,

    /// Number of entries in ranked tables
    #[arg(short = 'n', long, global = true, value_name = "N")]
    pub(crate) top: Option<usize>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }
        if self.input.is_none() {
            self.input = config.input.clone();
        }
        if self.top.is_none() {
            self.top = config.top;
        }
        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Ranked-table length, clamped to the widget range.
    pub(crate) fn top_n(&self) -> Result<usize, EngineError> {
        let n = self.top.unwrap_or(TOP_DEFAULT);
        if (TOP_MIN..=TOP_MAX).contains(&n) {
            Ok(n)
        } else {
            Err(EngineError::InvalidRank {
                n: n as i64,
                min: TOP_MIN,
                max: TOP_MAX,
            })
        }
    }
}
