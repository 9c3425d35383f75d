use clap::{Parser, ValueEnum};
use log::debug;
use std::path::PathBuf;

use crate::{error::SizeError, types::SortMode};

/// How literals are confirmed as module-table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchMode {
    /// Strict shape check, falling back to loose when it confirms nothing
    #[default]
    Auto,
    /// Require `"path": [function(a, b, c) {...}, ...]`
    Strict,
    /// Any literal containing the source dir, measured by its parent node
    Loose,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "module-size")]
#[command(about = "Report how many bytes each source module contributes to a bundle")]
pub struct Config {
    /// The source code directory, as it appears in the bundle's module paths
    #[arg(long)]
    pub source_dir: String,

    /// The path to the JS bundle produced by browserify
    #[arg(long)]
    pub source_file: PathBuf,

    /// Sort output by size
    #[arg(long)]
    pub sort_by_size: bool,

    /// Sort output by module name
    #[arg(long)]
    pub sort_by_name: bool,

    /// How module-table entries are recognized
    #[arg(long, value_enum, default_value_t = MatchMode::Auto)]
    pub mode: MatchMode,

    /// Parse the bundle as an ES module instead of a script
    #[arg(long)]
    pub module: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), SizeError> {
        if self.source_dir.is_empty() {
            return Err(SizeError::MissingSourceDir);
        }
        Ok(())
    }

    /// Size ordering wins when both sort flags are set.
    pub fn sort_mode(&self) -> SortMode {
        let mode = if self.sort_by_size {
            SortMode::BySizeDesc
        } else if self.sort_by_name {
            SortMode::ByNameDesc
        } else {
            SortMode::None
        };
        debug!("Resolved sort mode: {:?}", mode);
        mode
    }
}
