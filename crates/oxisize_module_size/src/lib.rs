//! Per-module size attribution for browserify-style JavaScript bundles.
//!
//! A bundle stores every source module as an entry of a module table:
//! `"/abs/path/src/a.js": [function(require, module, exports) {...}, {deps}]`.
//! This crate finds those entries by their syntactic shape, measures how many
//! bytes each one occupies and renders an aligned report with totals.
//!
//! # Examples
//!
//! ```no_run
//! use oxisize_module_size::{Config, MatchMode, print_report, run_module_size_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     source_dir: "/home/me/app/src/".to_string(),
//!     source_file: std::path::PathBuf::from("dist/bundle.js"),
//!     sort_by_size: true,
//!     sort_by_name: false,
//!     mode: MatchMode::Auto,
//!     module: false,
//! };
//!
//! let report = run_module_size_check(&cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! print_report(&mut stdout, &report)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod checker;
mod config;
mod error;
mod matcher;
mod record;
mod reporter;
mod types;

// Re-export public API
pub use aggregate::sort_records;
pub use checker::{AnalyzeOptions, analyze_bundle, run_module_size_check};
pub use config::{Config, MatchMode};
pub use error::SizeError;
pub use reporter::{print_arguments, print_report, print_source_length, render_report};
pub use types::{MatchStrategy, ModuleRecord, ModuleReport, SortMode, Totals};
