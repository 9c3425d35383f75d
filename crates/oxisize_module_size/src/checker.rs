use anyhow::{Context, Result};
use log::{debug, info};
use oxisize_core::{SourceType, parse_bundle, source_type_for};
use std::fs;

use crate::{
    aggregate::sort_records,
    config::{Config, MatchMode},
    error::SizeError,
    matcher::match_modules,
    record::build_record,
    types::{ModuleRecord, ModuleReport, SortMode, Totals},
};

/// Options for analyzing a bundle that is already in memory.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions<'c> {
    pub source_dir: &'c str,
    pub mode: MatchMode,
    pub sort: SortMode,
    pub source_type: SourceType,
}

pub fn run_module_size_check(cfg: &Config) -> Result<ModuleReport> {
    info!("Starting module size check");
    cfg.validate()?;

    let path = &cfg.source_file;
    debug!("Reading bundle: {}", path.display());
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let options = AnalyzeOptions {
        source_dir: &cfg.source_dir,
        mode: cfg.mode,
        sort: cfg.sort_mode(),
        source_type: source_type_for(path, cfg.module),
    };
    let report = analyze_bundle(&source, &options)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    info!(
        "Module size check complete. Found {} modules ({} bytes)",
        report.totals.module_count, report.totals.total_length
    );
    Ok(report)
}

/// Parses `source`, extracts module-table entries and returns them sorted with totals.
pub fn analyze_bundle(
    source: &str,
    options: &AnalyzeOptions<'_>,
) -> std::result::Result<ModuleReport, SizeError> {
    if options.source_dir.is_empty() {
        return Err(SizeError::MissingSourceDir);
    }

    let tree = parse_bundle(source, options.source_type)?;
    let (entries, strategy) = match_modules(&tree, options.source_dir, options.mode);

    let mut records: Vec<ModuleRecord> =
        entries.iter().map(|e| build_record(&tree, e, options.source_dir)).collect();
    sort_records(&mut records, options.sort);
    let totals = Totals::from_records(&records);

    Ok(ModuleReport { records, totals, strategy, bundle_length: source.len() })
}
