use log::debug;

use crate::types::{ModuleRecord, SortMode, Totals};

/// Orders records in place. Both orderings are stable, so ties keep discovery order.
pub fn sort_records(records: &mut [ModuleRecord], mode: SortMode) {
    debug!("Sorting {} records with {:?}", records.len(), mode);
    match mode {
        SortMode::None => {}
        SortMode::BySizeDesc => records.sort_by(|a, b| b.source_length.cmp(&a.source_length)),
        SortMode::ByNameDesc => records.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}

impl Totals {
    pub fn from_records(records: &[ModuleRecord]) -> Self {
        records.iter().fold(Totals::default(), |acc, r| Totals {
            module_count: acc.module_count + 1,
            total_length: acc.total_length + r.source_length,
        })
    }
}
