use oxisize_core::pretty_size;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    /// Module path with the source dir removed
    pub name: String,
    /// Bytes covered by the module-table entry
    pub source_length: u64,
}

impl ModuleRecord {
    pub fn pretty_size(&self) -> String {
        pretty_size(self.source_length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub module_count: usize,
    pub total_length: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Discovery order
    #[default]
    None,
    BySizeDesc,
    ByNameDesc,
}

/// The matching rule that actually produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Strict,
    Loose,
}

#[derive(Debug, Clone)]
pub struct ModuleReport {
    pub records: Vec<ModuleRecord>,
    pub totals: Totals,
    pub strategy: MatchStrategy,
    pub bundle_length: usize,
}
