use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use log::debug;
use oxisize_core::pretty_size;

use crate::types::{ModuleRecord, ModuleReport, Totals};

/// Column widths for the module table, computed once from the final record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    name: usize,
    length: usize,
}

impl ColumnWidths {
    fn compute(records: &[ModuleRecord], totals: &Totals) -> Self {
        let name = records
            .iter()
            .map(|r| r.name.chars().count())
            .chain(std::iter::once(totals_label(totals).chars().count()))
            .max()
            .unwrap_or(0);
        // The total usually has more digits than any single module
        let length = records
            .iter()
            .map(|r| r.source_length)
            .chain(std::iter::once(totals.total_length))
            .map(|n| n.to_string().len())
            .max()
            .unwrap_or(0);
        Self { name, length }
    }
}

fn totals_label(totals: &Totals) -> String {
    format!("Modules: {}", totals.module_count)
}

fn row(label: &str, length: u64, widths: ColumnWidths) -> String {
    format!(
        "{:<name_width$} | Length: {:<length_width$} | Size: {}",
        label,
        length,
        pretty_size(length),
        name_width = widths.name,
        length_width = widths.length,
    )
}

/// Renders one line per module followed by the totals line.
pub fn render_report(records: &[ModuleRecord], totals: &Totals) -> Vec<String> {
    let widths = ColumnWidths::compute(records, totals);
    debug!("Rendering {} rows with widths {:?}", records.len(), widths);

    records
        .iter()
        .map(|r| row(&r.name, r.source_length, widths))
        .chain(std::iter::once(row(
            &totals_label(totals),
            totals.total_length,
            widths,
        )))
        .collect()
}

pub fn print_report<W: Write>(writer: &mut W, report: &ModuleReport) -> io::Result<()> {
    for line in render_report(&report.records, &report.totals) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Echoes the resolved arguments before anything is read.
pub fn print_arguments<W: Write>(
    writer: &mut W,
    source_dir: &str,
    source_file: &Path,
) -> io::Result<()> {
    writeln!(writer, "{} {}", "source-dir:".dimmed(), source_dir)?;
    writeln!(writer, "{} {}", "source-file:".dimmed(), source_file.display())?;
    writer.flush()?;
    Ok(())
}

pub fn print_source_length<W: Write>(writer: &mut W, bundle_length: usize) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}  (size) {}",
        "Source code length:".dimmed(),
        bundle_length,
        pretty_size(bundle_length as u64).cyan()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchStrategy;

    fn record(name: &str, source_length: u64) -> ModuleRecord {
        ModuleRecord { name: name.to_string(), source_length }
    }

    #[test]
    fn test_rows_are_aligned() {
        let records = vec![record("a.js", 100), record("lib/util.js", 5)];
        let totals = Totals::from_records(&records);
        let lines = render_report(&records, &totals);
        assert_eq!(
            lines,
            vec![
                "a.js        | Length: 100 | Size: 100 B",
                "lib/util.js | Length: 5   | Size: 5 B",
                "Modules: 2  | Length: 105 | Size: 105 B",
            ]
        );
    }

    #[test]
    fn test_total_wider_than_any_module() {
        let records = vec![record("a.js", 600), record("b.js", 500)];
        let totals = Totals::from_records(&records);
        let lines = render_report(&records, &totals);
        assert_eq!(lines[0], "a.js       | Length: 600  | Size: 600 B");
        assert_eq!(lines[1], "b.js       | Length: 500  | Size: 500 B");
        assert_eq!(lines[2], "Modules: 2 | Length: 1100 | Size: 1.1 kB");
    }

    #[test]
    fn test_separators_line_up_with_totals_row() {
        let records = vec![record("a.js", 7), record("b.js", 12345)];
        let totals = Totals::from_records(&records);
        let lines = render_report(&records, &totals);
        let columns: Vec<Vec<usize>> =
            lines.iter().map(|l| l.match_indices(" | ").map(|(i, _)| i).collect()).collect();
        assert!(columns.iter().all(|c| *c == columns[0]), "{lines:#?}");
    }

    #[test]
    fn test_empty_report_has_totals_row() {
        let lines = render_report(&[], &Totals::default());
        assert_eq!(lines, vec!["Modules: 0 | Length: 0 | Size: 0 B"]);
    }

    #[test]
    fn test_print_report_writes_every_line() {
        let records = vec![record("a.js", 42)];
        let report = ModuleReport {
            totals: Totals::from_records(&records),
            records,
            strategy: MatchStrategy::Strict,
            bundle_length: 120,
        };
        let mut out = Vec::new();
        print_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "a.js       | Length: 42 | Size: 42 B\nModules: 1 | Length: 42 | Size: 42 B\n"
        );
    }

    #[test]
    fn test_print_arguments() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_arguments(&mut out, "/src/", Path::new("dist/bundle.js")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "source-dir: /src/\nsource-file: dist/bundle.js\n");
    }
}
