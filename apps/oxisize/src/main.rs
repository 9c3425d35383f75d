use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use oxisize_module_size::Config;
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "oxisize")]
#[command(about = "Measure what each source module costs inside a JavaScript bundle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report the bytes each source module contributes to a browserify bundle
    ModuleSize(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::ModuleSize(cfg) => {
            info!("Running module size check with mode: {:?}", cfg.mode);
            oxisize_module_size::print_arguments(&mut stdout, &cfg.source_dir, &cfg.source_file)?;

            let report = oxisize_module_size::run_module_size_check(&cfg)?;
            debug!("Matched {} modules using {:?} matching", report.records.len(), report.strategy);

            oxisize_module_size::print_source_length(&mut stdout, report.bundle_length)?;
            oxisize_module_size::print_report(&mut stdout, &report)?;

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} modules.",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                report.totals.module_count.to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
