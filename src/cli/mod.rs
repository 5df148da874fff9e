// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Uses clap to parse the
// command line; all real work is delegated to Layer 2.
//
//   dataset-loader iris.csv --batch_size 16
//   → Loaded 150 samples from iris.csv
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::LoadArgs;

use crate::application::load_use_case::{LoadReport, LoadUseCase};

/// The main CLI struct
#[derive(Parser, Debug)]
#[command(
    name = "dataset-loader",
    version,
    about = "Fetch a dataset, preprocess it, and report how it batches."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: LoadArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = self.args.to_config()?;
        tracing::info!("Loading dataset '{}'", config.dataset_name());

        let report = LoadUseCase::new(config)
            .with_preview(self.args.preview)
            .execute()?;

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }
        Ok(())
    }
}

fn print_report(report: &LoadReport) {
    println!("Loaded {} samples from {}", report.sample_count, report.dataset_name);
    println!(
        "{} batches of up to {} samples",
        report.batch_count, report.batch_size
    );
    if let Some(batch) = &report.first_batch {
        println!("First batch ({}): {}", batch.size, batch.labels.join(", "));
    }
}
