use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, warn};

use atc_cli::pipeline::run_batch;
use atc_ingest::expand_inputs;
use atc_model::{Schema, ValidationOptions};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;
use crate::types::BatchResult;

pub fn run_schemas() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Schema", "Suffix", "Fields", "Header"]);
    apply_table_style(&mut table);
    for schema in Schema::ALL {
        table.add_row(vec![
            schema.as_str().to_string(),
            schema.suffix().to_string(),
            schema.expected_field_count().to_string(),
            schema.header().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn options_from_args(args: &CheckArgs) -> ValidationOptions {
    ValidationOptions::new()
        .with_detail(args.detail)
        .with_remove_inconsistencies(args.remove_inconsistent)
        .with_reports_dir(args.output_dir.clone())
        .with_dry_run(args.dry_run)
}

pub fn run_check(args: &CheckArgs) -> Result<BatchResult> {
    let options = options_from_args(args);
    let files = expand_inputs(&args.paths).context("expand input paths")?;
    if files.is_empty() {
        warn!("no export files found");
    }

    let start = Instant::now();
    let checked = run_batch(&files, &options);
    info!(
        files = checked.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "check finished"
    );

    if options.dry_run {
        for file in &checked {
            if let Some(text) = &file.rendered {
                print!("{text}");
                println!();
            }
        }
    }

    Ok(BatchResult::new(
        checked.into_iter().map(|file| file.outcome).collect(),
    ))
}
