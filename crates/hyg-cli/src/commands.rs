//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use hyg_ingest::{SampleSource, SignalSource, source_for_path};
use hyg_model::{SortDirection, SortKey};
use hyg_report::{TableState, render_signals, write_json};
use hyg_transform::{sort_signals, transform_batch};

use crate::cli::{CheckArgs, ExportArgs, RenderArgs};
use crate::summary::print_failures;

pub fn run_render(args: &RenderArgs) -> Result<()> {
    let source = resolve_source(args.input.as_deref())?;
    info!(source = %source.describe(), "loading signals");
    let raws = source.load()?;

    let outcome = transform_batch(&raws);
    let key = SortKey::from_param(&args.sort_by);
    let direction = SortDirection::from_param(&args.direction);
    info!(
        records = raws.len(),
        dropped = outcome.dropped(),
        sort_by = %key,
        direction = %direction,
        "rendering signal table"
    );

    let ordered = sort_signals(&outcome.signals, key, direction);
    println!("{}", render_signals(&ordered, TableState::Ready));
    if outcome.dropped() > 0 {
        eprintln!(
            "{} record(s) failed validation and were dropped",
            outcome.dropped()
        );
    }
    Ok(())
}

/// Returns true when every record validated.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let source = source_for_path(&args.input)?;
    let raws = source.load()?;
    let outcome = transform_batch(&raws);
    println!(
        "{} of {} record(s) valid",
        outcome.signals.len(),
        raws.len()
    );
    if outcome.failures.is_empty() {
        return Ok(true);
    }
    print_failures(&outcome.failures);
    Ok(false)
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let source = source_for_path(&args.input)?;
    let raws = source.load()?;
    let outcome = transform_batch(&raws);

    // The hand-off file is always priority-ordered, like the engine's own
    // converter output.
    let ordered = sort_signals(
        &outcome.signals,
        SortKey::Priority,
        SortDirection::Ascending,
    );
    write_json(&ordered, &args.output)?;
    println!(
        "wrote {} record(s) to {}",
        ordered.len(),
        args.output.display()
    );
    if outcome.dropped() > 0 {
        eprintln!(
            "{} record(s) failed validation and were dropped",
            outcome.dropped()
        );
    }
    Ok(())
}

fn resolve_source(input: Option<&Path>) -> Result<Box<dyn SignalSource>> {
    match input {
        Some(path) => source_for_path(path),
        None => Ok(Box::new(SampleSource)),
    }
}
