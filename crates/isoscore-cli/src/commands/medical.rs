use crate::cli::MedicalArgs;
use crate::error::Result;
use isoscore::engine::progress::ProgressReporter;
use isoscore::workflows::evaluator::IsotopeEvaluator;
use std::io::Write;
use tracing::{info, warn};

pub fn run(
    args: MedicalArgs,
    evaluator: &IsotopeEvaluator,
    reporter: &ProgressReporter,
    out: &mut impl Write,
) -> Result<()> {
    let window = evaluator.config().medical_window;
    info!(
        z_max = args.z_max,
        lower = window.lower(),
        upper = window.upper(),
        "Scanning for medical candidates."
    );
    let scan = evaluator.medical_scan(args.z_max, reporter)?;

    if !scan.skipped.is_empty() {
        warn!("{} (Z, N) pairs could not be evaluated.", scan.skipped.len());
    }

    writeln!(
        out,
        "{} candidates with stability in [{:.2}, {:.2}] (Z <= {})",
        scan.candidates.len(),
        window.lower(),
        window.upper(),
        args.z_max
    )?;
    writeln!(
        out,
        "{:<10} {:>8} {:>10} {:>14} {:>14}  {}",
        "nuclide", "score", "decay", "binding (MeV)", "half-life (h)", "medical use"
    )?;
    for candidate in scan.candidates.iter().take(args.limit) {
        writeln!(
            out,
            "{:<10} {:>8.4} {:>10} {:>14.2} {:>14.1}  {}",
            candidate.label,
            candidate.score,
            candidate.decay_mode.to_string(),
            candidate.binding_energy_mev,
            candidate.half_life_hours,
            candidate.medical_use.unwrap_or("-")
        )?;
    }
    if scan.candidates.len() > args.limit {
        writeln!(out, "... {} more", scan.candidates.len() - args.limit)?;
    }

    let recovered: Vec<_> = scan.recovered().iter().map(|r| r.symbol).collect();
    let missed: Vec<_> = scan.missed().iter().map(|r| r.symbol).collect();
    writeln!(out)?;
    writeln!(out, "Catalog recovered: {}", join_or_none(&recovered))?;
    writeln!(out, "Catalog missed:    {}", join_or_none(&missed))?;
    Ok(())
}

fn join_or_none(symbols: &[&str]) -> String {
    if symbols.is_empty() {
        "none".to_string()
    } else {
        symbols.join(", ")
    }
}
