use crate::cli::ValidateArgs;
use crate::error::Result;
use isoscore::core::catalog::reference::load_stability_references;
use isoscore::workflows::evaluator::IsotopeEvaluator;
use std::io::Write;
use tracing::info;

pub fn run(args: ValidateArgs, evaluator: &IsotopeEvaluator, out: &mut impl Write) -> Result<()> {
    let binding = evaluator.validate_binding_energies();
    writeln!(out, "Binding energy")?;
    writeln!(
        out,
        "{:<10} {:>14} {:>14} {:>9}",
        "nuclide", "calc (MeV)", "accepted", "error %"
    )?;
    for check in &binding.checks {
        writeln!(
            out,
            "{:<10} {:>14.3} {:>14.3} {:>9.2}",
            check.nuclide.label(),
            check.calculated_mev,
            check.accepted_mev,
            check.error_percent()
        )?;
    }
    if let Some(average) = binding.average_error_percent() {
        writeln!(out, "Average error: {:.2}%", average)?;
    }

    let references = match &args.references {
        Some(path) => {
            info!("Loading stability references from '{}'.", path.display());
            Some(load_stability_references(path)?)
        }
        None => None,
    };
    let stability = evaluator.validate_stability(references.as_deref());

    writeln!(out)?;
    writeln!(
        out,
        "Stability ({} of {} correct)",
        stability.correct(),
        stability.checks.len()
    )?;
    for (label, accuracy) in [
        ("overall", stability.overall_accuracy()),
        ("stable", stability.stable_accuracy()),
        ("unstable", stability.unstable_accuracy()),
    ] {
        match accuracy {
            Some(value) => writeln!(out, "  {:<10} {:>6.1}%", label, value * 100.0)?,
            None => writeln!(out, "  {:<10} {:>7}", label, "n/a")?,
        }
    }
    Ok(())
}
