use crate::cli::NuclideArgs;
use crate::error::Result;
use isoscore::workflows::evaluator::IsotopeEvaluator;
use std::io::Write;
use tracing::info;

pub fn run(args: NuclideArgs, evaluator: &IsotopeEvaluator, out: &mut impl Write) -> Result<()> {
    info!(z = args.z, n = args.n, "Scoring stability.");
    let assessment = evaluator.stability_assessment(args.z, args.n)?;
    let verdict = if assessment.is_stable() {
        "stable"
    } else {
        "unstable"
    };

    writeln!(out, "Nuclide:        {}", assessment.nuclide.label())?;
    writeln!(out, "Score:          {:.4}", assessment.score)?;
    writeln!(
        out,
        "Threshold:      {:.4}",
        evaluator.config().stability_threshold.value()
    )?;
    writeln!(out, "Verdict:        {}", verdict)?;
    writeln!(out, "Decay mode:     {}", assessment.decay_mode)?;
    Ok(())
}
