use crate::cli::NuclideArgs;
use crate::error::Result;
use isoscore::engine::binding::BindingRegime;
use isoscore::workflows::evaluator::IsotopeEvaluator;
use std::io::Write;
use tracing::info;

pub fn run(args: NuclideArgs, evaluator: &IsotopeEvaluator, out: &mut impl Write) -> Result<()> {
    info!(z = args.z, n = args.n, "Computing binding energy.");
    let energy = evaluator.binding_energy_breakdown(args.z, args.n)?;

    writeln!(out, "Nuclide:            {}", energy.nuclide.label())?;
    writeln!(out, "Regime:             {}", regime_name(energy.regime))?;
    if let Some(terms) = energy.terms {
        writeln!(out, "SEMF terms (MeV):")?;
        writeln!(out, "  volume            {:>12.4}", terms.volume)?;
        writeln!(out, "  surface           {:>12.4}", terms.surface)?;
        writeln!(out, "  coulomb           {:>12.4}", terms.coulomb)?;
        writeln!(out, "  asymmetry         {:>12.4}", terms.asymmetry)?;
        writeln!(out, "  pairing           {:>12.4}", terms.pairing)?;
        writeln!(out, "  base total        {:>12.4}", terms.total())?;
    }
    writeln!(out, "Binding energy:     {:.4} MeV", energy.value_mev)?;
    writeln!(out, "Per nucleon:        {:.4} MeV", energy.per_nucleon())?;
    Ok(())
}

fn regime_name(regime: BindingRegime) -> &'static str {
    match regime {
        BindingRegime::Anchored => "anchored (measured value)",
        BindingRegime::Light => "light (A <= 20)",
        BindingRegime::Heavy => "heavy (A > 20)",
    }
}
