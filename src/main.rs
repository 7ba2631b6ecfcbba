use clap::Parser;
use stage_calculation::{
    StageCalculator, StageInputs, StageReport, DEFAULT_ENGINE_COUNT, DEFAULT_THRUST,
    REFERENCE_BODIES,
};

#[derive(Parser)]
#[command(author, version, about = "Calculate a rocket stage's delta-v for KSP")]
struct Args {
    /// Initial mass of the spacecraft (tonnes)
    mass_initial: f64,
    /// Final mass of the spacecraft (tonnes)
    mass_final: f64,
    /// Specific impulse (seconds)
    isp: f64,
    /// Thrust per engine in kilonewtons (0 for unknown)
    #[arg(long, default_value_t = DEFAULT_THRUST)]
    thrust: f64,
    /// Number of engines
    #[arg(long, default_value_t = DEFAULT_ENGINE_COUNT)]
    engine_count: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let inputs = StageInputs::new(
        args.mass_initial,
        args.mass_final,
        args.isp,
        args.thrust,
        args.engine_count,
    );

    log::info!(
        "computing stage {} t -> {} t at Isp {} s, total thrust {} kN",
        inputs.initial_mass,
        inputs.final_mass,
        inputs.specific_impulse,
        inputs.total_thrust()
    );

    let result = StageCalculator::compute(&inputs, &REFERENCE_BODIES)?;

    let report = StageReport::new(&inputs, &result);
    report.display();

    Ok(())
}
