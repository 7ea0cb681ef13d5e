use anyhow::Result;
use conduct1d::{
    EdgeCondition, MaterialProperties, SegmentConfig, SimulationConfig, TimeSpan,
};

/// Transient cooling of a steel bar.
///
/// A 1 m bar starts uniformly at 303.15 K; the left end is then held at
/// 293.15 K while the right end is insulated. The temperature front
/// diffuses in from the left over 150 s of simulated time.
fn main() -> Result<()> {
    let config = SimulationConfig {
        first: SegmentConfig {
            length: 1.0,
            material: MaterialProperties::steel(),
        },
        second: None,
        dx: 0.01,
        dt: 0.5,
        duration: TimeSpan::Seconds(150.0),
        initial_temperature: 303.15,
        left: EdgeCondition::FixedTemperature(293.15),
        right: EdgeCondition::ZeroGradient,
        coupling: None,
    };

    let solver = config.build()?;
    let steps = solver.step_count();

    println!("Steel Bar Transient Conduction");
    println!("{:=<60}", "");
    println!(
        "  Length: {} m, dx: {} m, dt: {} s",
        config.first.length, config.dx, config.dt
    );
    println!(
        "  Diffusivity: {:.3e} m^2/s, steps: {steps}",
        config.first.material.diffusivity()
    );
    println!();

    // Progress every 5% of the run.
    let report_every = (steps / 20).max(1);
    let summary = solver.run(report_every, |report| {
        println!(
            "  step {:>4} ({:>5.1} s): left neighbor {:.3} K, right end {:.3} K",
            report.step,
            report.time_s,
            report.first[1],
            report.first[report.first.len() - 1],
        );
    });

    println!();
    println!("Final profile (every 10th point):");
    for (i, t) in summary.first.iter().enumerate().step_by(10) {
        println!("  x = {:.2} m: {:.4} K", i as f64 * config.dx, t);
    }
    println!();
    println!(
        "Total execution time for {} time steps: {:.3} s",
        summary.steps_executed,
        summary.elapsed.as_secs_f64()
    );

    Ok(())
}
