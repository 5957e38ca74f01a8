use std::time::Instant;

use crate::error::Result;
use crate::simulation::params::WorldParams;
use crate::simulation::states::{Body, Color, NVec3};
use crate::simulation::world::Simulator;

/// Helper to build a simulator holding `n` small bodies spread through the box
fn make_simulator(n: usize) -> Result<Simulator> {
    let mut sim = Simulator::with_params(WorldParams::default())?;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 4.0,
            (i_f * 0.13).cos() * 4.0,
            (i_f * 0.07).sin() * 4.0,
        );
        sim.add_body(Body::new(0.01, 1.0, Color::default(), Some(x))?)?;
    }

    Ok(sim)
}

/// Time `Simulator::update` for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_update() -> Result<()> {
    println!("N,update_ms");

    for n in [50, 100, 200, 400, 800, 1600] {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 20 } else { 3 };
        let mut sim = make_simulator(n)?;

        // Warm-up
        sim.update(0.001)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.update(0.001)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
