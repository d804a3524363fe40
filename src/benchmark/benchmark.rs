use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::forces::ForceModel;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3, Rgb, System};

/// Helper to build a deterministic System of size `n`.
/// Bodies are spread over a 800x600 screen, every 7th one emits light.
fn make_system(n: usize) -> System {
    let mut sys = System::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            400.0 + (i_f * 0.37).sin() * 350.0,
            300.0 + (i_f * 0.13).cos() * 250.0,
            (i_f * 0.07).sin() * 100.0,
        );
        let emits = i % 7 == 0;
        let color = if emits { Rgb::WHITE } else { Rgb::GRAY };

        if let Ok(body) = Body::new(x, NVec3::zeros(), 1.0, 2.0, emits, color) {
            sys.insert(body);
        }
    }

    sys
}

/// Time the O(n^2) gravity + contact pass
pub fn bench_forces() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let forces = ForceModel::new(&Parameters::default());

    for n in ns {
        let mut sys = make_system(n);

        // Warm up
        forces.accumulate(&mut sys);

        let t0 = Instant::now();
        let impulses = forces.accumulate(&mut sys);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force pass = {dt:8.6} s, impulses = {impulses}");
    }
}

/// Time whole frames: physics step plus transform, sort and shading
/// Paste output directly into a spreadsheet to graph
pub fn bench_frame() {
    println!("N,step_ms,render_ms,draw_calls");

    for n in (100..=1600).step_by(100) {
        // Small n: average over a few frames to smooth noise
        let frames = if n <= 400 { 5 } else { 1 };

        let mut scenario = Scenario {
            system: make_system(n),
            ..Scenario::default()
        };

        let t0 = Instant::now();
        for _ in 0..frames {
            scenario.step(1.0 / 60.0);
        }
        let step_ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        let t1 = Instant::now();
        let mut calls = 0;
        for _ in 0..frames {
            calls = scenario.render().calls.len();
        }
        let render_ms = t1.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{},{:.6},{:.6},{}", n, step_ms, render_ms, calls);
    }
}
