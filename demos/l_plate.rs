//! Marches the default L-shaped plate and prints what a plotting front end
//! would consume: snapshot times, the final field, and the run status.

use twine_conduction::models::thermal::plate::{LPlate, Plate, SolveError, Status};
use twine_core::Model;
use uom::si::{
    length::millimeter, temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin, time::second,
};

fn main() -> Result<(), SolveError> {
    let plate = Plate::default();
    let solution = LPlate::default().call(&plate)?;

    let stability = solution.stability;
    println!(
        "Fourier number {:.5} (stable up to {:.5}, set by {:?} nodes)",
        stability.fourier, stability.limit, stability.limiting_kind
    );

    match solution.status {
        Status::Converged {
            step,
            time,
            max_change,
        } => println!(
            "steady after step {step} at t = {:.1} s (max change {:.2e} K)",
            time.get::<second>(),
            max_change.get::<delta_kelvin>()
        ),
        Status::BudgetExhausted { max_change } => println!(
            "not steady after {} steps (max change {:.2e} K)",
            solution.steps,
            max_change.get::<delta_kelvin>()
        ),
        Status::Diverged { step, node, .. } => {
            println!("diverged at step {step}, node {node}");
        }
    }

    let times: Vec<f64> = solution.times().iter().map(|t| t.get::<second>()).collect();
    println!(
        "{} snapshots from {:.1} s to {:.1} s",
        times.len(),
        times.first().copied().unwrap_or_default(),
        times.last().copied().unwrap_or_default()
    );

    let Some(field) = solution.final_field() else {
        return Ok(());
    };
    if let Some(max) = field.max_temperature() {
        println!("hottest node: {:.2} K", max.get::<kelvin>());
    }

    let grid = field.grid();
    let step = (grid.nodes() / 8).max(1);
    println!("final field (every {step}th node, K; row 0 is the fixed edge):");
    for (row, values) in field.to_rows().iter().enumerate().step_by(step) {
        let line: Vec<String> = values
            .iter()
            .step_by(step)
            .map(|value| value.map_or_else(|| "     -".to_owned(), |t| format!("{t:6.1}")))
            .collect();
        println!("y = {:5.1} mm | {}", grid.y(row).get::<millimeter>(), line.join(" "));
    }

    Ok(())
}
