//! Explicit time marching to steady state.

mod config;
mod solution;

pub use config::MarchConfig;
pub use solution::{Snapshot, Solution, Status};

use std::mem;

use uom::si::{
    f64::{TemperatureInterval, Time},
    temperature_interval::kelvin as delta_kelvin,
    time::second,
};

use super::{Field, Operator, SolveError};

/// Marches `initial` forward with `operator` until steady state, divergence,
/// or the end of the step budget.
///
/// The time step is the operator's; `config.time_step` is only used to build
/// operators. Steps run from 0 to [`MarchConfig::last_step`] inclusive and
/// step `k` is labelled `k · Δt`. A snapshot of the updated field is kept
/// whenever `k` is a multiple of the capture stride, and the final field is
/// always the last snapshot.
///
/// # Errors
///
/// Returns a [`SolveError`] if `config` is invalid, if the operator is
/// unstable and `config.allow_unstable` is off, or if `initial` was built for
/// a different grid.
pub fn march(
    operator: &Operator,
    initial: &Field,
    config: &MarchConfig,
) -> Result<Solution, SolveError> {
    config.validate()?;

    let stability = operator.stability();
    if !stability.is_stable() && !config.allow_unstable {
        return Err(SolveError::Unstable {
            fourier: stability.fourier,
            limit: stability.limit,
            kind: stability.limiting_kind,
        });
    }

    let expected = operator.grid().size();
    let found = initial.grid().size();
    if expected != found {
        return Err(SolveError::FieldMismatch { expected, found });
    }

    let dt = operator.dt();
    let tolerance = config.tolerance_kelvin();
    let last_step = config.last_step(operator.time_step());

    let mut current = initial.clone();
    let mut next = initial.clone();
    let mut snapshots = Vec::new();
    let mut max_change = 0.0;
    let mut captured = false;

    for step in 0..=last_step {
        operator.apply(current.values(), next.values_mut());

        #[allow(clippy::cast_precision_loss)]
        let time = Time::new::<second>(step as f64 * dt);
        captured = step % config.capture_stride == 0;
        if captured {
            snapshots.push(Snapshot {
                step,
                time,
                field: next.clone(),
            });
        }

        let values = next.values();
        if let Some(row) = operator.rows().find(|row| !values[row.node].is_finite()) {
            let node = row.node;
            if !captured {
                snapshots.push(Snapshot {
                    step,
                    time,
                    field: next,
                });
            }
            return Ok(Solution {
                snapshots,
                status: Status::Diverged { step, time, node },
                stability,
                steps: step + 1,
            });
        }

        max_change = operator
            .rows()
            .map(|row| (values[row.node] - current.values()[row.node]).abs())
            .fold(0.0, f64::max);

        mem::swap(&mut current, &mut next);

        if max_change < tolerance {
            if !captured {
                snapshots.push(Snapshot {
                    step,
                    time,
                    field: current,
                });
            }
            return Ok(Solution {
                snapshots,
                status: Status::Converged {
                    step,
                    time,
                    max_change: TemperatureInterval::new::<delta_kelvin>(max_change),
                },
                stability,
                steps: step + 1,
            });
        }
    }

    if !captured {
        #[allow(clippy::cast_precision_loss)]
        let time = Time::new::<second>(last_step as f64 * dt);
        snapshots.push(Snapshot {
            step: last_step,
            time,
            field: current,
        });
    }

    Ok(Solution {
        snapshots,
        status: Status::BudgetExhausted {
            max_change: TemperatureInterval::new::<delta_kelvin>(max_change),
        },
        stability,
        steps: last_step + 1,
    })
}
