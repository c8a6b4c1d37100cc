use uom::si::f64::{TemperatureInterval, Time};

use crate::models::thermal::plate::core::{Field, Stability};

/// Field captured at one step of the march.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Step index, starting at 0.
    pub step: usize,

    /// Simulated time `step · Δt`.
    pub time: Time,

    /// Temperatures after the step's update.
    pub field: Field,
}

/// How the march ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Every plate node changed by less than the tolerance in one step.
    Converged {
        step: usize,
        time: Time,
        max_change: TemperatureInterval,
    },

    /// The step budget ran out before convergence.
    ///
    /// A run forced past the stability limit reports this status if it is
    /// still finite when the budget runs out. Check [`Solution::stability`]
    /// to tell such a run from a slow but stable one.
    BudgetExhausted {
        /// Largest single-step change over the final step.
        max_change: TemperatureInterval,
    },

    /// A plate node became NaN or infinite.
    Diverged {
        step: usize,
        time: Time,
        /// Column-major index of the first non-finite node.
        node: usize,
    },
}

impl Status {
    /// Returns `true` if the march reached steady state.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Result of marching the plate.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Captured fields in step order. The first is step 0 and the last is the
    /// final field.
    pub snapshots: Vec<Snapshot>,

    /// How the march ended.
    pub status: Status,

    /// Stability assessment of the operator that was marched.
    pub stability: Stability,

    /// Number of updates applied.
    pub steps: usize,
}

impl Solution {
    /// The last field computed.
    #[must_use]
    pub fn final_field(&self) -> Option<&Field> {
        self.snapshots.last().map(|snapshot| &snapshot.field)
    }

    /// The steady-state field, if the march converged.
    #[must_use]
    pub fn steady_state(&self) -> Option<&Field> {
        if self.status.is_converged() {
            self.final_field()
        } else {
            None
        }
    }

    /// Time labels of the snapshots.
    #[must_use]
    pub fn times(&self) -> Vec<Time> {
        self.snapshots.iter().map(|snapshot| snapshot.time).collect()
    }
}
