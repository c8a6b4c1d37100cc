use uom::si::{
    f64::{TemperatureInterval, Time},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    time::second,
};

use crate::{
    models::thermal::plate::core::ConfigError,
    support::constraint::{NonNegative, StrictlyPositive},
};

/// Relative tolerance for `end_time / time_step` to count as a whole number.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Numerical settings for the time march.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchConfig {
    /// Explicit time step `Δt`.
    pub time_step: Time,

    /// Simulated time after which the march stops if it has not converged.
    pub end_time: Time,

    /// Steady state is reached once every plate node changes by less than
    /// this in a single step.
    pub tolerance: TemperatureInterval,

    /// A snapshot is kept every `capture_stride` steps, starting at step 0.
    pub capture_stride: usize,

    /// Runs the march even when the Fourier number exceeds the stability limit.
    pub allow_unstable: bool,
}

impl MarchConfig {
    /// Checks every setting.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the time step is not strictly positive,
    /// the end time or tolerance is negative, or the capture stride is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        StrictlyPositive::new(self.time_step).map_err(ConfigError::invalid("time_step"))?;
        NonNegative::new(self.end_time).map_err(ConfigError::invalid("end_time"))?;
        NonNegative::new(self.tolerance.get::<delta_kelvin>())
            .map_err(ConfigError::invalid("tolerance"))?;
        StrictlyPositive::new(self.capture_stride)
            .map_err(ConfigError::invalid("capture_stride"))?;

        if !self.end_time.value.is_finite() {
            return Err(ConfigError::NotFinite { field: "end_time" });
        }
        Ok(())
    }

    /// Index of the last step for a march advancing by `time_step`.
    ///
    /// Steps run from 0 to this index inclusive. A ratio within a relative
    /// `1e-9` of a whole number is rounded, otherwise it is floored, so an
    /// end time of 5000 s at 0.1 s gives step 50 000.
    #[must_use]
    pub fn last_step(&self, time_step: Time) -> usize {
        let steps = (self.end_time / time_step).get::<ratio>();
        let whole = steps.round();
        let steps = if (steps - whole).abs() <= STEP_COUNT_TOLERANCE * whole.max(1.0) {
            whole
        } else {
            steps.floor()
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = steps as usize;
        steps
    }

    /// Tolerance in kelvin.
    pub(in crate::models::thermal::plate::core) fn tolerance_kelvin(&self) -> f64 {
        self.tolerance.get::<delta_kelvin>()
    }
}

/// Δt = 0.1 s, 5000 s, 1e-4 K, every 500th step, stability enforced.
impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            time_step: Time::new::<second>(0.1),
            end_time: Time::new::<second>(5000.0),
            tolerance: TemperatureInterval::new::<delta_kelvin>(1e-4),
            capture_stride: 500,
            allow_unstable: false,
        }
    }
}
