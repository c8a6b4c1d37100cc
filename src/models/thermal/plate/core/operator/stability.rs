//! Stability bound of the explicit update.

use crate::models::thermal::plate::core::{Coefficients, NodeKind};

/// Stability bound for a plate with no convective faces.
pub const NOMINAL_FOURIER_LIMIT: f64 = 0.25;

/// Fourier number of an operator against the largest stable Fourier number.
///
/// The update is stable while every diagonal weight stays non-negative:
/// `1 − 4·F0 − c·Bi·F0 ≥ 0`, where `c` is the node's
/// [`convective_weight`](NodeKind::convective_weight). The limit is therefore
/// `1 / (4 + c·Bi)` at the most restrictive node kind present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stability {
    /// Fourier number `F0` of the operator.
    pub fourier: f64,

    /// Largest stable Fourier number.
    pub limit: f64,

    /// Node kind that sets [`limit`](Self::limit).
    pub limiting_kind: NodeKind,
}

impl Stability {
    /// Assesses the operator built from `coefficients` over the given node kinds.
    pub(super) fn assess(
        kinds: impl IntoIterator<Item = NodeKind>,
        coefficients: &Coefficients,
    ) -> Self {
        let mut limit = NOMINAL_FOURIER_LIMIT;
        let mut limiting_kind = NodeKind::StemInterior;

        for kind in kinds {
            if kind.is_fixed() || !kind.is_active() {
                continue;
            }
            let bound = 1.0 / (4.0 + kind.convective_weight() * coefficients.biot);
            if bound < limit {
                limit = bound;
                limiting_kind = kind;
            }
        }

        Self {
            fourier: coefficients.fourier,
            limit,
            limiting_kind,
        }
    }

    /// Returns `true` if the Fourier number is within the limit.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.fourier <= self.limit
    }
}
