//! Feedback divider solver.
//!
//! This module provides the search engine that picks the (R1, R2) pair.
//!
//! ## Selection method
//!
//! The solver streams the full Cartesian product of catalog values, both
//! R1 and R2 drawn independently, and scores every pair:
//!
//! ```text
//! score = W * |Vtarget - formula(R1, R2)| + |Rtarget - (R1 + R2)|
//! ```
//!
//! with W = 1e5. The large weight makes the search voltage-first and
//! resistance-second, approximating a lexicographic ordering with a
//! single scalar. The scalarization is load-bearing: which pair wins a
//! near-tie depends on the exact weighting, so it must not be replaced
//! with a true lexicographic comparison.
//!
//! Ties on the exact score go to the first pair encountered, with R1 as
//! the outer loop and R2 as the inner loop, both ascending. Pairs whose
//! score is not finite never win.

use crate::catalog::ResistorCatalog;
use crate::error::{FbDivError, Result};

/// Weight applied to the voltage error when scoring a candidate pair.
///
/// Large enough that any measurable voltage error outweighs the
/// resistance error of every plausible feedback divider.
pub const VOLTAGE_ERROR_WEIGHT: f64 = 1e5;

/// What the caller asks for: an output voltage and a total divider
/// resistance, both in consistent units with the catalog.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackTarget {
    /// Target output voltage in volts
    pub voltage: f64,
    /// Target R1 + R2 in ohms
    pub total_resistance: f64,
}

impl FeedbackTarget {
    /// Create a target, validating that both values are finite and positive.
    pub fn new(voltage: f64, total_resistance: f64) -> Result<Self> {
        let target = Self {
            voltage,
            total_resistance,
        };
        target.validate()?;
        Ok(target)
    }

    /// Check the solve preconditions: finite, positive targets.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("voltage", self.voltage),
            ("total resistance", self.total_resistance),
        ] {
            if !value.is_finite() {
                return Err(FbDivError::non_finite(name, value));
            }
            if value <= 0.0 {
                return Err(FbDivError::non_positive(name, value));
            }
        }
        Ok(())
    }
}

/// The winning pair and its derived values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackSolution {
    /// Upper divider resistor in ohms, a catalog member
    pub r1: f64,
    /// Lower divider resistor in ohms, a catalog member
    pub r2: f64,
    /// Output voltage the pair actually produces, `formula(r1, r2)` exactly
    pub achieved_voltage: f64,
    /// The pair's score under the weighted error sum
    pub score: f64,
}

/// Pick the catalog pair that best satisfies the target.
///
/// Runs in O(n^2) time and O(1) extra space over a catalog of n values;
/// nothing is materialized beyond the running best.
///
/// # Errors
///
/// * Invalid target (non-finite or non-positive) per [`FeedbackTarget::validate`]
/// * [`FbDivError::EmptyCatalog`] when the catalog has no values
/// * [`FbDivError::NoFiniteCandidate`] when the formula yields a
///   non-finite voltage for every pair
///
/// # Example
///
/// ```
/// use fbdiv::{solve, FeedbackTarget, ResistorCatalog};
///
/// let catalog = ResistorCatalog::feedback_e24();
/// let target = FeedbackTarget::new(1.2, 40_000.0).unwrap();
/// let best = solve(|r1, r2| 0.6 * (1.0 + r1 / r2), &target, &catalog).unwrap();
/// assert_eq!((best.r1, best.r2), (20_000.0, 20_000.0));
/// ```
pub fn solve<F>(formula: F, target: &FeedbackTarget, catalog: &ResistorCatalog) -> Result<FeedbackSolution>
where
    F: Fn(f64, f64) -> f64,
{
    target.validate()?;

    if catalog.is_empty() {
        return Err(FbDivError::EmptyCatalog);
    }

    let mut best: Option<FeedbackSolution> = None;
    let mut best_score = f64::INFINITY;
    let mut pairs = 0usize;

    for r1 in catalog.values() {
        for r2 in catalog.values() {
            pairs += 1;

            let achieved = formula(r1, r2);
            let voltage_error = (target.voltage - achieved).abs();
            let resistance_error = (target.total_resistance - (r1 + r2)).abs();
            let score = VOLTAGE_ERROR_WEIGHT * voltage_error + resistance_error;

            // A formula blow-up (NaN/inf) must never win a comparison
            if !score.is_finite() {
                continue;
            }

            if score < best_score {
                best_score = score;
                best = Some(FeedbackSolution {
                    r1,
                    r2,
                    achieved_voltage: achieved,
                    score,
                });
            }
        }
    }

    best.ok_or(FbDivError::NoFiniteCandidate { pairs })
}
