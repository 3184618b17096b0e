mod tier;

pub use tier::{DbrTier, ELEVATED_UPPER_BOUND, EXCELLENT_UPPER_BOUND, GOOD_UPPER_BOUND};

use super::policy::CLASSIFICATION_CEILING;
use serde::{Deserialize, Serialize};

/// Salary and obligation figures as captured from the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub monthly_salary: f64,
    #[serde(default)]
    pub monthly_obligations: Option<f64>,
}

/// Debt-burden snapshot for a single salary/obligations pair.
///
/// `actual_dbr_percent` is uncapped and is the figure any textual percentage should show.
/// `visual_dbr_percent` is bounded to `[0, 100]` and only meant for gauge fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub actual_dbr_percent: f64,
    pub visual_dbr_percent: f64,
    pub max_allowed_installment: f64,
    pub available_capacity: f64,
    pub remaining_salary: f64,
    pub tier: DbrTier,
}

/// Stateless evaluator applying the classification ceiling to a salary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityCalculator;

impl EligibilityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` when the salary is not a positive finite amount, or when the ratio it
    /// yields is not finite; there is nothing meaningful to display in either case.
    pub fn evaluate(&self, salary: f64, obligations: f64) -> Option<EligibilityResult> {
        if !salary.is_finite() || salary <= 0.0 {
            return None;
        }

        let obligations = coerce_obligations(obligations);

        // Ratio first, from uncapped figures; the gauge value derives from it.
        let actual_dbr_percent = obligations / salary * 100.0;
        if !actual_dbr_percent.is_finite() {
            return None;
        }
        let visual_dbr_percent = actual_dbr_percent.clamp(0.0, 100.0);

        let max_allowed_installment = salary * CLASSIFICATION_CEILING;
        let available_capacity = (max_allowed_installment - obligations).max(0.0);

        Some(EligibilityResult {
            actual_dbr_percent,
            visual_dbr_percent,
            max_allowed_installment,
            available_capacity,
            remaining_salary: salary - obligations,
            tier: DbrTier::classify(actual_dbr_percent),
        })
    }

    pub fn evaluate_input(&self, input: &EligibilityInput) -> Option<EligibilityResult> {
        self.evaluate(
            input.monthly_salary,
            input.monthly_obligations.unwrap_or(0.0),
        )
    }
}

/// Missing or NaN obligations count as zero.
pub(crate) fn coerce_obligations(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}
