//! Flat-rate (simple interest) financing quotes.
//!
//! Profit is charged once on the full principal for the whole term and the total is spread
//! evenly across the months. There is no declining-balance schedule.

mod capacity;

pub use capacity::{max_principal_for, remaining_capacity};

use super::eligibility::coerce_obligations;
use super::policy::DbrPolicy;
use serde::{Deserialize, Serialize};

/// Requested financing terms together with the applicant's current salary picture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingInput {
    pub principal: f64,
    pub term_years: f64,
    pub annual_profit_rate_percent: f64,
    pub monthly_salary: f64,
    #[serde(default)]
    pub monthly_obligations: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingResult {
    pub total_profit: f64,
    pub total_due: f64,
    pub monthly_payment: f64,
    pub term_months: f64,
    pub remaining_capacity: f64,
    pub is_eligible: bool,
    pub max_financeable_principal: f64,
}

/// Inputs the solver refuses to quote.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinancingInputError {
    #[error("term must be a positive number of years, got {0}")]
    InvalidTerm(f64),
    #[error("annual profit rate must not be negative, got {0}")]
    NegativeRate(f64),
    #[error("principal must not be negative, got {0}")]
    NegativePrincipal(f64),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Stateless solver applying the new-financing ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationSolver {
    policy: DbrPolicy,
}

impl AmortizationSolver {
    pub fn new(policy: DbrPolicy) -> Self {
        Self { policy }
    }

    pub fn evaluate(
        &self,
        principal: f64,
        term_years: f64,
        annual_rate_percent: f64,
        salary: f64,
        obligations: f64,
    ) -> Result<FinancingResult, FinancingInputError> {
        ensure_finite("principal", principal)?;
        ensure_finite("annual_profit_rate_percent", annual_rate_percent)?;
        ensure_finite("monthly_salary", salary)?;
        if !term_years.is_finite() || term_years <= 0.0 {
            return Err(FinancingInputError::InvalidTerm(term_years));
        }
        if annual_rate_percent < 0.0 {
            return Err(FinancingInputError::NegativeRate(annual_rate_percent));
        }
        if principal < 0.0 {
            return Err(FinancingInputError::NegativePrincipal(principal));
        }

        let obligations = coerce_obligations(obligations);

        let total_profit = principal * (annual_rate_percent / 100.0) * term_years;
        let total_due = principal + total_profit;
        let term_months = term_years * 12.0;
        let monthly_payment = total_due / term_months;

        // Judged on current obligations only; the requested principal plays no part.
        let remaining_capacity =
            remaining_capacity(salary, obligations, self.policy.new_financing_ceiling);

        Ok(FinancingResult {
            total_profit,
            total_due,
            monthly_payment,
            term_months,
            remaining_capacity,
            is_eligible: monthly_payment <= remaining_capacity,
            max_financeable_principal: max_principal_for(
                remaining_capacity,
                term_years,
                annual_rate_percent,
            ),
        })
    }

    pub fn evaluate_input(
        &self,
        input: &FinancingInput,
    ) -> Result<FinancingResult, FinancingInputError> {
        self.evaluate(
            input.principal,
            input.term_years,
            input.annual_profit_rate_percent,
            input.monthly_salary,
            input.monthly_obligations.unwrap_or(0.0),
        )
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), FinancingInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinancingInputError::NonFinite { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn solver() -> AmortizationSolver {
        AmortizationSolver::default()
    }

    #[test]
    fn flat_rate_quote_matches_reference_figures() {
        let result = solver()
            .evaluate(100_000.0, 5.0, 3.5, 10_000.0, 0.0)
            .expect("quote");

        assert!((result.total_profit - 17_500.0).abs() < TOLERANCE);
        assert!((result.total_due - 117_500.0).abs() < TOLERANCE);
        assert_eq!(result.term_months, 60.0);
        assert!((result.monthly_payment - 117_500.0 / 60.0).abs() < TOLERANCE);
        assert!((result.remaining_capacity - 3_300.0).abs() < TOLERANCE);
        assert!(result.is_eligible);
    }

    #[test]
    fn eligibility_uses_new_financing_ceiling_not_classification_ceiling() {
        // 2_000 fits under 45% of 10_000 minus 2_000, but not under 33%.
        let result = solver()
            .evaluate(100_000.0, 5.0, 3.5, 10_000.0, 2_000.0)
            .expect("quote");

        assert!((result.remaining_capacity - 1_300.0).abs() < TOLERANCE);
        assert!(!result.is_eligible);
    }

    #[test]
    fn max_principal_feeds_back_to_remaining_capacity() {
        let result = solver()
            .evaluate(50_000.0, 4.0, 5.0, 12_000.0, 1_500.0)
            .expect("quote");
        let round_trip = solver()
            .evaluate(result.max_financeable_principal, 4.0, 5.0, 12_000.0, 1_500.0)
            .expect("round trip quote");

        assert!((round_trip.monthly_payment - result.remaining_capacity).abs() < TOLERANCE);
    }

    #[test]
    fn obligations_above_ceiling_leave_nothing_to_finance() {
        let result = solver()
            .evaluate(20_000.0, 3.0, 4.0, 6_000.0, 7_000.0)
            .expect("quote");
        assert_eq!(result.remaining_capacity, 0.0);
        assert_eq!(result.max_financeable_principal, 0.0);
        assert!(!result.is_eligible);
    }

    #[test]
    fn zero_or_negative_term_is_rejected() {
        assert_eq!(
            solver().evaluate(10_000.0, 0.0, 3.5, 10_000.0, 0.0),
            Err(FinancingInputError::InvalidTerm(0.0))
        );
        assert_eq!(
            solver().evaluate(10_000.0, -2.0, 3.5, 10_000.0, 0.0),
            Err(FinancingInputError::InvalidTerm(-2.0))
        );
        assert!(matches!(
            solver().evaluate(10_000.0, f64::NAN, 3.5, 10_000.0, 0.0),
            Err(FinancingInputError::InvalidTerm(_))
        ));
    }

    #[test]
    fn negative_rate_and_non_finite_inputs_are_rejected() {
        assert_eq!(
            solver().evaluate(10_000.0, 2.0, -1.0, 10_000.0, 0.0),
            Err(FinancingInputError::NegativeRate(-1.0))
        );
        assert_eq!(
            solver().evaluate(f64::INFINITY, 2.0, 3.0, 10_000.0, 0.0),
            Err(FinancingInputError::NonFinite { field: "principal" })
        );
        assert_eq!(
            solver().evaluate(10_000.0, 2.0, 3.0, f64::NAN, 0.0),
            Err(FinancingInputError::NonFinite {
                field: "monthly_salary"
            })
        );
    }

    #[test]
    fn negative_principal_is_rejected() {
        assert_eq!(
            solver().evaluate(-50_000.0, 5.0, 3.5, 10_000.0, 0.0),
            Err(FinancingInputError::NegativePrincipal(-50_000.0))
        );

        let zero = solver()
            .evaluate(0.0, 5.0, 3.5, 10_000.0, 0.0)
            .expect("zero principal quotes");
        assert_eq!(zero.monthly_payment, 0.0);
        assert!(zero.is_eligible);
    }

    #[test]
    fn nan_obligations_are_treated_as_zero() {
        let with_nan = solver()
            .evaluate(30_000.0, 2.0, 3.0, 9_000.0, f64::NAN)
            .expect("quote");
        let with_zero = solver()
            .evaluate(30_000.0, 2.0, 3.0, 9_000.0, 0.0)
            .expect("quote");
        assert_eq!(with_nan, with_zero);
    }

    #[test]
    fn zero_rate_spreads_principal_evenly() {
        let result = solver()
            .evaluate(24_000.0, 2.0, 0.0, 10_000.0, 0.0)
            .expect("quote");
        assert_eq!(result.total_profit, 0.0);
        assert_eq!(result.monthly_payment, 1_000.0);
    }
}
