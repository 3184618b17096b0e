use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::eligibility::{EligibilityCalculator, EligibilityInput, EligibilityResult};
use super::financing::{AmortizationSolver, FinancingInput, FinancingResult};
use super::policy::DbrPolicy;
use crate::error::AppError;

/// Calculators shared by every request; both are plain values so cloning the `Arc` is all
/// the coordination handlers need.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorState {
    pub eligibility: EligibilityCalculator,
    pub financing: AmortizationSolver,
}

impl CalculatorState {
    pub fn new(policy: DbrPolicy) -> Self {
        Self {
            eligibility: EligibilityCalculator::new(),
            financing: AmortizationSolver::new(policy),
        }
    }
}

/// Eligibility result decorated with the advisory copy for its tier.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityView {
    #[serde(flatten)]
    pub result: EligibilityResult,
    pub headline: &'static str,
    pub advice: &'static str,
    pub gauge_color: &'static str,
    pub exceeds_new_financing_ceiling: bool,
}

impl From<EligibilityResult> for EligibilityView {
    fn from(result: EligibilityResult) -> Self {
        let tier = result.tier;
        Self {
            result,
            headline: tier.headline(),
            advice: tier.advice(),
            gauge_color: tier.gauge_color(),
            exceeds_new_financing_ceiling: tier.exceeds_new_financing_ceiling(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResponse {
    pub evaluated_at: DateTime<Utc>,
    pub result: Option<EligibilityView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancingResponse {
    pub evaluated_at: DateTime<Utc>,
    pub result: FinancingResult,
}

/// Router builder exposing the calculators as JSON endpoints.
pub fn calculator_router(policy: DbrPolicy) -> Router {
    Router::new()
        .route("/api/v1/calculators/eligibility", post(eligibility_handler))
        .route("/api/v1/calculators/financing", post(financing_handler))
        .with_state(Arc::new(CalculatorState::new(policy)))
}

pub(crate) async fn eligibility_handler(
    State(state): State<Arc<CalculatorState>>,
    Json(input): Json<EligibilityInput>,
) -> Json<EligibilityResponse> {
    let result = state.eligibility.evaluate_input(&input);
    match &result {
        Some(result) => debug!(
            tier = result.tier.label(),
            actual_dbr_percent = result.actual_dbr_percent,
            "eligibility evaluated"
        ),
        None => debug!(salary = input.monthly_salary, "no ratio for this salary"),
    }

    Json(EligibilityResponse {
        evaluated_at: Utc::now(),
        result: result.map(EligibilityView::from),
    })
}

pub(crate) async fn financing_handler(
    State(state): State<Arc<CalculatorState>>,
    Json(input): Json<FinancingInput>,
) -> Result<Json<FinancingResponse>, AppError> {
    let result = state.financing.evaluate_input(&input).map_err(|err| {
        debug!(error = %err, "financing quote rejected");
        err
    })?;

    debug!(
        monthly_payment = result.monthly_payment,
        eligible = result.is_eligible,
        "financing quote computed"
    );

    Ok(Json(FinancingResponse {
        evaluated_at: Utc::now(),
        result,
    }))
}
