use dbr_advisor::calculators::{
    AmortizationSolver, DbrPolicy, DbrTier, EligibilityCalculator, FinancingInputError,
};

fn calculator() -> EligibilityCalculator {
    EligibilityCalculator::new()
}

#[test]
fn zero_salary_yields_no_result() {
    assert!(calculator().evaluate(0.0, 500.0).is_none());
    assert!(calculator().evaluate(-1.0, 0.0).is_none());
}

#[test]
fn tier_boundaries_follow_actual_ratio() {
    // 3_000 of 10_000 is exactly 30%.
    let result = calculator().evaluate(10_000.0, 3_000.0).expect("result");
    assert_eq!(result.actual_dbr_percent, 30.0);
    assert_eq!(result.tier, DbrTier::Excellent);

    assert_eq!(DbrTier::classify(45.000001), DbrTier::Elevated);
    assert_eq!(DbrTier::classify(65.0), DbrTier::Elevated);
    assert_eq!(DbrTier::classify(65.000001), DbrTier::Critical);
}

#[test]
fn excellent_critical_and_overdrawn_scenarios() {
    let excellent = calculator().evaluate(10_000.0, 2_000.0).expect("result");
    assert_eq!(excellent.actual_dbr_percent, 20.0);
    assert_eq!(excellent.tier, DbrTier::Excellent);
    assert_eq!(excellent.available_capacity, 2_500.0);

    let critical = calculator().evaluate(10_000.0, 8_000.0).expect("result");
    assert_eq!(critical.actual_dbr_percent, 80.0);
    assert_eq!(critical.visual_dbr_percent, 80.0);
    assert_eq!(critical.tier, DbrTier::Critical);

    let overdrawn = calculator().evaluate(5_000.0, 6_000.0).expect("result");
    assert_eq!(overdrawn.actual_dbr_percent, 120.0);
    assert_eq!(overdrawn.visual_dbr_percent, 100.0);
    assert_eq!(overdrawn.tier, DbrTier::Critical);
    assert_eq!(overdrawn.available_capacity, 0.0);
}

#[test]
fn textual_percentage_uses_uncapped_ratio() {
    let result = calculator().evaluate(10_000.0, 13_700.0).expect("result");
    assert_eq!(format!("{:.1}%", result.actual_dbr_percent), "137.0%");
    assert_eq!(result.visual_dbr_percent, 100.0);
}

#[test]
fn the_two_ceilings_answer_different_questions() {
    let policy = DbrPolicy::default();
    let eligibility = calculator()
        .evaluate(10_000.0, 4_000.0)
        .expect("result");
    let quote = AmortizationSolver::new(policy)
        .evaluate(10_000.0, 1.0, 0.0, 10_000.0, 4_000.0)
        .expect("quote");

    // 40% sits inside the general ceiling but leaves nothing under the new-loan ceiling.
    assert_eq!(eligibility.tier, DbrTier::Good);
    assert!(eligibility.available_capacity > 0.0);
    assert_eq!(quote.remaining_capacity, 0.0);
    assert!(!quote.is_eligible);
    assert_eq!(quote.max_financeable_principal, 0.0);
}

#[test]
fn flat_rate_reference_quote() {
    let quote = AmortizationSolver::default()
        .evaluate(100_000.0, 5.0, 3.5, 10_000.0, 0.0)
        .expect("quote");

    assert!((quote.total_profit - 17_500.0).abs() < 1e-6);
    assert!((quote.total_due - 117_500.0).abs() < 1e-6);
    assert!((quote.monthly_payment - 1_958.333_333).abs() < 1e-6);
}

#[test]
fn invalid_term_is_a_no_result_signal() {
    let err = AmortizationSolver::default()
        .evaluate(100_000.0, 0.0, 3.5, 10_000.0, 0.0)
        .expect_err("zero term rejected");
    assert_eq!(err, FinancingInputError::InvalidTerm(0.0));
}
