/// Installment budget left under `ceiling` once current obligations are paid. Never negative.
pub fn remaining_capacity(salary: f64, obligations: f64, ceiling: f64) -> f64 {
    (salary * ceiling - obligations).max(0.0)
}

/// Largest principal whose flat-rate monthly payment fits `remaining_capacity` at the given
/// term and annual rate. Inverts `payment = principal * (1 + rate * years) / months`.
pub fn max_principal_for(
    remaining_capacity: f64,
    term_years: f64,
    annual_rate_percent: f64,
) -> f64 {
    let months = term_years * 12.0;
    let max_principal =
        (remaining_capacity * months) / (1.0 + (annual_rate_percent / 100.0) * term_years);
    if max_principal > 0.0 {
        max_principal
    } else {
        0.0
    }
}
