//! Pure, stateless calculators behind the advisory tools.
//!
//! Every evaluation is recomputed from its inputs; nothing here retains state between calls,
//! so callers may invoke them on every input change without coordination.

pub mod batch;
pub mod eligibility;
pub mod financing;
mod policy;
pub mod router;

pub use batch::{evaluate_csv, write_report, BatchError, BatchRow};
pub use eligibility::{DbrTier, EligibilityCalculator, EligibilityInput, EligibilityResult};
pub use financing::{
    max_principal_for, remaining_capacity, AmortizationSolver, FinancingInput,
    FinancingInputError, FinancingResult,
};
pub use policy::{
    DbrPolicy, PolicyError, CLASSIFICATION_CEILING, DEFAULT_NEW_FINANCING_CEILING,
};
pub use router::calculator_router;
