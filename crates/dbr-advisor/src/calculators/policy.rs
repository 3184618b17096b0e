use super::eligibility::GOOD_UPPER_BOUND;
use serde::{Deserialize, Serialize};

/// Share of salary that general debt obligations may consume. Tied to the upper bound of the
/// good tier so that capacity and classification never disagree.
pub const CLASSIFICATION_CEILING: f64 = GOOD_UPPER_BOUND / 100.0;

/// Share of salary available to installments once a new financing product is added.
pub const DEFAULT_NEW_FINANCING_CEILING: f64 = 0.33;

/// Tunable installment ceiling for new financing, as a fraction of monthly salary.
///
/// The general classification ceiling is [`CLASSIFICATION_CEILING`] and is not configurable;
/// the two belong to different regulatory contexts and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DbrPolicy {
    pub new_financing_ceiling: f64,
}

impl Default for DbrPolicy {
    fn default() -> Self {
        Self {
            new_financing_ceiling: DEFAULT_NEW_FINANCING_CEILING,
        }
    }
}

impl DbrPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        check_ceiling("new_financing_ceiling", self.new_financing_ceiling)
    }
}

fn check_ceiling(name: &'static str, value: f64) -> Result<(), PolicyError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(PolicyError::CeilingOutOfRange { name, value })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("{name} must be within (0, 1], got {value}")]
    CeilingOutOfRange { name: &'static str, value: f64 },
}
