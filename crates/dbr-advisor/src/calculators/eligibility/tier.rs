use serde::{Deserialize, Serialize};

/// Inclusive upper bound (percent) of the excellent band.
pub const EXCELLENT_UPPER_BOUND: f64 = 30.0;
/// Inclusive upper bound (percent) of the good band.
pub const GOOD_UPPER_BOUND: f64 = 45.0;
/// Inclusive upper bound (percent) of the elevated band; anything above is critical.
pub const ELEVATED_UPPER_BOUND: f64 = 65.0;

/// Debt-burden classification used to drive advisory messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbrTier {
    Excellent,
    Good,
    Elevated,
    Critical,
}

impl DbrTier {
    /// Buckets an uncapped DBR percentage. Each band includes its upper bound.
    pub fn classify(actual_dbr_percent: f64) -> Self {
        if actual_dbr_percent <= EXCELLENT_UPPER_BOUND {
            DbrTier::Excellent
        } else if actual_dbr_percent <= GOOD_UPPER_BOUND {
            DbrTier::Good
        } else if actual_dbr_percent <= ELEVATED_UPPER_BOUND {
            DbrTier::Elevated
        } else {
            DbrTier::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DbrTier::Excellent => "excellent",
            DbrTier::Good => "good",
            DbrTier::Elevated => "elevated",
            DbrTier::Critical => "critical",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            DbrTier::Excellent => "Excellent financial solvency",
            DbrTier::Good => "Good financial solvency",
            DbrTier::Elevated => "Elevated obligations",
            DbrTier::Critical => "Critical debt burden",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            DbrTier::Excellent => {
                "Your position is very healthy; you have a high chance of securing additional financing on the best terms."
            }
            DbrTier::Good => {
                "Your position is stable and within the 45% regulatory ceiling; new financing remains possible."
            }
            DbrTier::Elevated => {
                "Your obligations exceed the ceiling for new lending; rescheduling may be needed to restore headroom."
            }
            DbrTier::Critical => {
                "You are at risk of default; contact an advisor immediately to study restructuring options."
            }
        }
    }

    /// Hex fill color of the gauge band.
    pub const fn gauge_color(self) -> &'static str {
        match self {
            DbrTier::Excellent => "#10B981",
            DbrTier::Good => "#3B82F6",
            DbrTier::Elevated => "#D97706",
            DbrTier::Critical => "#DC2626",
        }
    }

    pub const fn exceeds_new_financing_ceiling(self) -> bool {
        matches!(self, DbrTier::Elevated | DbrTier::Critical)
    }
}
