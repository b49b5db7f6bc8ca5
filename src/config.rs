use crate::errors::{MiningError, Result};
use serde::{Deserialize, Serialize};

/// Mining configuration for the Apriori engine.
///
/// Mirrors the argument set of the original `webApriori` reference program:
/// a minimum support, a minimum confidence, a minimum lift, a maximum rule
/// length, a ceiling on the number of rules to keep, and a bitmask selecting
/// which redundancy filters to run over the final rule set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Minimum support threshold (0.0, 1.0].
    /// Example: 0.1 = itemset must appear in at least 10% of transactions.
    pub min_support: f64,

    /// Minimum confidence threshold (0.0, 1.0].
    /// Example: 0.7 = rule must be correct at least 70% of the time.
    pub min_confidence: f64,

    /// Minimum lift threshold, strictly positive.
    /// Example: 1.2 = items must co-occur 20% more than random chance.
    pub min_lift: f64,

    /// Maximum itemset/rule length, inclusive. Must be >= 2.
    pub max_length: usize,

    /// Ceiling on the number of rules retained before redundancy filtering.
    pub max_rules: usize,

    /// Bitmask selecting redundancy filters: bit 0 = symmetric swap,
    /// bit 1 = fixed-consequent subsumption, bit 2 = fixed-antecedent
    /// subsumption. 0 disables all filters.
    pub redundancy_mask: u8,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            min_confidence: 0.2,
            min_lift: 1.5,
            // The original program's default rule length.
            max_length: 4,
            max_rules: 1000,
            redundancy_mask: 0,
        }
    }
}

impl MiningConfig {
    /// Validates the configuration, returning `MiningError::InvalidConfig`
    /// describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_support > 0.0 && self.min_support <= 1.0) {
            return Err(MiningError::InvalidConfig(
                "min_support must be in (0, 1]".to_string(),
            ));
        }
        if !(self.min_confidence > 0.0 && self.min_confidence <= 1.0) {
            return Err(MiningError::InvalidConfig(
                "min_confidence must be in (0, 1]".to_string(),
            ));
        }
        if self.min_lift <= 0.0 {
            return Err(MiningError::InvalidConfig(
                "min_lift must be positive".to_string(),
            ));
        }
        if self.max_length < 2 {
            return Err(MiningError::InvalidConfig(
                "max_length must be at least 2".to_string(),
            ));
        }
        if self.max_rules == 0 {
            return Err(MiningError::InvalidConfig(
                "max_rules must be at least 1".to_string(),
            ));
        }
        if self.redundancy_mask > 0b111 {
            return Err(MiningError::InvalidConfig(
                "redundancy_mask must be in 0..=7".to_string(),
            ));
        }
        Ok(())
    }
}

/// Redundancy filter bits, named for readability at call sites.
pub mod redundancy_bits {
    /// Drop the lower-confidence direction of a symmetric A=>B / B=>A pair.
    pub const SYMMETRIC_SWAP: u8 = 0b001;
    /// Drop a rule subsumed by all of its shorter-antecedent, same-consequent siblings.
    pub const FIXED_CONSEQUENT: u8 = 0b010;
    /// Drop a rule subsumed by all of its shorter-consequent, same-antecedent siblings.
    pub const FIXED_ANTECEDENT: u8 = 0b100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MiningConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_support() {
        let config = MiningConfig {
            min_support: 0.0,
            ..MiningConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MiningError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_max_length_below_two() {
        let config = MiningConfig {
            max_length: 1,
            ..MiningConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_rules() {
        let config = MiningConfig {
            max_rules: 0,
            ..MiningConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_full_redundancy_mask() {
        let config = MiningConfig {
            redundancy_mask: 0b111,
            ..MiningConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
