//! Tunable weights and level bands for element scoring.
//!
//! The defaults reproduce the traditional simplified scheme: every stem
//! counts 1, the day master counts 2 and every branch counts 0.5. A TOML
//! document may override any subset of the values:
//!
//! ```
//! use sizhu::ScoringConfig;
//!
//! let config = ScoringConfig::from_toml_str(r#"
//!     branch_weight = 1.0
//!
//!     [bands]
//!     strong = 35.0
//! "#).unwrap();
//!
//! assert_eq!(1.0, config.branch_weight);
//! assert_eq!(2.0, config.day_stem_weight);
//! assert_eq!(35.0, config.bands.strong);
//! ```

use serde::{Deserialize, Serialize};

use crate::elements::ElementLevel;
use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of the year, month and hour stems.
    pub stem_weight: f64,
    /// Weight of the day stem (the day master).
    pub day_stem_weight: f64,
    /// Weight of each of the four branches.
    pub branch_weight: f64,
    pub bands: LevelBands,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stem_weight: 1.0,
            day_stem_weight: 2.0,
            branch_weight: 0.5,
            bands: LevelBands::default(),
        }
    }
}

impl ScoringConfig {
    /// Parses and validates a TOML document. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the weights are finite, non-negative and not all zero, and
    /// that the bands are finite and strictly ascending.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("stem_weight", self.stem_weight),
            ("day_stem_weight", self.day_stem_weight),
            ("branch_weight", self.branch_weight),
        ];
        for (name, w) in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a finite non-negative number, got {w}"
                )));
            }
        }
        if self.total_weight() <= 0.0 {
            return Err(Error::InvalidConfig("all weights are zero".into()));
        }
        self.bands.validate()
    }

    /// Sum of the weights of all eight symbols, the denominator of every
    /// percentage.
    pub fn total_weight(&self) -> f64 {
        3.0 * self.stem_weight + self.day_stem_weight + 4.0 * self.branch_weight
    }
}

/// Upper bounds (exclusive, in percent) of each level but the last.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelBands {
    pub very_weak: f64,
    pub weak: f64,
    pub balanced: f64,
    pub strong: f64,
}

impl Default for LevelBands {
    fn default() -> Self {
        Self {
            very_weak: 10.0,
            weak: 20.0,
            balanced: 30.0,
            strong: 40.0,
        }
    }
}

impl LevelBands {
    /// Classifies a percentage. Bands are checked in ascending order and the
    /// first one whose bound exceeds `percentage` wins.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::config::LevelBands;
    /// use sizhu::elements::ElementLevel;
    ///
    /// let bands = LevelBands::default();
    /// assert_eq!(ElementLevel::VeryWeak, bands.classify(9.99));
    /// assert_eq!(ElementLevel::Weak, bands.classify(10.0));
    /// assert_eq!(ElementLevel::VeryStrong, bands.classify(40.0));
    /// ```
    pub fn classify(&self, percentage: f64) -> ElementLevel {
        use ElementLevel::*;
        [
            (self.very_weak, VeryWeak),
            (self.weak, Weak),
            (self.balanced, Balanced),
            (self.strong, Strong),
        ]
        .into_iter()
        .find(|&(bound, _)| percentage < bound)
        .map_or(VeryStrong, |(_, level)| level)
    }

    fn validate(&self) -> Result<()> {
        let bounds = [self.very_weak, self.weak, self.balanced, self.strong];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(Error::InvalidConfig("level bands must be finite".into()));
        }
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(Error::InvalidConfig(format!(
                "level bands must be strictly ascending, got {bounds:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScoringConfig::default();
        assert_eq!(7.0, config.total_weight());
        assert!(config.validate().is_ok());
        assert_eq!(config, ScoringConfig::from_toml_str("").unwrap());
    }

    #[test]
    fn classify_boundaries() {
        use ElementLevel::*;
        let bands = LevelBands::default();
        for (p, std) in [
            (0.0, VeryWeak),
            (9.999, VeryWeak),
            (10.0, Weak),
            (19.999, Weak),
            (20.0, Balanced),
            (30.0, Strong),
            (39.999, Strong),
            (40.0, VeryStrong),
            (100.0, VeryStrong),
        ] {
            assert_eq!(std, bands.classify(p), "{p}");
        }
    }

    #[test]
    fn rejects_bad_weights() {
        for doc in [
            "stem_weight = -1.0",
            "stem_weight = nan",
            "branch_weight = inf",
            "stem_weight = 0.0\nday_stem_weight = 0.0\nbranch_weight = 0.0",
        ] {
            assert!(
                matches!(ScoringConfig::from_toml_str(doc), Err(Error::InvalidConfig(_))),
                "{doc}"
            );
        }
    }

    #[test]
    fn rejects_bad_bands() {
        let doc = "[bands]\nweak = 5.0";
        assert!(matches!(
            ScoringConfig::from_toml_str(doc),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        for doc in ["stem_weight = \"one\"", "unknown = 1.0", "stem_weight ="] {
            assert!(
                matches!(ScoringConfig::from_toml_str(doc), Err(Error::ConfigParse(_))),
                "{doc}"
            );
        }
    }
}
