//! A complete analysis snapshot, as kept by callers in their history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bazi::{Bazi, compute_pillars};
use crate::config::ScoringConfig;
use crate::date::BirthTime;
use crate::elements::{self, ElementAnalysis};

/// Pillars, element distribution and pattern of one birth time, stamped with
/// the moment it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub timestamp: DateTime<Utc>,
    pub bazi: Bazi,
    /// One entry per element, in [`Element::ALL`](crate::chinese::Element::ALL)
    /// order.
    pub elements: [ElementAnalysis; 5],
    pub pattern: String,
}

impl AnalysisResult {
    /// Analyzes `bazi` with `config`, stamping the result with `timestamp`.
    pub fn new(bazi: Bazi, config: &ScoringConfig, timestamp: DateTime<Utc>) -> Self {
        let elements = elements::score_elements(&bazi, config);
        let pattern = elements::pattern_for(bazi.day_master().element()).to_owned();
        debug!(%bazi, %timestamp, "analyzed elements");
        Self {
            timestamp,
            bazi,
            elements,
            pattern,
        }
    }

    /// Reading of every element, one line each.
    pub fn summary(&self) -> String {
        elements::summary(&self.elements)
    }

    /// The strongest element; the earlier one in
    /// [`Element::ALL`](crate::chinese::Element::ALL) order on ties.
    pub fn dominant(&self) -> &ElementAnalysis {
        self.elements
            .iter()
            .reduce(|best, a| if a.score > best.score { a } else { best })
            .unwrap_or(&self.elements[0])
    }
}

/// Computes the pillars of `time` and analyzes them with the default
/// weights, stamped with the current time.
///
/// # Example
///
/// ```
/// use sizhu::{BirthTime, analyze};
///
/// let result = analyze(BirthTime::new(1984, 1, 1, 12).unwrap());
///
/// assert_eq!("甲子 乙卯 甲寅 庚午", result.bazi.to_string());
/// let sum: f64 = result.elements.iter().map(|a| a.percentage).sum();
/// assert!((sum - 100.0).abs() < 1e-4);
/// ```
pub fn analyze(time: BirthTime) -> AnalysisResult {
    AnalysisResult::new(compute_pillars(time), &ScoringConfig::default(), Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese::{Branch, Element, Pillar, Stem};
    use chrono::TimeZone;

    fn fixed() -> AnalysisResult {
        let time = BirthTime::new(1984, 1, 1, 12).unwrap();
        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        AnalysisResult::new(compute_pillars(time), &ScoringConfig::default(), stamp)
    }

    #[test]
    fn matches_components() {
        let result = fixed();
        let (elements, pattern) = elements::analyze_elements(&result.bazi);
        assert_eq!(elements, result.elements);
        assert_eq!(pattern, result.pattern);
        assert_eq!(elements::summary(&elements), result.summary());
    }

    #[test]
    fn epoch_noon() {
        let result = fixed();
        assert_eq!("甲子 乙卯 甲寅 庚午", result.bazi.to_string());
        assert_eq!(Element::Wood, result.dominant().element);
        assert_eq!(5.0, result.dominant().score);
        assert!(result.pattern.starts_with("木命"));
    }

    #[test]
    fn dominant_prefers_first_on_tie() {
        // wood and water both score 2.5
        let bazi = Bazi {
            year: Pillar::new(Stem::Jia, Branch::Zi),
            month: Pillar::new(Stem::Yi, Branch::Mao),
            day: Pillar::new(Stem::Gui, Branch::Chou),
            hour: Pillar::new(Stem::Wu, Branch::Wu),
        };
        let result = AnalysisResult::new(bazi, &ScoringConfig::default(), fixed().timestamp);
        assert_eq!(Element::Wood, result.dominant().element);
    }

    #[test]
    fn analyze_stamps_now() {
        let before = Utc::now();
        let result = analyze(BirthTime::new(1990, 6, 15, 8).unwrap());
        assert!(result.timestamp >= before && result.timestamp <= Utc::now());
    }

    #[test]
    fn serializes_for_history() {
        let result = fixed();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!("2024-05-01T08:30:00Z", json["timestamp"]);
        assert_eq!("Jia", json["bazi"]["year"]["stem"]);
        assert_eq!("wood", json["elements"][0]["element"]);
        assert_eq!("very-strong", json["elements"][0]["level"]);
        let back: AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.bazi, back.bazi);
        assert_eq!(result.timestamp, back.timestamp);
    }
}
