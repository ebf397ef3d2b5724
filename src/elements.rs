//! Five-element (五行) distribution of a set of pillars.
//!
//! Each of the eight symbols adds its weight to the element it belongs to,
//! see [`ScoringConfig`] for the weights. The resulting shares are graded
//! into [`ElementLevel`]s. Independently, the element of the day master picks
//! one of five fixed pattern descriptions.

use serde::{Deserialize, Serialize};

use crate::bazi::Bazi;
use crate::chinese::{Element, fmt};
use crate::config::ScoringConfig;

/// Relative strength of an element, ordered from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementLevel {
    VeryWeak,
    Weak,
    Balanced,
    Strong,
    VeryStrong,
}

impl ElementLevel {
    /// Level name, e.g. 「適中」.
    pub fn name(&self) -> &'static str {
        fmt::level(*self)
    }
}

impl std::fmt::Display for ElementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Share of one element among the eight symbols.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementAnalysis {
    pub element: Element,
    /// Sum of the weights of the symbols belonging to `element`.
    pub score: f64,
    /// `score` as a percentage of the total of all five scores.
    pub percentage: f64,
    pub level: ElementLevel,
    /// Number of symbols belonging to `element`, regardless of weight.
    pub count: u8,
}

impl ElementAnalysis {
    /// An element held by at least two of the eight symbols.
    pub fn is_prominent(&self) -> bool {
        self.count >= 2
    }

    /// A short reading of the element, depending on whether it is
    /// [prominent](Self::is_prominent).
    pub fn description(&self) -> &'static str {
        let (prominent, weak) = match self.element {
            Element::Wood => ("木氣旺盛，利於生發，創業有利", "木氣偏弱，需要培養，宜穩健發展"),
            Element::Fire => ("火氣旺盛，表現活躍，人緣良好", "火氣偏弱，內向謹慎，需多社交"),
            Element::Earth => ("土氣旺盛，穩重踏實，利於積累", "土氣偏弱，基礎不穩，需要沉澱"),
            Element::Metal => ("金氣旺盛，果斷堅毅，決策有力", "金氣偏弱，意志不堅，需要磨練"),
            Element::Water => ("水氣旺盛，智慧充沛，思維活躍", "水氣偏弱，智慧不足，需要學習"),
        };
        if self.is_prominent() { prominent } else { weak }
    }
}

/// Scores all five elements with the default weights and describes the day
/// master's pattern.
///
/// The analyses are in [`Element::ALL`] order.
///
/// # Example
///
/// ```
/// use sizhu::{BirthTime, analyze_elements, compute_pillars};
/// use sizhu::chinese::Element;
/// use sizhu::elements::ElementLevel;
///
/// let bazi = compute_pillars(BirthTime::new(1984, 1, 1, 12).unwrap());
/// let (analyses, pattern) = analyze_elements(&bazi);
///
/// let wood = &analyses[Element::Wood.index()];
/// assert_eq!(5.0, wood.score);
/// assert_eq!(ElementLevel::VeryStrong, wood.level);
/// assert!(pattern.starts_with("木命"));
/// ```
pub fn analyze_elements(bazi: &Bazi) -> ([ElementAnalysis; 5], &'static str) {
    (
        score_elements(bazi, &ScoringConfig::default()),
        pattern_for(bazi.day_master().element()),
    )
}

/// Scores all five elements of `bazi` with the weights and bands of
/// `config`, in [`Element::ALL`] order.
///
/// Percentages sum to 100 unless every weight in `config` is zero, which a
/// [validated](ScoringConfig::validate) configuration rules out; they are all
/// 0 in that case.
pub fn score_elements(bazi: &Bazi, config: &ScoringConfig) -> [ElementAnalysis; 5] {
    let mut scores = [0.0; 5];
    let mut counts = [0u8; 5];
    let stems = [
        (bazi.year.stem, config.stem_weight),
        (bazi.month.stem, config.stem_weight),
        (bazi.day.stem, config.day_stem_weight),
        (bazi.hour.stem, config.stem_weight),
    ];
    for (stem, weight) in stems {
        let idx = stem.element().index();
        scores[idx] += weight;
        counts[idx] += 1;
    }
    for branch in bazi.branches() {
        let idx = branch.element().index();
        scores[idx] += config.branch_weight;
        counts[idx] += 1;
    }

    let total: f64 = scores.iter().sum();
    Element::ALL.map(|element| {
        let score = scores[element.index()];
        let percentage = if total > 0.0 {
            score / total * 100.0
        } else {
            0.0
        };
        ElementAnalysis {
            element,
            score,
            percentage,
            level: config.bands.classify(percentage),
            count: counts[element.index()],
        }
    })
}

/// Pattern (命格) description for a day master of element `day_master`.
///
/// # Example
///
/// ```
/// use sizhu::chinese::Element;
/// use sizhu::elements::pattern_for;
///
/// assert!(pattern_for(Element::Fire).starts_with("火命："));
/// ```
pub fn pattern_for(day_master: Element) -> &'static str {
    match day_master {
        Element::Wood => "木命：性格堅韌，重情重義，富有理想。適合從事創新、教育、環保等行業。",
        Element::Fire => "火命：性格開朗，熱情活潑，充滿活力。適合從事銷售、表演、餐飲等行業。",
        Element::Earth => "土命：性格穩重，踏實可靠，重視責任。適合從事管理、房地產、農業等行業。",
        Element::Metal => "金命：性格剛毅，意志堅定，重視原則。適合從事金融、法律、軍警等行業。",
        Element::Water => "水命：性格靈活，思維敏捷，適應力強。適合從事科技、藝術、傳媒等行業。",
    }
}

/// One line per element: 「【木】偏強，…」 or 「【木】偏弱，…」.
pub fn summary(analyses: &[ElementAnalysis]) -> String {
    analyses
        .iter()
        .map(|a| {
            format!(
                "【{}】{}，{}",
                a.element,
                if a.is_prominent() { "偏強" } else { "偏弱" },
                a.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese::{Branch, Pillar, Stem};
    use proptest::prelude::*;

    fn bazi(stems: [Stem; 4], branches: [Branch; 4]) -> Bazi {
        let p = |i: usize| Pillar::new(stems[i], branches[i]);
        Bazi {
            year: p(0),
            month: p(1),
            day: p(2),
            hour: p(3),
        }
    }

    fn scores(analyses: &[ElementAnalysis; 5]) -> [f64; 5] {
        analyses.map(|a| a.score)
    }

    #[test]
    fn tied_scores() {
        use ElementLevel::*;
        // 甲子 乙卯 癸丑 戊午, two elements tied at 2.5
        let (analyses, pattern) = analyze_elements(&bazi(
            [Stem::Jia, Stem::Yi, Stem::Gui, Stem::Wu],
            [Branch::Zi, Branch::Mao, Branch::Chou, Branch::Wu],
        ));
        assert_eq!([2.5, 0.5, 1.5, 0.0, 2.5], scores(&analyses));
        assert_eq!(
            [Strong, VeryWeak, Balanced, VeryWeak, Strong],
            analyses.map(|a| a.level)
        );
        assert_eq!([3, 1, 2, 0, 2], analyses.map(|a| a.count));
        assert!((analyses[0].percentage - 250.0 / 7.0).abs() < 1e-9);
        assert_eq!(pattern_for(Element::Water), pattern);
    }

    #[test]
    fn epoch_noon() {
        use ElementLevel::*;
        // 甲子 乙卯 甲寅 庚午, 1984-01-01 12:00
        let (analyses, pattern) = analyze_elements(&bazi(
            [Stem::Jia, Stem::Yi, Stem::Jia, Stem::Geng],
            [Branch::Zi, Branch::Mao, Branch::Yin, Branch::Wu],
        ));
        assert_eq!([5.0, 0.5, 0.0, 1.0, 0.5], scores(&analyses));
        assert_eq!(
            [VeryStrong, VeryWeak, VeryWeak, Weak, VeryWeak],
            analyses.map(|a| a.level)
        );
        assert_eq!([5, 1, 0, 1, 1], analyses.map(|a| a.count));
        assert_eq!(pattern_for(Element::Wood), pattern);
    }

    #[test]
    fn day_stem_counts_double() {
        let branches = [Branch::Chen; 4];
        let (a, _) = analyze_elements(&bazi([Stem::Jia, Stem::Ren, Stem::Geng, Stem::Ren], branches));
        let (b, _) = analyze_elements(&bazi([Stem::Geng, Stem::Ren, Stem::Jia, Stem::Ren], branches));
        assert_eq!([1.0, 0.0, 2.0, 2.0, 2.0], scores(&a));
        assert_eq!([2.0, 0.0, 2.0, 1.0, 2.0], scores(&b));
    }

    #[test]
    fn day_stem_weight_applies_to_day_pillar() {
        let config = ScoringConfig {
            day_stem_weight: 5.0,
            ..Default::default()
        };
        let branches = [Branch::Chen; 4];
        for (day, stems) in [
            (Element::Wood, [Stem::Geng, Stem::Ren, Stem::Jia, Stem::Bing]),
            (Element::Metal, [Stem::Jia, Stem::Ren, Stem::Geng, Stem::Bing]),
            (Element::Fire, [Stem::Jia, Stem::Ren, Stem::Bing, Stem::Geng]),
        ] {
            let analyses = score_elements(&bazi(stems, branches), &config);
            assert_eq!(5.0, analyses[day.index()].score, "{day}");
            assert_eq!(2.0, analyses[Element::Earth.index()].score);
        }
    }

    #[test]
    fn pattern_follows_day_master_only() {
        let branches = [Branch::Zi; 4];
        let (_, p) = analyze_elements(&bazi([Stem::Ren, Stem::Ren, Stem::Bing, Stem::Ren], branches));
        assert_eq!(pattern_for(Element::Fire), p);
    }

    #[test]
    fn custom_weights() {
        let config = ScoringConfig {
            stem_weight: 1.0,
            day_stem_weight: 1.0,
            branch_weight: 1.0,
            ..Default::default()
        };
        let analyses = score_elements(
            &bazi([Stem::Jia; 4], [Branch::Yin, Branch::Mao, Branch::Zi, Branch::Hai]),
            &config,
        );
        assert_eq!(75.0, analyses[Element::Wood.index()].percentage);
        assert_eq!(25.0, analyses[Element::Water.index()].percentage);
        assert_eq!(ElementLevel::VeryStrong, analyses[0].level);
    }

    #[test]
    fn zero_weights_do_not_divide_by_zero() {
        let config = ScoringConfig {
            stem_weight: 0.0,
            day_stem_weight: 0.0,
            branch_weight: 0.0,
            ..Default::default()
        };
        let analyses = score_elements(&bazi([Stem::Jia; 4], [Branch::Zi; 4]), &config);
        assert!(analyses.iter().all(|a| a.percentage == 0.0));
    }

    #[test]
    fn descriptions() {
        let (analyses, _) = analyze_elements(&bazi(
            [Stem::Jia, Stem::Yi, Stem::Gui, Stem::Wu],
            [Branch::Zi, Branch::Mao, Branch::Chou, Branch::Wu],
        ));
        let text = summary(&analyses);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(5, lines.len());
        assert_eq!("【木】偏強，木氣旺盛，利於生發，創業有利", lines[0]);
        assert_eq!("【火】偏弱，火氣偏弱，內向謹慎，需多社交", lines[1]);
        assert_eq!("【金】偏弱，金氣偏弱，意志不堅，需要磨練", lines[3]);
    }

    proptest! {
        #[test]
        fn percentages_sum_to_100(idx in proptest::array::uniform8(0i64..120)) {
            let stems = [0, 1, 2, 3].map(|i| Stem::from_index(idx[i]));
            let branches = [4, 5, 6, 7].map(|i| Branch::from_index(idx[i]));
            let (analyses, _) = analyze_elements(&bazi(stems, branches));
            let sum: f64 = analyses.iter().map(|a| a.percentage).sum();
            prop_assert!((sum - 100.0).abs() < 1e-4);
            prop_assert!(analyses.iter().all(|a| a.percentage >= 0.0));
            prop_assert_eq!(8, analyses.iter().map(|a| a.count).sum::<u8>());
            let total: f64 = analyses.iter().map(|a| a.score).sum();
            prop_assert_eq!(7.0, total);
        }
    }
}
