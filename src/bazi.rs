//! Four pillars (八字) of a civil date and hour.
//!
//! Pillars are derived by plain cyclic arithmetic from two anchors: the year
//! 1984 and the day 1900-01-31, both taken as 甲子. Year and month boundaries
//! follow the civil calendar, not solar terms, so a date in January belongs to
//! the same year pillar as the following December.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::chinese::{Branch, Pillar, Stem};
use crate::date::{BirthTime, Date};

/// Year whose pillar is 甲子.
pub const ANCHOR_YEAR: i32 = 1984;
/// JDN of 1900-01-31, the day whose pillar is 甲子.
pub const ANCHOR_DAY_JDN: u32 = 2415051;

/// The four pillars, immutable once computed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Bazi {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Bazi {
    /// Year, month, day and hour pillars in that order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }
    pub fn stems(&self) -> [Stem; 4] {
        self.pillars().map(|p| p.stem)
    }
    pub fn branches(&self) -> [Branch; 4] {
        self.pillars().map(|p| p.branch)
    }
    /// The day stem, which stands for the subject itself.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }
}

impl fmt::Display for Bazi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Computes the four pillars of `time`.
///
/// # Example
///
/// ```
/// use sizhu::{BirthTime, compute_pillars};
///
/// let bazi = compute_pillars(BirthTime::new(1984, 1, 1, 12).unwrap());
/// assert_eq!("甲子 乙卯 甲寅 庚午", bazi.to_string());
/// ```
pub fn compute_pillars(time: BirthTime) -> Bazi {
    let (year, month, _) = time.ymd();
    let year_pillar = year_pillar(year);
    let month_pillar = month_pillar(year_pillar.stem, month);
    let day_pillar = day_pillar(time.date);
    let hour_pillar = hour_pillar(day_pillar.stem, time.hour.slot());

    let bazi = Bazi {
        year: year_pillar,
        month: month_pillar,
        day: day_pillar,
        hour: hour_pillar,
    };
    debug!(%time, %bazi, "computed pillars");
    bazi
}

/// Year pillar, counting from the 甲子 year 1984.
///
/// # Example
///
/// ```
/// use sizhu::bazi::year_pillar;
///
/// assert_eq!("甲子", year_pillar(1984).to_string());
/// assert_eq!("癸亥", year_pillar(1983).to_string());
/// assert_eq!("庚辰", year_pillar(2000).to_string());
/// ```
pub fn year_pillar(year: i32) -> Pillar {
    let offset = i64::from(year) - i64::from(ANCHOR_YEAR);
    Pillar::from_indices(offset, offset)
}

/// Month pillar for civil month `month` (`1..=12`) of a year with stem
/// `year_stem`.
///
/// The branch starts at 卯 for January; the stem advances two per year stem.
pub fn month_pillar(year_stem: Stem, month: i32) -> Pillar {
    let month = i64::from(month);
    Pillar::from_indices(year_stem.index() as i64 * 2 + month, month + 2)
}

/// Day pillar, counting whole days from 1900-01-31.
///
/// # Example
///
/// ```
/// use sizhu::Date;
/// use sizhu::bazi::day_pillar;
///
/// let date = Date::from_gregorian(1900, 1, 31).unwrap();
/// assert_eq!("甲子", day_pillar(date).to_string());
/// let date = Date::from_gregorian(1900, 1, 30).unwrap();
/// assert_eq!("癸亥", day_pillar(date).to_string());
/// ```
pub fn day_pillar(date: Date) -> Pillar {
    let delta = date - Date::from_jdn(ANCHOR_DAY_JDN);
    trace!(date = %date.iso_gregorian(), day_delta = delta);
    Pillar::from_indices(delta, delta)
}

/// Hour pillar for the double hour `slot` of a day with stem `day_stem`.
pub fn hour_pillar(day_stem: Stem, slot: Branch) -> Pillar {
    trace!(slot = slot.index(), "double hour");
    let stem = Stem::from_index(day_stem.index() as i64 * 2 + slot.index() as i64);
    Pillar::new(stem, slot)
}
