//! Civil dates and times of day.

use std::fmt;
use std::ops::Sub;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::chinese::Branch;
use crate::error::{Error, Result};

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a proleptic Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. Out-of-range months and days are not checked and
    /// roll over into neighbouring months, see [`BirthTime::new`] for a
    /// validating constructor.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        // Keeps `gregorian` and day deltas within `i32` years.
        if !(0..=i64::from(i32::MAX)).contains(&jdn) {
            return None;
        }
        u32::try_from(jdn).map(Self::from_jdn).ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_gregorian(1900, 1, 31).unwrap();
    /// assert_eq!("1900-01-31", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
}

/// Whole civil days from `rhs` to `self`.
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        i64::from(self.jdn) - i64::from(rhs.jdn)
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

fn days_in_month(month: i32, year_type: YearType) -> i32 {
    match month {
        2 => 28 + year_type.is_leap() as i32,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Hour of day, always in `0..=23`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Hour(u8);

impl Hour {
    /// Checks that `hour` is in `0..=23`.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Hour;
    ///
    /// assert_eq!(23, Hour::new(23).unwrap().get());
    /// assert!(Hour::new(24).is_err());
    /// ```
    pub fn new(hour: i64) -> Result<Self> {
        u8::try_from(hour)
            .ok()
            .filter(|h| *h < 24)
            .map(Self)
            .ok_or(Error::HourOutOfRange(hour))
    }
    /// Normalizes any hour count modulo 24, e.g. `24` is midnight and `-1`
    /// is 23:00.
    pub fn wrapping(hour: i64) -> Self {
        Self(hour.rem_euclid(24) as u8)
    }
    pub fn get(&self) -> u8 {
        self.0
    }
    /// The double hour (時辰) containing this hour.
    ///
    /// 23:00 already belongs to 子, the first double hour of the next day's
    /// cycle.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Hour;
    /// use sizhu::chinese::Branch;
    ///
    /// assert_eq!(Branch::Zi, Hour::new(23).unwrap().slot());
    /// assert_eq!(Branch::Zi, Hour::new(0).unwrap().slot());
    /// assert_eq!(Branch::Wu, Hour::new(12).unwrap().slot());
    /// ```
    pub fn slot(&self) -> Branch {
        Branch::from_index((i64::from(self.0) + 1) / 2)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// A civil date with an hour of day, the input of the pillar computation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BirthTime {
    pub date: Date,
    pub hour: Hour,
}

impl BirthTime {
    /// Creates a `BirthTime` from proleptic Gregorian components.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::BirthTime;
    ///
    /// let time = BirthTime::new(1984, 1, 1, 12).unwrap();
    /// assert_eq!((1984, 1, 1), time.date.gregorian());
    ///
    /// assert!(BirthTime::new(2023, 2, 29, 0).is_err());
    /// assert!(BirthTime::new(2023, 1, 1, 24).is_err());
    /// ```
    pub fn new(year: i32, month: i32, day: i32, hour: i64) -> Result<Self> {
        let hour = Hour::new(hour)?;
        if !(1..=12).contains(&month)
            || !(1..=days_in_month(month, YearType::from_gregorian(year))).contains(&day)
        {
            return Err(Error::InvalidDate { year, month, day });
        }
        let date = Date::from_gregorian(year, month, day).ok_or(Error::DateOutOfRange)?;
        Ok(Self { date, hour })
    }

    /// Returns `(year, month, day)` in the Gregorian calendar.
    pub fn ymd(&self) -> (i32, i32, i32) {
        self.date.gregorian()
    }
}

impl fmt::Display for BirthTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date.iso_gregorian(), self.hour)
    }
}

/// Minutes and seconds are dropped.
impl TryFrom<NaiveDateTime> for BirthTime {
    type Error = Error;

    fn try_from(time: NaiveDateTime) -> Result<Self> {
        Self::new(
            time.year(),
            time.month() as i32,
            time.day() as i32,
            i64::from(time.hour()),
        )
    }
}
