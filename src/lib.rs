//! Chinese four pillars (四柱八字) and their five-element distribution.
//!
//! A civil date and hour is turned into four stem-branch pairs (the year,
//! month, day and hour pillars, see [`bazi`]), which are then scored by the
//! five elements they belong to (see [`elements`]).
//!
//! Pillars use fixed civil year and month boundaries instead of solar terms,
//! which is a simplification of the traditional calendar.
//!
//! # Examples
//!
//! Computing the pillars:
//!
//! ```
//! use sizhu::{BirthTime, compute_pillars};
//!
//! let time = BirthTime::new(1984, 1, 1, 12).unwrap();
//! let bazi = compute_pillars(time);
//!
//! assert_eq!("甲子 乙卯 甲寅 庚午", bazi.to_string());
//! ```
//!
//! Analyzing them:
//!
//! ```
//! use sizhu::{BirthTime, analyze};
//! use sizhu::chinese::Element;
//!
//! let result = analyze(BirthTime::new(1984, 1, 1, 12).unwrap());
//!
//! assert_eq!(Element::Wood, result.bazi.day_master().element());
//! assert_eq!("太旺", result.elements[Element::Wood.index()].level.name());
//! ```
//!
//! Everything here is pure: the same input always gives the same pillars and
//! scores, and all functions may be called from any thread.

pub mod analysis;
pub mod bazi;
pub mod chinese;
pub mod config;
pub mod date;
pub mod elements;
pub mod error;

pub use analysis::{AnalysisResult, analyze};
pub use bazi::{Bazi, compute_pillars};
pub use config::ScoringConfig;
pub use date::{BirthTime, Date, Hour, YearType};
pub use elements::analyze_elements;
pub use error::{Error, Result};
