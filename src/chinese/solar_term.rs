//! 簡化節氣表
//!
//! 以固定的公曆月日近似二十四節氣交節日，不計年際差異，誤差可達一兩日。四柱計算不依節氣分年月，
//! 本表僅供參考顯示。

use crate::date::Date;

/// `(月, 日, 節氣序號)`，依公曆日期排序。節氣序號 `1..=24` 分別為立春到大寒，見
/// [`super::fmt::solar_term`]。
const TERMS: [(i32, i32, u32); 24] = [
    (1, 6, 23),
    (1, 20, 24),
    (2, 4, 1),
    (2, 19, 2),
    (3, 6, 3),
    (3, 21, 4),
    (4, 5, 5),
    (4, 20, 6),
    (5, 6, 7),
    (5, 21, 8),
    (6, 6, 9),
    (6, 21, 10),
    (7, 7, 11),
    (7, 23, 12),
    (8, 8, 13),
    (8, 23, 14),
    (9, 8, 15),
    (9, 23, 16),
    (10, 8, 17),
    (10, 24, 18),
    (11, 8, 19),
    (11, 22, 20),
    (12, 7, 21),
    (12, 22, 22),
];

/// 取得給定公曆月日所在的節氣序號，即當日或之前最近一次交節者。一月六日前屬上年冬至。
///
/// # 用例
///
/// ```
/// use sizhu::chinese::{fmt, solar_term};
///
/// assert_eq!("立春", fmt::solar_term(solar_term::approx_for(2, 4)));
/// assert_eq!("大寒", fmt::solar_term(solar_term::approx_for(2, 3)));
/// assert_eq!("冬至", fmt::solar_term(solar_term::approx_for(1, 1)));
/// ```
pub fn approx_for(month: i32, day: i32) -> u32 {
    match TERMS.partition_point(|&(m, d, _)| (m, d) <= (month, day)) {
        0 => TERMS[23].2,
        i => TERMS[i - 1].2,
    }
}

/// 取得給定日期所在節氣，返回 `(節氣序號, 交節後第幾日)`，為 0 則表示當日交節。
///
/// 若交節日超出 [`Date`] 支持範圍則返回 `None`。
///
/// # 用例
///
/// ```
/// use sizhu::Date;
/// use sizhu::chinese::solar_term;
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// assert_eq!(Some((22, 10)), solar_term::approx_for_date(date)); // 冬至過後第 10 天
/// ```
pub fn approx_for_date(date: Date) -> Option<(u32, i64)> {
    let (y, m, d) = date.gregorian();
    let i = TERMS.partition_point(|&(tm, td, _)| (tm, td) <= (m, d));
    let (y, (tm, td, term)) = match i {
        0 => (y - 1, TERMS[23]),
        i => (y, TERMS[i - 1]),
    };
    let start = Date::from_gregorian(y, tm, td)?;
    Some((term, date - start))
}
