//! 干支、五行等的文本形式

use super::{Branch, Element};
use crate::elements::ElementLevel;

/// 天干名，第 0 項為「甲」。
pub const STEMS: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 地支名，第 0 項為「子」。
pub const BRANCHES: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 五行名。
///
/// # 用例
///
/// ```
/// use sizhu::chinese::{self, Element};
///
/// assert_eq!("金", chinese::fmt::element(Element::Metal));
/// ```
pub fn element(e: Element) -> &'static str {
    match e {
        Element::Wood => "木",
        Element::Fire => "火",
        Element::Earth => "土",
        Element::Metal => "金",
        Element::Water => "水",
    }
}

/// 五行強弱等級名。
pub fn level(l: ElementLevel) -> &'static str {
    match l {
        ElementLevel::VeryWeak => "太弱",
        ElementLevel::Weak => "偏弱",
        ElementLevel::Balanced => "適中",
        ElementLevel::Strong => "偏旺",
        ElementLevel::VeryStrong => "太旺",
    }
}

/// 柱名，`0..=3` 分別為年柱、月柱、日柱、時柱，與 [`Bazi::pillars`](crate::Bazi::pillars)
/// 的次序相同。序號超出範圍則返回 `None`。
///
/// # 用例
///
/// ```
/// use sizhu::chinese;
///
/// assert_eq!(Some("日柱"), chinese::fmt::pillar_title(2));
/// assert_eq!(None, chinese::fmt::pillar_title(4));
/// ```
pub fn pillar_title(idx: usize) -> Option<&'static str> {
    const NAMES: &[&str] = &["年柱", "月柱", "日柱", "時柱"];
    NAMES.get(idx).copied()
}

/// 取得時辰名及其對應的鐘點範圍。子時跨越午夜。
///
/// # 用例
///
/// ```
/// use sizhu::chinese::{self, Branch};
///
/// assert_eq!(("子時", "23:00-00:59".to_owned()), chinese::fmt::double_hour(Branch::Zi));
/// assert_eq!(("巳時", "09:00-10:59".to_owned()), chinese::fmt::double_hour(Branch::Si));
/// ```
pub fn double_hour(b: Branch) -> (&'static str, String) {
    const NAMES: &[&str] = &[
        "子時", "丑時", "寅時", "卯時", "辰時", "巳時", "午時", "未時", "申時", "酉時", "戌時",
        "亥時",
    ];
    let start = (2 * b.index() + 23) % 24;
    (
        NAMES[b.index()],
        format!("{:02}:00-{:02}:59", start, (start + 1) % 24),
    )
}

/// 節氣序號轉為名稱。`1..=24` 分別為立春到大寒。
///
/// # 用例
///
/// ```
/// use sizhu::chinese;
///
/// assert_eq!("穀雨", chinese::fmt::solar_term(6));
/// ```
pub fn solar_term(term: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "大寒", "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至",
        "小暑", "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
        "冬至", "小寒",
    ];
    NAMES[term.rem_euclid(24) as usize]
}
