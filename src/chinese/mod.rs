//! Chinese sexagenary primitives
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本模塊定義天干、地支、五行及干支柱。干支均為封閉枚舉，序號一律以歐幾里得餘數歸入
//! `0..10` 或 `0..12`，故任何整數序號皆有對應，不存在查表失敗的情況。

use serde::{Deserialize, Serialize};

pub mod fmt;
pub mod solar_term;

/// 五行
///
/// 順序依相生：木生火，火生土，土生金，金生水。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// 全部五行，依相生之序。
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// 在 [`Element::ALL`] 中的序號。
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// 五行名，如「木」。
    pub fn name(&self) -> &'static str {
        fmt::element(*self)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 天干，序號 0（甲）至 9（癸）。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// 依序號取得天干，序號取模 10，負數亦可。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::chinese::Stem;
    ///
    /// assert_eq!(Stem::Jia, Stem::from_index(0));
    /// assert_eq!(Stem::Gui, Stem::from_index(-1));
    /// assert_eq!(Stem::Bing, Stem::from_index(12));
    /// ```
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// 天干所屬五行，每兩干一行。
    pub fn element(&self) -> Element {
        use Stem::*;
        match self {
            Jia | Yi => Element::Wood,
            Bing | Ding => Element::Fire,
            Wu | Ji => Element::Earth,
            Geng | Xin => Element::Metal,
            Ren | Gui => Element::Water,
        }
    }
    /// 天干名，如「甲」。
    pub fn name(&self) -> &'static str {
        fmt::STEMS[self.index()]
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 地支，序號 0（子）至 11（亥）。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// 依序號取得地支，序號取模 12，負數亦可。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::chinese::Branch;
    ///
    /// assert_eq!(Branch::Zi, Branch::from_index(12));
    /// assert_eq!(Branch::Hai, Branch::from_index(-1));
    /// ```
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// 地支所屬五行：寅卯木，巳午火，申酉金，亥子水，辰戌丑未土。
    pub fn element(&self) -> Element {
        use Branch::*;
        match self {
            Yin | Mao => Element::Wood,
            Si | Wu => Element::Fire,
            Chen | Xu | Chou | Wei => Element::Earth,
            Shen | You => Element::Metal,
            Hai | Zi => Element::Water,
        }
    }
    /// 地支名，如「子」。
    pub fn name(&self) -> &'static str {
        fmt::BRANCHES[self.index()]
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 一柱，即一組天干與地支。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
    /// 依干、支序號取得一柱，兩者各自取模。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::chinese::Pillar;
    ///
    /// assert_eq!("癸亥", Pillar::from_indices(-1, -1).to_string());
    /// ```
    pub fn from_indices(stem: i64, branch: i64) -> Self {
        Self::new(Stem::from_index(stem), Branch::from_index(branch))
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}
