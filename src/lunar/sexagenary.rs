//! Sexagenary (stem-branch) year names and the zodiac animals.

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Year 4 CE was the first year (甲子) of a cycle.
const CYCLE_ORIGIN: i32 = 4;

/// One of the ten heavenly stems (天干)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum HeavenlyStem {
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

/// One of the twelve earthly branches (地支)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum EarthlyBranch {
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

/// Zodiac animal of an earthly branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl HeavenlyStem {
    const ALL: [Self; 10] = [
        Self::Jia,
        Self::Yi,
        Self::Bing,
        Self::Ding,
        Self::Wu,
        Self::Ji,
        Self::Geng,
        Self::Xin,
        Self::Ren,
        Self::Gui,
    ];
    const HANJA: [&'static str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
    const HANGUL: [&'static str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

    pub const fn hanja(self) -> &'static str {
        Self::HANJA[self as usize]
    }

    pub const fn hangul(self) -> &'static str {
        Self::HANGUL[self as usize]
    }
}

impl EarthlyBranch {
    const ALL: [Self; 12] = [
        Self::Zi,
        Self::Chou,
        Self::Yin,
        Self::Mao,
        Self::Chen,
        Self::Si,
        Self::Wu,
        Self::Wei,
        Self::Shen,
        Self::You,
        Self::Xu,
        Self::Hai,
    ];
    const HANJA: [&'static str; 12] = ["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];
    const HANGUL: [&'static str; 12] = ["자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해"];

    pub const fn hanja(self) -> &'static str {
        Self::HANJA[self as usize]
    }

    pub const fn hangul(self) -> &'static str {
        Self::HANGUL[self as usize]
    }

    pub const fn animal(self) -> ZodiacAnimal {
        ZodiacAnimal::ALL[self as usize]
    }
}

impl ZodiacAnimal {
    const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Animal of a year counted the simple way, by its number alone.
    pub fn of_year(year: i32) -> Self {
        SexagenaryYear::from_year(year).branch.animal()
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Rat => "쥐",
            Self::Ox => "소",
            Self::Tiger => "호랑이",
            Self::Rabbit => "토끼",
            Self::Dragon => "용",
            Self::Snake => "뱀",
            Self::Horse => "말",
            Self::Goat => "양",
            Self::Monkey => "원숭이",
            Self::Rooster => "닭",
            Self::Dog => "개",
            Self::Pig => "돼지",
        }
    }
}

/// Stem-branch name of a year, e.g. 甲辰 for 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}{}", "stem.hanja()", "branch.hanja()")]
pub struct SexagenaryYear {
    pub stem:   HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl SexagenaryYear {
    pub fn from_year(year: i32) -> Self {
        let offset = year - CYCLE_ORIGIN;
        Self {
            stem:   HeavenlyStem::ALL[offset.rem_euclid(10) as usize],
            branch: EarthlyBranch::ALL[offset.rem_euclid(12) as usize],
        }
    }

    /// Position in the 60-year cycle, 1 (甲子) through 60 (癸亥)
    pub const fn cycle_number(self) -> u8 {
        let stem = self.stem as u8;
        let branch = self.branch as u8;
        // Chinese remainder over 10 and 12: 6*stem - 5*branch is the unique index mod 60.
        ((6 * stem as i16 - 5 * branch as i16).rem_euclid(60) + 1) as u8
    }

    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    pub const fn animal(self) -> ZodiacAnimal {
        self.branch.animal()
    }
}
