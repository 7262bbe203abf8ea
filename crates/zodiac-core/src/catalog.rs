//! Static per-sign fortune data in Korean and English.

use crate::constants::FORTUNE_YEAR;
use crate::error::{ZodiacError, ZodiacResult};
use crate::i18n::Language;
use std::fmt;
use std::str::FromStr;

mod data;

pub use data::CATALOG;

/// The twelve signs in traditional order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Sheep,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

pub const ZODIAC_ORDER: [ZodiacSign; 12] = [
    ZodiacSign::Rat,
    ZodiacSign::Ox,
    ZodiacSign::Tiger,
    ZodiacSign::Rabbit,
    ZodiacSign::Dragon,
    ZodiacSign::Snake,
    ZodiacSign::Horse,
    ZodiacSign::Sheep,
    ZodiacSign::Monkey,
    ZodiacSign::Rooster,
    ZodiacSign::Dog,
    ZodiacSign::Pig,
];

impl ZodiacSign {
    /// Position in the traditional cycle (rat = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase id used in URLs.
    pub fn id(self) -> &'static str {
        match self {
            ZodiacSign::Rat => "rat",
            ZodiacSign::Ox => "ox",
            ZodiacSign::Tiger => "tiger",
            ZodiacSign::Rabbit => "rabbit",
            ZodiacSign::Dragon => "dragon",
            ZodiacSign::Snake => "snake",
            ZodiacSign::Horse => "horse",
            ZodiacSign::Sheep => "sheep",
            ZodiacSign::Monkey => "monkey",
            ZodiacSign::Rooster => "rooster",
            ZodiacSign::Dog => "dog",
            ZodiacSign::Pig => "pig",
        }
    }

    /// File stem of the model assets (the asset names predate the sign ids).
    pub fn model_stem(self) -> &'static str {
        match self {
            ZodiacSign::Rat => "mouse",
            ZodiacSign::Ox => "cow",
            ZodiacSign::Rooster => "chicken",
            other => other.id(),
        }
    }

    /// Static model shown on the ring, the group photo and the info grid.
    pub fn model_url(self) -> String {
        format!("/models/{}.glb", self.model_stem())
    }

    /// Animated model shown on the fortune page.
    pub fn animated_model_url(self) -> String {
        format!("/models/{}-ani.glb", self.model_stem())
    }

    /// Illustration shown on the fortune loading screen.
    pub fn image_url(self) -> String {
        format!("/12animal/{}.png", self.model_stem())
    }

    pub fn entry(self) -> &'static ZodiacFortune {
        &CATALOG[self.index()]
    }

    pub fn emoji(self) -> &'static str {
        self.entry().emoji
    }

    pub fn name(self, lang: Language) -> &'static str {
        self.entry().name.get(lang)
    }

    /// Birth years of this sign from 1950 up to the fortune year.
    pub fn years(self) -> Vec<u16> {
        (1950..=FORTUNE_YEAR)
            .filter(|y| (y - 4) as usize % 12 == self.index())
            .collect()
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ZodiacSign {
    type Err = ZodiacError;

    fn from_str(s: &str) -> ZodiacResult<Self> {
        ZODIAC_ORDER
            .iter()
            .copied()
            .find(|sign| sign.id() == s)
            .ok_or_else(|| ZodiacError::UnknownSign(s.to_string()))
    }
}

/// A string in both site languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub ko: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(ko: &'static str, en: &'static str) -> Self {
        Self { ko, en }
    }

    #[inline]
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ko => self.ko,
            Language::En => self.en,
        }
    }
}

/// The five phases (오행).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Water,
    Earth,
    Wood,
    Fire,
    Metal,
}

impl Element {
    pub fn hanja(self) -> &'static str {
        match self {
            Element::Water => "水",
            Element::Earth => "土",
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Metal => "金",
        }
    }

    /// CSS class used by the fortune overlay.
    pub fn css_class(self) -> &'static str {
        match self {
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Metal => "metal",
        }
    }
}

/// How a sign's element relates to the year's fire element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// 상생: one element feeds the other.
    Generating,
    /// 상극: one element suppresses the other.
    Overcoming,
    /// 동류: same element.
    Same,
    /// 극대화: same element in the sign's own year.
    Amplified,
}

impl ElementRelation {
    pub fn label(self) -> Localized {
        match self {
            ElementRelation::Generating => Localized::new("상생", "Harmony"),
            ElementRelation::Overcoming => Localized::new("상극", "Conflict"),
            ElementRelation::Same => Localized::new("동류", "Kindred"),
            ElementRelation::Amplified => Localized::new("극대화", "Amplified"),
        }
    }

    #[inline]
    pub fn is_favorable(self) -> bool {
        !matches!(self, ElementRelation::Overcoming)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LuckyColor {
    pub name: Localized,
    pub hex: &'static str,
}

/// One sign's fortune for the year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZodiacFortune {
    pub sign: ZodiacSign,
    pub name: Localized,
    pub emoji: &'static str,
    pub element: Element,
    pub element_relation: ElementRelation,
    pub element_description: Localized,
    pub lucky_colors: &'static [LuckyColor],
    pub lucky_numbers: &'static [u8],
    pub lucky_direction: Localized,
    pub good_match: &'static [ZodiacSign],
    pub bad_match: &'static [ZodiacSign],
    pub advice_dont: Localized,
    pub advice_do: Localized,
    pub quote: [Localized; 2],
}

/// A compatibility entry as displayed: `{emoji}{name}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchEntry {
    pub sign: ZodiacSign,
    pub emoji: &'static str,
    pub name: &'static str,
}

impl ZodiacFortune {
    pub fn good_matches(&self, lang: Language) -> Vec<MatchEntry> {
        to_entries(self.good_match, lang)
    }

    pub fn bad_matches(&self, lang: Language) -> Vec<MatchEntry> {
        to_entries(self.bad_match, lang)
    }
}

fn to_entries(signs: &[ZodiacSign], lang: Language) -> Vec<MatchEntry> {
    signs
        .iter()
        .map(|&sign| MatchEntry {
            sign,
            emoji: sign.emoji(),
            name: sign.name(lang),
        })
        .collect()
}

/// Look up a sign by URL id; `None` means the caller should redirect.
pub fn find(id: &str) -> Option<&'static ZodiacFortune> {
    id.parse::<ZodiacSign>().ok().map(ZodiacSign::entry)
}
