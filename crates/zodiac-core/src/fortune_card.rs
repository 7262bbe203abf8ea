//! Text content of the fortune page overlay, resolved for one language.

use crate::catalog::{Element, MatchEntry, ZodiacSign};
use crate::i18n::{Key, Language, Translator};
use crate::route::{Page, Route};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorChip {
    pub name: &'static str,
    pub hex: &'static str,
}

/// `火 → 水 (상극)` style summary of the year/sign element pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRow {
    pub year_label: &'static str,
    pub sign_hanja: &'static str,
    pub sign_label: &'static str,
    pub css_class: &'static str,
    pub relation: &'static str,
    pub favorable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FortuneCard {
    pub sign: ZodiacSign,
    pub title: String,
    pub emoji: &'static str,
    pub element: ElementRow,
    pub element_description: &'static str,
    pub lucky_colors: Vec<ColorChip>,
    pub lucky_numbers: String,
    pub lucky_direction: &'static str,
    pub good_matches: Vec<MatchEntry>,
    pub bad_matches: Vec<MatchEntry>,
    pub advice_dont: &'static str,
    pub advice_do: &'static str,
    pub quote: [&'static str; 2],
    pub back_path: String,
    pub switch_path: String,
}

pub fn element_label(t: &Translator, element: Element) -> &'static str {
    t.t(match element {
        Element::Water => Key::ElementWater,
        Element::Earth => Key::ElementEarth,
        Element::Wood => Key::ElementWood,
        Element::Fire => Key::ElementFire,
        Element::Metal => Key::ElementMetal,
    })
}

impl FortuneCard {
    pub fn build(sign: ZodiacSign, lang: Language) -> Self {
        let t = Translator::new(lang);
        let entry = sign.entry();
        let route = Route::new(lang, Page::Fortune(sign));
        let numbers: Vec<String> = entry.lucky_numbers.iter().map(u8::to_string).collect();
        Self {
            sign,
            title: format!("{}{}", entry.name.get(lang), t.t(Key::ZodiacSuffix)),
            emoji: entry.emoji,
            element: ElementRow {
                year_label: t.t(Key::YearFire),
                sign_hanja: entry.element.hanja(),
                sign_label: element_label(&t, entry.element),
                css_class: entry.element.css_class(),
                relation: entry.element_relation.label().get(lang),
                favorable: entry.element_relation.is_favorable(),
            },
            element_description: entry.element_description.get(lang),
            lucky_colors: entry
                .lucky_colors
                .iter()
                .map(|c| ColorChip {
                    name: c.name.get(lang),
                    hex: c.hex,
                })
                .collect(),
            lucky_numbers: numbers.join(", "),
            lucky_direction: entry.lucky_direction.get(lang),
            good_matches: entry.good_matches(lang),
            bad_matches: entry.bad_matches(lang),
            advice_dont: entry.advice_dont.get(lang),
            advice_do: entry.advice_do.get(lang),
            quote: [entry.quote[0].get(lang), entry.quote[1].get(lang)],
            back_path: route.back().path(),
            switch_path: route.with_language(lang.other()).path(),
        }
    }
}

/// What the share button hands to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_route(route: &Route, origin: &str) -> Self {
        let t = route.translator();
        let text = match route.page {
            Page::Fortune(sign) => {
                let entry = sign.entry();
                format!(
                    "{} {} {}",
                    entry.emoji,
                    entry.quote[0].get(route.lang),
                    entry.quote[1].get(route.lang)
                )
            }
            _ => t.t(Key::ShareText).to_string(),
        };
        Self {
            title: t.t(Key::ShareTitle).to_string(),
            text,
            url: format!("{}{}", origin.trim_end_matches('/'), route.path()),
        }
    }
}
