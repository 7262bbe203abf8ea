// Host-side tests for the sign catalog, translations and the fortune card.

use zodiac_core::catalog::{find, ElementRelation, CATALOG};
use zodiac_core::fortune_card::{FortuneCard, SharePayload};
use zodiac_core::i18n::{fill, new_year_messages, Key, Language, Translator};
use zodiac_core::route::{Page, Route};
use zodiac_core::{ZodiacError, ZodiacSign, ZODIAC_ORDER};

#[test]
fn catalog_is_indexed_by_sign() {
    for (i, sign) in ZODIAC_ORDER.iter().enumerate() {
        assert_eq!(sign.index(), i);
        assert_eq!(CATALOG[i].sign, *sign);
        assert_eq!(sign.id().parse::<ZodiacSign>(), Ok(*sign));
    }
}

#[test]
fn unknown_sign_id_is_rejected() {
    assert!(find("cat").is_none());
    assert_eq!(
        "Rat".parse::<ZodiacSign>(),
        Err(ZodiacError::UnknownSign("Rat".into()))
    );
    assert_eq!(find("horse").map(|e| e.sign), Some(ZodiacSign::Horse));
}

#[test]
fn model_urls_use_asset_stems() {
    assert_eq!(ZodiacSign::Rat.model_url(), "/models/mouse.glb");
    assert_eq!(ZodiacSign::Ox.animated_model_url(), "/models/cow-ani.glb");
    assert_eq!(ZodiacSign::Rooster.image_url(), "/12animal/chicken.png");
    assert_eq!(ZodiacSign::Tiger.model_url(), "/models/tiger.glb");
}

#[test]
fn birth_years_step_by_twelve() {
    let years = ZodiacSign::Horse.years();
    assert_eq!(years.first(), Some(&1954));
    assert_eq!(years.last(), Some(&2026));
    assert!(years.windows(2).all(|w| w[1] - w[0] == 12));
    assert_eq!(ZodiacSign::Rat.years().first(), Some(&1960));
    assert_eq!(ZodiacSign::Monkey.years().first(), Some(&1956));
}

#[test]
fn every_entry_is_complete() {
    for entry in CATALOG.iter() {
        assert!(!entry.lucky_colors.is_empty());
        assert!(!entry.lucky_numbers.is_empty());
        assert!(!entry.good_match.is_empty());
        assert!(!entry.bad_match.is_empty());
        for lang in [Language::Ko, Language::En] {
            assert!(!entry.name.get(lang).is_empty());
            assert!(!entry.quote[0].get(lang).is_empty());
        }
    }
}

#[test]
fn fill_replaces_every_occurrence_and_keeps_unknown() {
    assert_eq!(fill("{a} and {a}", &[("a", "x")]), "x and x");
    assert_eq!(fill("{a} {b}", &[("a", "x")]), "x {b}");
    assert_eq!(fill("plain", &[("a", "x")]), "plain");
    assert_eq!(fill("{ {a}}", &[("a", "x")]), "{ x}");
}

#[test]
fn fill_does_not_rescan_substituted_values() {
    assert_eq!(fill("{a}-{b}", &[("a", "{b}"), ("b", "y")]), "{b}-y");
    assert_eq!(fill("{year}년 {sign}", &[("sign", "{year}"), ("year", "2026")]), "2026년 {year}");
}

#[test]
fn translator_fills_named_placeholders() {
    let ko = Translator::new(Language::Ko);
    let en = Translator::new(Language::En);
    assert_eq!(ko.t_with(Key::FortuneTitle, &[("name", "말")]), "2026 병오년 말띠 운세");
    assert_eq!(
        en.t_with(Key::ZodiacBornIn, &[("name", "Horse"), ("years", "2014, 2026")]),
        "Horse: Born in 2014, 2026"
    );
}

#[test]
fn language_tags_round_trip() {
    for lang in [Language::Ko, Language::En] {
        assert_eq!(lang.tag().parse::<Language>(), Ok(lang));
        assert_eq!(lang.other().other(), lang);
    }
    assert!("fr".parse::<Language>().is_err());
    assert_eq!(Language::default(), Language::Ko);
}

#[test]
fn greetings_exist_in_both_languages() {
    assert_eq!(new_year_messages(Language::Ko).len(), 15);
    assert_eq!(new_year_messages(Language::En).len(), 15);
}

#[test]
fn fortune_card_for_horse_in_korean() {
    let card = FortuneCard::build(ZodiacSign::Horse, Language::Ko);
    assert_eq!(card.title, "말띠");
    assert_eq!(card.lucky_numbers, "2, 7");
    assert_eq!(card.element.sign_hanja, "火");
    assert_eq!(card.element.relation, "극대화");
    assert!(card.element.favorable);
    assert_eq!(card.back_path, "/");
    assert_eq!(card.switch_path, "/en/fortune/horse");
    assert_eq!(card.good_matches.len(), 3);
    assert_eq!(card.good_matches[0].sign, ZodiacSign::Tiger);
}

#[test]
fn fortune_card_marks_overcoming_as_caution() {
    let card = FortuneCard::build(ZodiacSign::Rat, Language::En);
    assert_eq!(ZodiacSign::Rat.entry().element_relation, ElementRelation::Overcoming);
    assert!(!card.element.favorable);
    assert_eq!(card.title, "Rat");
    assert_eq!(card.back_path, "/en");
    assert_eq!(card.switch_path, "/fortune/rat");
}

#[test]
fn share_payload_uses_quote_on_fortune_pages() {
    let route = Route::new(Language::En, Page::Fortune(ZodiacSign::Rat));
    let share = SharePayload::for_route(&route, "https://example.com/");
    assert_eq!(share.url, "https://example.com/en/fortune/rat");
    assert_eq!(share.text, "🐭 To those who prepare quietly, opportunity always arrives");

    let main = SharePayload::for_route(&Route::landing(Language::Ko), "https://example.com");
    assert_eq!(main.url, "https://example.com/");
    assert_eq!(main.text, Translator::new(Language::Ko).t(Key::ShareText));
}
