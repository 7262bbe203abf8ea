//! Localized strings for both site languages.
//!
//! Templates may contain `{name}`-style placeholders which [`Translator::t_with`]
//! fills in. Some English templates carry `<br />` because the overlay renders
//! them as HTML.

use crate::error::{ZodiacError, ZodiacResult};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// Route prefix: `""` for Korean, `"/en"` for English.
    pub fn base_path(self) -> &'static str {
        match self {
            Language::Ko => "",
            Language::En => "/en",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ZodiacError;

    fn from_str(s: &str) -> ZodiacResult<Self> {
        match s {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            other => Err(ZodiacError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Every translatable string on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Loading screens
    LoadingMainTitle,
    LoadingMainSubtitle,
    LoadingFortuneTitle,
    LoadingFortuneSubtitle,
    // Main page
    SiteTitle,
    SiteDescription,
    MainTitle,
    MainSubtitle,
    GroupPhotoLink,
    ZodiacInfoLink,
    HorseBubble1,
    HorseBubble2,
    SelectZodiac,
    PleaseWait,
    ControlHintMobile,
    ControlHintDesktop,
    ShareTitle,
    ShareText,
    LinkCopied,
    LanguageSwitch,
    // Fortune page
    FortuneTitle,
    FortuneDescription,
    ZodiacSuffix,
    YearFire,
    ElementEarth,
    ElementWater,
    ElementWood,
    ElementMetal,
    ElementFire,
    LuckyColor,
    LuckyNumber,
    LuckyDirection,
    GoodMatch,
    BadMatch,
    AdviceDont,
    AdviceDo,
    OtherZodiac,
    DebugMode,
    // Group photo page
    GroupPhotoTitle,
    GroupPhotoDescription,
    LoadingTitle,
    LoadingSubtitle,
    HeaderYear,
    HeaderRedHorse,
    FooterNewYear,
    FooterBlessing,
    FooterWishes,
    Back,
    // Zodiac info page
    ZodiacInfoTitle,
    ZodiacInfoDescription,
    ZodiacInfoHint,
    ZodiacRedHorseHint,
    ZodiacFortuneExplain,
    ZodiacBornIn,
}

impl Key {
    /// `(korean, english)` template pair.
    fn templates(self) -> (&'static str, &'static str) {
        use Key::*;
        match self {
            LoadingMainTitle => ("2026 병오년", "2026 Bingwu Year"),
            LoadingMainSubtitle => (
                "붉은 말의 해, 당신의 운세는?",
                "Year of the Red Horse,<br />what's your fortune?",
            ),
            LoadingFortuneTitle => ("{name}띠", "{name}"),
            LoadingFortuneSubtitle => ("2026년 운세를 불러오는 중...", "Loading your 2026 fortune..."),
            SiteTitle => ("2026 병오년 운세 - 붉은 말의 해", "2026 Year of the Red Horse - Fortune"),
            SiteDescription => (
                "2026년 병오년 붉은 말의 해! 12간지 띠별 신년운세를 확인하세요.",
                "2026 is the Year of the Red Fire Horse! Check your Chinese zodiac fortune.",
            ),
            MainTitle => ("2026년 운세", "2026 Fortune"),
            MainSubtitle => ("丙午年(붉은 말의해)", "Year of the Red Horse"),
            GroupPhotoLink => ("축하메세지 보기", "View Greetings"),
            ZodiacInfoLink => ("내 띠 찾기", "Find My Sign"),
            HorseBubble1 => ("2026년은 붉은 말의 해!", "2026 is the Year of the Red Horse!"),
            HorseBubble2 => (
                "주변 동물을 선택하면<br />운세를 볼 수 있어요",
                "Select an animal to<br />see your fortune",
            ),
            SelectZodiac => (
                "띠를 선택해서 신년운세를 확인하세요",
                "Select your zodiac sign to see your fortune",
            ),
            PleaseWait => ("잠시만 기다려주세요...", "Please wait..."),
            ControlHintMobile => (
                "한 손가락 회전 · 두 손가락 확대/축소",
                "One finger to rotate · Two fingers to zoom",
            ),
            ControlHintDesktop => (
                "좌클릭 회전 · 스크롤 확대/축소",
                "Left click to rotate · Scroll to zoom",
            ),
            ShareTitle => ("2026 병오년 운세", "2026 Year of the Horse Fortune"),
            ShareText => (
                "2026년 붉은 말의 해! 나의 신년운세를 확인해보세요!",
                "2026 is the Year of the Red Horse! Check your New Year fortune!",
            ),
            LinkCopied => ("링크가 복사되었습니다!", "Link copied!"),
            LanguageSwitch => ("English", "한국어"),
            FortuneTitle => ("2026 병오년 {name}띠 운세", "2026 {name} Fortune"),
            FortuneDescription => (
                "{emoji} {name}띠 2026년 신년운세 - {quote}",
                "{emoji} {name} 2026 Fortune - {quote}",
            ),
            ZodiacSuffix => ("띠", ""),
            YearFire => ("火(불)", "Fire"),
            ElementEarth => ("흙", "Earth"),
            ElementWater => ("물", "Water"),
            ElementWood => ("나무", "Wood"),
            ElementMetal => ("쇠", "Metal"),
            ElementFire => ("불", "Fire"),
            LuckyColor => ("행운색", "Lucky Color"),
            LuckyNumber => ("행운숫자", "Lucky Number"),
            LuckyDirection => ("행운방향", "Lucky Direction"),
            GoodMatch => ("좋은궁합", "Good Match"),
            BadMatch => ("주의", "Caution"),
            AdviceDont => ("조심할것:", "Avoid:"),
            AdviceDo => ("해야할것:", "Focus:"),
            OtherZodiac => ("다른띠보기", "Other Signs"),
            DebugMode => ("디버그 모드", "DEBUG MODE"),
            GroupPhotoTitle => (
                "2026 병오년 새해 인사 - 12간지 축하 메시지",
                "2026 New Year Greetings - Chinese Zodiac",
            ),
            GroupPhotoDescription => (
                "2026년 병오년 붉은 말의 해! 12간지 동물들이 전하는 새해 축하 메시지를 확인하세요.",
                "2026 is the Year of the Red Horse! Check out the New Year greetings from all 12 zodiac animals.",
            ),
            LoadingTitle => ("새해 인사", "New Year Greetings"),
            LoadingSubtitle => ("모두 새해 福 많이 받으세요!", "Wishing you happiness and prosperity!"),
            HeaderYear => ("丙午年", ""),
            HeaderRedHorse => ("2026 붉은 말의 해", "2026 Year of<br />the Red Horse"),
            FooterNewYear => ("모두 새해", "Happy New Year"),
            FooterBlessing => ("福", "Fortune"),
            FooterWishes => ("많이 받으세요", "to All"),
            Back => ("돌아가기", "Back"),
            ZodiacInfoTitle => ("나는 무슨 띠일까?", "What's My Zodiac Sign?"),
            ZodiacInfoDescription => (
                "12간지 동물을 눌러 태어난 해를 확인하세요.",
                "Tap a zodiac animal to see its birth years.",
            ),
            ZodiacInfoHint => ("동물을 눌러보세요", "Tap an animal"),
            ZodiacRedHorseHint => (
                "뒤에 있는 붉은 말을 눌러보세요",
                "Tap the red horse in the back",
            ),
            ZodiacFortuneExplain => (
                "띠는 태어난 해로 정해져요.<br />내 띠를 찾아 2026년 운세를 확인하세요!",
                "Your sign is set by your birth year.<br />Find yours and check your 2026 fortune!",
            ),
            ZodiacBornIn => ("{name}띠: {years}년생", "{name}: Born in {years}"),
        }
    }

    pub fn template(self, lang: Language) -> &'static str {
        let (ko, en) = self.templates();
        match lang {
            Language::Ko => ko,
            Language::En => en,
        }
    }
}

/// Replace every `{name}` occurrence for each `(name, value)` pair.
///
/// One left-to-right pass over the template: substituted values are never
/// rescanned. Placeholders without a matching pair are left verbatim.
pub fn fill(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            replacements
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                text.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                text.push('{');
                rest = after;
            }
        }
    }
    text.push_str(rest);
    text
}

/// Translation lookup bound to one language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    #[inline]
    pub fn t(&self, key: Key) -> &'static str {
        key.template(self.lang)
    }

    pub fn t_with(&self, key: Key, replacements: &[(&str, &str)]) -> String {
        fill(self.t(key), replacements)
    }
}

/// New Year greetings used by the group photo bubbles.
pub fn new_year_messages(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Ko => &NEW_YEAR_KO,
        Language::En => &NEW_YEAR_EN,
    }
}

const NEW_YEAR_KO: [&str; 15] = [
    "새해 복 많이 받으세요!",
    "2026년 건강하고 행복하세요!",
    "올해는 좋은 일만 가득하길!",
    "만사형통하세요!",
    "부자 되세요!",
    "사랑 가득한 한 해 되세요!",
    "꿈꾸는 모든 것 이루세요!",
    "웃음 가득한 2026년!",
    "행운이 함께하길!",
    "늘 건강하세요!",
    "소원성취하세요!",
    "좋은 인연 가득하길!",
    "매일 행복하세요!",
    "승승장구하세요!",
    "대박나세요!",
];

const NEW_YEAR_EN: [&str; 15] = [
    "Happy New Year!",
    "Wishing you health and happiness in 2026!",
    "May good things fill your year!",
    "May all your wishes come true!",
    "Prosperity to you!",
    "A year full of love!",
    "May all your dreams come true!",
    "A joyful 2026!",
    "Good luck be with you!",
    "Stay healthy always!",
    "May your wishes come true!",
    "Great connections await!",
    "Be happy every day!",
    "Success in all you do!",
    "Jackpot year!",
];
