//! URL routing: plain paths are Korean, `/en`-prefixed paths are English.

use crate::catalog::ZodiacSign;
use crate::error::{ZodiacError, ZodiacResult};
use crate::i18n::{Key, Language, Translator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Main,
    Fortune(ZodiacSign),
    GroupPhoto,
    ZodiacInfo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub lang: Language,
    pub page: Page,
}

/// Result of resolving a browser path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Show(Route),
    /// The path named a page that cannot be shown (unknown sign or path);
    /// the browser should be sent to this route instead.
    Redirect(Route),
}

impl Route {
    pub fn new(lang: Language, page: Page) -> Self {
        Self { lang, page }
    }

    pub fn landing(lang: Language) -> Self {
        Self::new(lang, Page::Main)
    }

    /// Parse a path exactly; unknown pages are errors.
    pub fn parse(path: &str) -> ZodiacResult<Self> {
        let (lang, rest) = split_language(path);
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        let page = match segments.as_slice() {
            [] => Page::Main,
            ["fortune", sign] => Page::Fortune(sign.parse()?),
            ["group-photo"] => Page::GroupPhoto,
            ["zodiac-info"] => Page::ZodiacInfo,
            _ => return Err(ZodiacError::UnknownRoute(path.to_string())),
        };
        Ok(Self { lang, page })
    }

    /// Parse a path, turning anything unshowable into a redirect to the
    /// landing page of the path's language.
    pub fn resolve(path: &str) -> Resolution {
        match Self::parse(path) {
            Ok(route) => Resolution::Show(route),
            Err(e) => {
                log::warn!("[route] {e}; redirecting to landing page");
                let (lang, _) = split_language(path);
                Resolution::Redirect(Self::landing(lang))
            }
        }
    }

    pub fn path(&self) -> String {
        let base = self.lang.base_path();
        match self.page {
            Page::Main if base.is_empty() => "/".to_string(),
            Page::Main => base.to_string(),
            Page::Fortune(sign) => format!("{base}/fortune/{}", sign.id()),
            Page::GroupPhoto => format!("{base}/group-photo"),
            Page::ZodiacInfo => format!("{base}/zodiac-info"),
        }
    }

    /// Where the page's back button leads.
    pub fn back(&self) -> Self {
        Self::landing(self.lang)
    }

    /// Same page in the other language.
    pub fn with_language(&self, lang: Language) -> Self {
        Self { lang, page: self.page }
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.lang)
    }

    /// Document title and description for this route.
    pub fn meta(&self) -> PageMeta {
        let t = self.translator();
        match self.page {
            Page::Main => PageMeta {
                title: t.t(Key::SiteTitle).to_string(),
                description: t.t(Key::SiteDescription).to_string(),
            },
            Page::Fortune(sign) => {
                let entry = sign.entry();
                let name = sign.name(self.lang);
                let quote = format!(
                    "{} {}",
                    entry.quote[0].get(self.lang),
                    entry.quote[1].get(self.lang)
                );
                PageMeta {
                    title: t.t_with(Key::FortuneTitle, &[("name", name)]),
                    description: t.t_with(
                        Key::FortuneDescription,
                        &[("emoji", entry.emoji), ("name", name), ("quote", &quote)],
                    ),
                }
            }
            Page::GroupPhoto => PageMeta {
                title: t.t(Key::GroupPhotoTitle).to_string(),
                description: t.t(Key::GroupPhotoDescription).to_string(),
            },
            Page::ZodiacInfo => PageMeta {
                title: t.t(Key::ZodiacInfoTitle).to_string(),
                description: t.t(Key::ZodiacInfoDescription).to_string(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

fn split_language(path: &str) -> (Language, &str) {
    match path.strip_prefix("/en") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => (Language::En, rest),
        _ => (Language::Ko, path),
    }
}
