//! Platform-independent core of the zodiac fortune site: catalog and
//! translations, routing, camera animation, layouts, and the page scenes.
//! Everything here runs on the host so it can be tested without a browser.

pub mod analytics;
pub mod app;
pub mod assets;
pub mod bubble;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod controls;
pub mod easing;
pub mod error;
pub mod fortune_card;
pub mod i18n;
pub mod input;
pub mod layout;
pub mod orbit;
pub mod route;
pub mod scene;
pub mod scheduler;
pub mod transition;

pub use app::{App, AppEffect, HistoryMode};
pub use camera::Camera;
pub use catalog::{ZodiacSign, ZODIAC_ORDER};
pub use config::{AppConfig, BubbleConfig, OrbitRigConfig, TransitionConfig};
pub use error::{ZodiacError, ZodiacResult};
pub use i18n::{Key, Language, Translator};
pub use route::{Page, Route};
