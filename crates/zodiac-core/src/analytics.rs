use crate::catalog::ZodiacSign;
use crate::i18n::Language;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsEvent {
    PageView { path: String },
    Select { sign: ZodiacSign, lang: Language },
    Share { path: String },
    LanguageSwitch { to: Language },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView { .. } => "page_view",
            AnalyticsEvent::Select { .. } => "select_zodiac",
            AnalyticsEvent::Share { .. } => "share",
            AnalyticsEvent::LanguageSwitch { .. } => "language_switch",
        }
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsEvent::PageView { path } | AnalyticsEvent::Share { path } => {
                write!(f, "{} path={path}", self.name())
            }
            AnalyticsEvent::Select { sign, lang } => {
                write!(f, "{} sign={sign} lang={lang}", self.name())
            }
            AnalyticsEvent::LanguageSwitch { to } => write!(f, "{} to={to}", self.name()),
        }
    }
}

/// Fire-and-forget destination for analytics events.
pub trait AnalyticsSink {
    fn track(&mut self, event: &AnalyticsEvent);
}

/// Writes events to the log.
#[derive(Default, Debug)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&mut self, event: &AnalyticsEvent) {
        log::info!("[analytics] {event}");
    }
}

/// Keeps events in memory. Clones share one log, so a test can hold a
/// handle while the app owns the sink.
#[derive(Clone, Default, Debug)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(AnalyticsEvent::name).collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&mut self, event: &AnalyticsEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Drops everything (analytics disabled).
#[derive(Default, Debug)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn track(&mut self, _event: &AnalyticsEvent) {}
}
