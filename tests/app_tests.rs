// Host-side tests for routing, query configuration and the session driver.

use zodiac_core::analytics::{AnalyticsEvent, NullSink, RecordingSink};
use zodiac_core::route::Resolution;
use zodiac_core::scene::ActiveScene;
use zodiac_core::{
    App, AppConfig, AppEffect, HistoryMode, Language, Page, Route, ZodiacError, ZodiacSign,
};

fn mounted(effects: &[AppEffect]) -> Vec<(Route, HistoryMode)> {
    effects
        .iter()
        .filter_map(|e| match e {
            AppEffect::Mounted { route, history, .. } => Some((*route, *history)),
            _ => None,
        })
        .collect()
}

#[test]
fn paths_round_trip_in_both_languages() {
    let pages = [
        Page::Main,
        Page::Fortune(ZodiacSign::Dragon),
        Page::GroupPhoto,
        Page::ZodiacInfo,
    ];
    for lang in [Language::Ko, Language::En] {
        for page in pages {
            let route = Route::new(lang, page);
            assert_eq!(Route::parse(&route.path()), Ok(route));
        }
    }
    assert_eq!(Route::landing(Language::Ko).path(), "/");
    assert_eq!(Route::landing(Language::En).path(), "/en");
    assert_eq!(
        Route::new(Language::En, Page::Fortune(ZodiacSign::Rat)).path(),
        "/en/fortune/rat"
    );
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(
        Route::parse("/en/group-photo/"),
        Ok(Route::new(Language::En, Page::GroupPhoto))
    );
    assert_eq!(Route::parse("/en/"), Ok(Route::landing(Language::En)));
}

#[test]
fn unknown_sign_redirects_to_landing_of_same_language() {
    assert_eq!(
        Route::resolve("/en/fortune/cat"),
        Resolution::Redirect(Route::landing(Language::En))
    );
    assert_eq!(
        Route::resolve("/nowhere"),
        Resolution::Redirect(Route::landing(Language::Ko))
    );
    assert!(matches!(
        Route::parse("/fortune/cat"),
        Err(ZodiacError::UnknownSign(_))
    ));
}

#[test]
fn en_prefix_needs_a_segment_boundary() {
    assert_eq!(
        Route::resolve("/enx"),
        Resolution::Redirect(Route::landing(Language::Ko))
    );
}

#[test]
fn back_and_language_switch_keep_the_page() {
    let route = Route::new(Language::Ko, Page::Fortune(ZodiacSign::Pig));
    assert_eq!(route.back(), Route::landing(Language::Ko));
    assert_eq!(route.with_language(Language::En).path(), "/en/fortune/pig");
}

#[test]
fn fortune_meta_names_the_sign() {
    let meta = Route::new(Language::En, Page::Fortune(ZodiacSign::Horse)).meta();
    assert_eq!(meta.title, "2026 Horse Fortune");
    assert!(meta.description.starts_with("🐴 Horse 2026 Fortune - "));
    let ko = Route::new(Language::Ko, Page::Fortune(ZodiacSign::Horse)).meta();
    assert_eq!(ko.title, "2026 병오년 말띠 운세");
}

#[test]
fn query_config_parses_flags_and_seed() {
    let cfg = AppConfig::from_query("?debug=1&seed=42&analytics=off").expect("valid");
    assert!(cfg.debug);
    assert_eq!(cfg.layout_seed, Some(42));
    assert!(!cfg.analytics);

    let bare = AppConfig::from_query("debug&utm_source=x").expect("valid");
    assert!(bare.debug);
    assert!(bare.analytics);

    assert_eq!(AppConfig::from_query("").expect("empty"), AppConfig::default());
}

#[test]
fn query_config_rejects_bad_values() {
    assert_eq!(
        AppConfig::from_query("seed=abc"),
        Err(ZodiacError::InvalidConfig {
            key: "seed".into(),
            value: "abc".into()
        })
    );
    assert!(AppConfig::from_query("debug=maybe").is_err());
}

#[test]
fn unknown_start_path_mounts_landing_with_replace() {
    let mut out = Vec::new();
    let app = App::new(
        "/en/fortune/cat",
        AppConfig::default().with_layout_seed(1),
        Box::new(NullSink),
        0.0,
        &mut out,
    );
    assert_eq!(app.route(), Route::landing(Language::En));
    assert_eq!(
        mounted(&out),
        vec![(Route::landing(Language::En), HistoryMode::Replace)]
    );
    assert!(matches!(app.scene(), ActiveScene::Main(_)));
}

#[test]
fn known_start_path_keeps_browser_history() {
    let mut out = Vec::new();
    let app = App::new(
        "/en/group-photo",
        AppConfig::default().with_layout_seed(3),
        Box::new(NullSink),
        0.0,
        &mut out,
    );
    assert_eq!(
        mounted(&out),
        vec![(Route::new(Language::En, Page::GroupPhoto), HistoryMode::Keep)]
    );
    assert!(matches!(app.scene(), ActiveScene::GroupPhoto(_)));
    assert!(app.model_urls().len() >= 12);
}

#[test]
fn navigate_pushes_and_pop_state_keeps() {
    let mut out = Vec::new();
    let mut app = App::new("/", AppConfig::default(), Box::new(NullSink), 0.0, &mut out);
    out.clear();

    let info = Route::new(Language::Ko, Page::ZodiacInfo);
    app.navigate(info, 10.0, &mut out);
    assert_eq!(mounted(&out), vec![(info, HistoryMode::Push)]);
    assert!(matches!(app.scene(), ActiveScene::ZodiacInfo(_)));

    out.clear();
    app.pop_state("/", 20.0, &mut out);
    assert_eq!(mounted(&out), vec![(Route::landing(Language::Ko), HistoryMode::Keep)]);
}

#[test]
fn switching_language_tracks_and_remounts() {
    let sink = RecordingSink::default();
    let mut out = Vec::new();
    let mut app = App::new(
        "/fortune/tiger",
        AppConfig::default(),
        Box::new(sink.clone()),
        0.0,
        &mut out,
    );
    out.clear();
    app.switch_language(5.0, &mut out);

    let en = Route::new(Language::En, Page::Fortune(ZodiacSign::Tiger));
    assert_eq!(app.route(), en);
    assert_eq!(app.context().lang, Language::En);
    assert_eq!(mounted(&out), vec![(en, HistoryMode::Push)]);
    assert_eq!(sink.names(), vec!["page_view", "language_switch", "page_view"]);
    assert_eq!(
        sink.events()[1],
        AnalyticsEvent::LanguageSwitch { to: Language::En }
    );
}

#[test]
fn share_payload_is_tracked() {
    let sink = RecordingSink::default();
    let mut out = Vec::new();
    let mut app = App::new("/en", AppConfig::default(), Box::new(sink.clone()), 0.0, &mut out);
    let payload = app.share_payload("https://example.com");
    assert_eq!(payload.url, "https://example.com/en");
    assert_eq!(sink.names().last(), Some(&"share"));
}

#[test]
fn analytics_off_records_nothing() {
    let sink = RecordingSink::default();
    let mut out = Vec::new();
    let cfg = AppConfig::from_query("analytics=0").expect("valid");
    let mut app = App::new("/", cfg, Box::new(sink.clone()), 0.0, &mut out);
    app.switch_language(1.0, &mut out);
    app.share_payload("https://example.com");
    assert!(sink.events().is_empty());
}

#[test]
fn resize_survives_navigation() {
    let mut out = Vec::new();
    let mut app = App::new("/", AppConfig::default(), Box::new(NullSink), 0.0, &mut out);
    app.resize(800.0, 600.0);
    app.navigate(Route::new(Language::Ko, Page::GroupPhoto), 0.0, &mut out);
    let stage = app.scene().stage();
    assert_eq!((stage.viewport.x, stage.viewport.y), (800.0, 600.0));
    assert!((stage.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
}
