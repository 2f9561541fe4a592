use std::sync::Arc;
use tradepost::{features, init_i18n};
use tradepost_domain::config::TradeSettings;
use tradepost_domain::locale::LocaleTag;
use tradepost_i18n::{I18nError, LocalizationRegistry, MemoryMessageSource};

#[test]
fn init_wires_the_global_bundle() {
    let source = MemoryMessageSource::new();
    source.insert("en", "trade.request", "wants to trade");
    let settings = TradeSettings::with_locale(LocaleTag::parse("en"));

    let registry = LocalizationRegistry::new();
    let global = init_i18n(&registry, Arc::new(source), &settings).expect("init should succeed");
    assert_eq!(global.resolve("trade.request").expect("resolve"), "wants to trade");
    assert_eq!(global.locale().to_string(), "en");
}

#[test]
fn init_twice_fails() {
    let settings = TradeSettings::with_locale(LocaleTag::parse("en"));
    let registry = LocalizationRegistry::new();

    init_i18n(&registry, Arc::new(MemoryMessageSource::new()), &settings)
        .expect("first init should succeed");
    let err = init_i18n(&registry, Arc::new(MemoryMessageSource::new()), &settings)
        .expect_err("second init should fail");
    assert!(matches!(err, I18nError::BuilderAlreadySet { .. }));
}

#[test]
fn feature_registry_reports_i18n() {
    assert!(features::is_enabled("i18n"));
    assert!(!features::is_enabled("economy"));
}
