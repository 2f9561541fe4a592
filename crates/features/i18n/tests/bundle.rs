use std::sync::Arc;
use tradepost_domain::locale::LocaleTag;
use tradepost_i18n::{BundleBuilder, I18nError, LocalizationRegistry, MemoryMessageSource};

#[test]
fn builder_performs_the_initial_load() {
    let source = MemoryMessageSource::new();
    source.insert("en", "menu.title", "Trading");
    let builder = BundleBuilder::new(Arc::new(source), LocaleTag::parse("en"));

    let bundle = builder.build("menu").expect("build");
    assert_eq!(bundle.name(), "menu");
    assert_eq!(bundle.resolve("menu.title").expect("resolve"), "Trading");
}

#[test]
fn missing_key_without_parent_fails() {
    let builder =
        BundleBuilder::new(Arc::new(MemoryMessageSource::new()), LocaleTag::parse("en"));
    let bundle = builder.build("menu").expect("build");

    let err = bundle.resolve("menu.title").expect_err("resolve should fail");
    assert!(matches!(err, I18nError::MissingMessage { .. }));
    assert!(err.to_string().contains("menu.title"));
}

#[test]
fn local_text_shadows_the_parent() {
    let global_source = MemoryMessageSource::new();
    global_source.insert("en", "trade.accept", "Accept");
    global_source.insert("en", "trade.decline", "Decline");

    let shop_source = MemoryMessageSource::new();
    shop_source.insert("en", "trade.accept", "Deal!");

    let registry = LocalizationRegistry::new();
    registry
        .set_global_builder(BundleBuilder::new(Arc::new(global_source), LocaleTag::parse("en")))
        .expect("builder");
    let shop = registry
        .register("shop", &BundleBuilder::new(Arc::new(shop_source), LocaleTag::parse("en")))
        .expect("register");

    // Local override wins; everything else falls through to the global bundle.
    assert_eq!(shop.resolve("trade.accept").expect("local"), "Deal!");
    assert_eq!(shop.resolve("trade.decline").expect("fallback"), "Decline");
}

#[test]
fn load_replaces_the_table_instead_of_merging() {
    let source = Arc::new(MemoryMessageSource::new());
    source.insert("en", "menu.title", "Trading");
    source.insert("en", "menu.close", "Close");

    let builder =
        BundleBuilder::new(Arc::<MemoryMessageSource>::clone(&source), LocaleTag::parse("en"));
    let bundle = builder.build("menu").expect("build");

    source.remove("en", "menu.close");
    bundle.load().expect("reload");

    assert_eq!(bundle.resolve("menu.title").expect("kept key"), "Trading");
    let err = bundle.resolve("menu.close").expect_err("removed key should be gone");
    assert!(matches!(err, I18nError::MissingMessage { .. }));
}

#[test]
fn set_locale_alone_does_not_reload() {
    let source = Arc::new(MemoryMessageSource::new());
    source.insert("en", "menu.title", "Trading");
    source.insert("de", "menu.title", "Handel");

    let bundle =
        BundleBuilder::new(Arc::<MemoryMessageSource>::clone(&source), LocaleTag::parse("en"))
            .build("menu")
            .expect("build");

    bundle.set_locale(LocaleTag::parse("de"));
    assert_eq!(bundle.locale().to_string(), "de");
    // The table still holds the previously loaded texts.
    assert_eq!(bundle.resolve("menu.title").expect("stale text"), "Trading");

    bundle.load().expect("reload");
    assert_eq!(bundle.resolve("menu.title").expect("fresh text"), "Handel");
}

#[test]
fn load_is_idempotent() {
    let source = Arc::new(MemoryMessageSource::new());
    source.insert("en", "menu.title", "Trading");

    let bundle =
        BundleBuilder::new(Arc::<MemoryMessageSource>::clone(&source), LocaleTag::parse("en"))
            .build("menu")
            .expect("build");

    bundle.load().expect("second load");
    bundle.load().expect("third load");
    assert_eq!(bundle.resolve("menu.title").expect("resolve"), "Trading");
}
