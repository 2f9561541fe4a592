use std::sync::Arc;
use tradepost_domain::locale::LocaleTag;
use tradepost_i18n::{
    BundleBuilder, GLOBAL_BUNDLE_NAME, I18nError, LocalizationRegistry, MemoryMessageSource,
};

fn sample_source() -> Arc<MemoryMessageSource> {
    let source = MemoryMessageSource::new();
    source.insert("en", "trade.accept", "Accept");
    source.insert("en", "trade.decline", "Decline");
    source.insert("de", "trade.accept", "Annehmen");
    source.insert("de", "trade.decline", "Ablehnen");
    Arc::new(source)
}

fn builder(source: &Arc<MemoryMessageSource>, tag: &str) -> BundleBuilder {
    BundleBuilder::new(Arc::<MemoryMessageSource>::clone(source), LocaleTag::parse(tag))
}

#[test]
fn global_before_builder_fails() {
    let registry = LocalizationRegistry::new();
    let err = registry.global().expect_err("global should fail");
    assert!(matches!(err, I18nError::BuilderUnset { .. }));
}

#[test]
fn second_global_builder_fails() {
    let source = sample_source();
    let registry = LocalizationRegistry::new();

    registry.set_global_builder(builder(&source, "en")).expect("first builder");
    let err = registry
        .set_global_builder(builder(&source, "de"))
        .expect_err("second builder should fail");
    assert!(matches!(err, I18nError::BuilderAlreadySet { .. }));
}

#[test]
fn global_is_built_once_and_cached() {
    let source = sample_source();
    let registry = LocalizationRegistry::new();
    registry.set_global_builder(builder(&source, "en")).expect("builder");

    let first = registry.global().expect("global");
    let second = registry.global().expect("global again");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.name(), GLOBAL_BUNDLE_NAME);
}

#[test]
fn concurrent_first_access_builds_one_instance() {
    let source = sample_source();
    let registry = Arc::new(LocalizationRegistry::new());
    registry.set_global_builder(builder(&source, "en")).expect("builder");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.global().expect("global"))
        })
        .collect();

    let bundles: Vec<_> = handles.into_iter().map(|h| h.join().expect("thread")).collect();
    for bundle in &bundles[1..] {
        assert!(Arc::ptr_eq(&bundles[0], bundle));
    }
}

#[test]
fn register_parents_to_the_global_bundle() {
    let source = sample_source();
    let registry = LocalizationRegistry::new();
    registry.set_global_builder(builder(&source, "en")).expect("builder");

    // The shop bundle overrides nothing; its own table is empty.
    let shop_source = Arc::new(MemoryMessageSource::new());
    let shop = registry
        .register("shop", &BundleBuilder::new(shop_source, LocaleTag::parse("en")))
        .expect("register");

    let parent = shop.parent().expect("shop should have a parent");
    assert_eq!(parent.name(), GLOBAL_BUNDLE_NAME);

    // Fallback: the key lives only in the global bundle.
    let found = registry.get("shop").expect("shop should be registered");
    assert_eq!(found.resolve("trade.accept").expect("fallback"), "Accept");
}

#[test]
fn register_without_builder_fails() {
    let registry = LocalizationRegistry::new();
    let shop_source = Arc::new(MemoryMessageSource::new());
    let err = registry
        .register("shop", &BundleBuilder::new(shop_source, LocaleTag::parse("en")))
        .expect_err("register should fail");
    assert!(matches!(err, I18nError::BuilderUnset { .. }));
}

#[test]
fn duplicate_registration_fails() {
    let source = sample_source();
    let registry = LocalizationRegistry::new();
    registry.set_global_builder(builder(&source, "en")).expect("builder");

    registry.register("shop", &builder(&source, "en")).expect("first register");
    let err =
        registry.register("shop", &builder(&source, "en")).expect_err("duplicate should fail");
    assert!(matches!(err, I18nError::DuplicateBundle { .. }));
}

#[test]
fn unregister_unknown_name_fails() {
    let registry = LocalizationRegistry::new();
    let err = registry.unregister("ghost").expect_err("unregister should fail");
    assert!(matches!(err, I18nError::UnknownBundle { .. }));
}

#[test]
fn unregister_then_lookup_returns_none() {
    let source = sample_source();
    let registry = LocalizationRegistry::new();
    registry.set_global_builder(builder(&source, "en")).expect("builder");

    registry.register("shop", &builder(&source, "en")).expect("register");
    registry.unregister("shop").expect("unregister");
    assert!(registry.get("shop").is_none());

    // The name is free again.
    registry.register("shop", &builder(&source, "en")).expect("re-register");
}

#[test]
fn lookup_of_unknown_name_is_not_an_error() {
    let registry = LocalizationRegistry::new();
    assert!(registry.get("nope").is_none());
}

#[test]
fn reload_all_cascades_the_new_locale() {
    let source = sample_source();
    let registry = LocalizationRegistry::new();
    registry.set_global_builder(builder(&source, "en")).expect("builder");

    let shop_source = Arc::new(MemoryMessageSource::new());
    let shop = registry
        .register("shop", &BundleBuilder::new(shop_source, LocaleTag::parse("en")))
        .expect("register");
    assert_eq!(shop.resolve("trade.accept").expect("before cascade"), "Accept");

    registry.reload_all(&LocaleTag::parse("de")).expect("cascade");

    let global = registry.global().expect("global");
    assert_eq!(global.locale().to_string(), "de");
    assert_eq!(shop.locale().to_string(), "de");
    // The fallback now reflects the reloaded global parent.
    assert_eq!(shop.resolve("trade.accept").expect("after cascade"), "Annehmen");
}

#[test]
fn reload_all_before_global_build_skips_the_global_bundle() {
    let source = sample_source();
    let registry = LocalizationRegistry::new();
    registry.set_global_builder(builder(&source, "en")).expect("builder");

    // No `global()` call yet: the cascade has nothing to do and must not
    // trigger the lazy build.
    registry.reload_all(&LocaleTag::parse("de")).expect("cascade");

    let global = registry.global().expect("global");
    assert_eq!(global.locale().to_string(), "en");
}
