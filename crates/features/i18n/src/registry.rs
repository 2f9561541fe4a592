use crate::bundle::{BundleBuilder, GLOBAL_BUNDLE_NAME, MessageBundle};
use crate::error::I18nError;
use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tradepost_domain::locale::LocaleTag;
use tracing::{debug, info};

/// Hierarchical registry of message bundles.
///
/// Owns a lazily built global bundle and a named set of bundles parented to
/// it for fallback. Hosts keep one instance for the process; tests construct
/// their own isolated instances.
#[derive(Debug, Default)]
pub struct LocalizationRegistry {
    // Guards the check-and-build sequence so concurrent first callers
    // observe exactly one global build.
    global: Mutex<GlobalSlot>,
    bundles: RwLock<IndexMap<String, Arc<MessageBundle>>>,
}

#[derive(Debug, Default)]
struct GlobalSlot {
    builder: Option<BundleBuilder>,
    bundle: Option<Arc<MessageBundle>>,
}

impl LocalizationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the builder used for the lazy global build. Allowed once per
    /// registry, so components that cached the global bundle never observe a
    /// reconfigured one.
    ///
    /// # Errors
    /// Returns [`I18nError::BuilderAlreadySet`] on a second call.
    pub fn set_global_builder(&self, builder: BundleBuilder) -> Result<(), I18nError> {
        let mut slot = self.global.lock();
        if slot.builder.is_some() {
            return Err(I18nError::BuilderAlreadySet { context: None });
        }
        slot.builder = Some(builder);
        Ok(())
    }

    /// Returns the global bundle, building it from the supplied builder on
    /// first access.
    ///
    /// # Errors
    /// Returns [`I18nError::BuilderUnset`] when no builder was ever
    /// supplied, or the initial load failure from the source.
    pub fn global(&self) -> Result<Arc<MessageBundle>, I18nError> {
        let mut slot = self.global.lock();
        if let Some(bundle) = &slot.bundle {
            return Ok(Arc::clone(bundle));
        }

        let builder =
            slot.builder.as_ref().ok_or(I18nError::BuilderUnset { context: None })?;
        let bundle = builder.build(GLOBAL_BUNDLE_NAME)?;
        info!(locale = %bundle.locale(), "Global message bundle built");
        slot.bundle = Some(Arc::clone(&bundle));

        Ok(bundle)
    }

    /// Builds and registers a bundle under `name`.
    ///
    /// # Errors
    /// Propagates the build failure, or any error from
    /// [`LocalizationRegistry::register_bundle`].
    pub fn register(
        &self,
        name: impl Into<String>,
        builder: &BundleBuilder,
    ) -> Result<Arc<MessageBundle>, I18nError> {
        let name = name.into();
        let bundle = builder.build(name.clone())?;
        self.register_bundle(name, Arc::clone(&bundle))?;
        Ok(bundle)
    }

    /// Registers an existing bundle under `name`, parenting it to the
    /// (lazily built) global bundle for fallback.
    ///
    /// # Errors
    /// Returns [`I18nError::DuplicateBundle`] when `name` is taken, or
    /// [`I18nError::BuilderUnset`] when the global bundle cannot be built.
    pub fn register_bundle(
        &self,
        name: impl Into<String>,
        bundle: Arc<MessageBundle>,
    ) -> Result<(), I18nError> {
        let name = name.into();
        if self.bundles.read().contains_key(&name) {
            return Err(I18nError::DuplicateBundle { name: name.into(), context: None });
        }

        // Resolve the parent before taking the write lock; `global` takes
        // its own lock and must never be waited on while holding `bundles`.
        let global = self.global()?;
        bundle.set_parent(Some(global));

        let mut bundles = self.bundles.write();
        if bundles.contains_key(&name) {
            return Err(I18nError::DuplicateBundle { name: name.into(), context: None });
        }
        debug!(bundle = %name, "Message bundle registered");
        bundles.insert(name, bundle);

        Ok(())
    }

    /// Removes the bundle registered under `name`.
    ///
    /// # Errors
    /// Returns [`I18nError::UnknownBundle`] when `name` is not registered.
    pub fn unregister(&self, name: &str) -> Result<(), I18nError> {
        let removed = self.bundles.write().shift_remove(name);
        match removed {
            Some(_) => {
                debug!(bundle = %name, "Message bundle unregistered");
                Ok(())
            }
            None => Err(I18nError::UnknownBundle { name: name.to_owned().into(), context: None }),
        }
    }

    /// Looks up a registered bundle; absence is not an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<MessageBundle>> {
        self.bundles.read().get(name).cloned()
    }

    /// Applies `locale` to the global bundle (if it was built) and then to
    /// every registered bundle in registration order, reloading each.
    ///
    /// # Errors
    /// Fails fast on the first source failure; bundles earlier in the order
    /// keep the new locale, later ones are untouched.
    pub fn reload_all(&self, locale: &LocaleTag) -> Result<(), I18nError> {
        {
            let slot = self.global.lock();
            if let Some(global) = &slot.bundle {
                global.set_locale(locale.clone());
                global.load()?;
            }
        }

        let bundles = self.bundles.read();
        for bundle in bundles.values() {
            bundle.set_locale(locale.clone());
            bundle.load()?;
        }
        info!(%locale, bundles = bundles.len(), "Locale cascade applied");

        Ok(())
    }
}
