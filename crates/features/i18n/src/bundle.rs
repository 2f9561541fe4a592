use crate::error::I18nError;
use crate::source::MessageSource;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tradepost_domain::locale::LocaleTag;
use tracing::debug;

/// Reserved name of the lazily built global bundle.
pub const GLOBAL_BUNDLE_NAME: &str = "global";

/// One named mapping from message key to localized text.
///
/// Bundles are shared via [`Arc`]; locale, parent, and message state live
/// behind an [`RwLock`] so a registry cascade can mutate a shared bundle in
/// place. Concurrent `load` calls on the same bundle from independent
/// threads are the caller's responsibility — cascades are driven by a single
/// coordinating caller.
#[derive(Debug)]
pub struct MessageBundle {
    name: String,
    source: Arc<dyn MessageSource>,
    state: RwLock<BundleState>,
}

#[derive(Debug)]
struct BundleState {
    locale: LocaleTag,
    parent: Option<Arc<MessageBundle>>,
    messages: FxHashMap<String, String>,
}

impl MessageBundle {
    pub(crate) fn new(name: String, source: Arc<dyn MessageSource>, locale: LocaleTag) -> Self {
        Self {
            name,
            source,
            state: RwLock::new(BundleState {
                locale,
                parent: None,
                messages: FxHashMap::default(),
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently active locale.
    #[must_use]
    pub fn locale(&self) -> LocaleTag {
        self.state.read().locale.clone()
    }

    /// The current fallback parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Arc<Self>> {
        self.state.read().parent.clone()
    }

    /// Updates the active locale without reloading; callers typically follow
    /// up with [`MessageBundle::load`].
    pub fn set_locale(&self, locale: LocaleTag) {
        self.state.write().locale = locale;
    }

    /// Replaces the message table by re-reading the backing source for the
    /// current locale. Idempotent; the previous table is never merged into
    /// the new one.
    ///
    /// # Errors
    /// Propagates the source failure; the previous table is kept untouched
    /// in that case.
    pub fn load(&self) -> Result<(), I18nError> {
        let locale = self.locale();
        let messages = self.source.load(&locale)?;
        debug!(bundle = %self.name, %locale, entries = messages.len(), "Message table replaced");
        self.state.write().messages = messages;
        Ok(())
    }

    /// Resolves `key` locally, then through the parent chain.
    ///
    /// # Errors
    /// Returns [`I18nError::MissingMessage`] when no bundle in the chain has
    /// text for `key` — never empty text.
    pub fn resolve(&self, key: &str) -> Result<String, I18nError> {
        let parent = {
            let state = self.state.read();
            if let Some(text) = state.messages.get(key) {
                return Ok(text.clone());
            }
            state.parent.clone()
        };

        match parent {
            Some(parent) => parent.resolve(key),
            None => {
                Err(I18nError::MissingMessage { key: key.to_owned().into(), context: None })
            }
        }
    }

    pub(crate) fn set_parent(&self, parent: Option<Arc<Self>>) {
        self.state.write().parent = parent;
    }
}

/// Builder for message bundles: the backing source plus the initial locale.
#[derive(Debug, Clone)]
pub struct BundleBuilder {
    source: Arc<dyn MessageSource>,
    locale: LocaleTag,
}

impl BundleBuilder {
    #[must_use]
    pub fn new(source: Arc<dyn MessageSource>, locale: LocaleTag) -> Self {
        Self { source, locale }
    }

    /// Builds a bundle under `name` and performs its initial load.
    ///
    /// # Errors
    /// Propagates the initial load failure from the source.
    pub fn build(&self, name: impl Into<String>) -> Result<Arc<MessageBundle>, I18nError> {
        let bundle = Arc::new(MessageBundle::new(
            name.into(),
            Arc::clone(&self.source),
            self.locale.clone(),
        ));
        bundle.load()?;
        Ok(bundle)
    }
}
