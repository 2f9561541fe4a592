use crate::error::I18nError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt::Debug;
use tradepost_domain::locale::LocaleTag;
use tracing::warn;

/// Backing store for localized messages.
///
/// An implementation maps a locale to its complete key→text table; bundles
/// replace their table wholesale with whatever `load` returns.
pub trait MessageSource: Debug + Send + Sync {
    /// Produces the complete message table for `locale`.
    ///
    /// # Errors
    /// Returns an [`I18nError`] when the backing data for `locale` cannot be
    /// read or parsed.
    fn load(&self, locale: &LocaleTag) -> Result<FxHashMap<String, String>, I18nError>;
}

/// In-memory message source keyed by rendered locale tag (e.g. `en_US`).
///
/// Locales with no stored table load as empty rather than failing, so a
/// bundle that overrides nothing for some locale still participates in a
/// reload cascade; lookups on it fall through to its parent.
#[derive(Debug, Default)]
pub struct MemoryMessageSource {
    locales: RwLock<FxHashMap<String, FxHashMap<String, String>>>,
}

impl MemoryMessageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one message under a locale tag.
    pub fn insert(
        &self,
        tag: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.locales.write().entry(tag.into()).or_default().insert(key.into(), text.into());
    }

    /// Removes one message from a locale table; absent entries are ignored.
    pub fn remove(&self, tag: &str, key: &str) {
        if let Some(messages) = self.locales.write().get_mut(tag) {
            messages.remove(key);
        }
    }
}

impl MessageSource for MemoryMessageSource {
    fn load(&self, locale: &LocaleTag) -> Result<FxHashMap<String, String>, I18nError> {
        let locales = self.locales.read();
        match locales.get(&locale.to_string()) {
            Some(messages) => Ok(messages.clone()),
            None => {
                warn!(%locale, "No messages stored for locale; table left empty");
                Ok(FxHashMap::default())
            }
        }
    }
}
