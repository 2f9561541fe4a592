//! Facade crate for `TradePost` features and shared modules.
//! Re-exports domain/kernel primitives and composes the localization feature.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`TradeSettings`] snapshot via `tradepost::kernel::config`.
//! - Call [`init_i18n`] once to wire the global message bundle from a
//!   message source and the configured locale.

pub use tradepost_domain as domain;
pub use tradepost_kernel as kernel;
pub use tradepost_logger as logger;

use std::sync::Arc;
use tradepost_domain::config::TradeSettings;
use tradepost_i18n::{
    BundleBuilder, I18nError, LocalizationRegistry, MessageBundle, MessageSource,
};

/// Feature registry for runtime introspection.
pub mod features {
    pub use tradepost_i18n as i18n;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &["i18n"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Wires the registry's global bundle from a message source and the
/// configured locale, and returns the built bundle.
///
/// # Errors
/// Returns [`I18nError::BuilderAlreadySet`] when the registry was already
/// wired, or propagates the initial load failure from the source.
pub fn init_i18n(
    registry: &LocalizationRegistry,
    source: Arc<dyn MessageSource>,
    settings: &TradeSettings,
) -> Result<Arc<MessageBundle>, I18nError> {
    registry.set_global_builder(BundleBuilder::new(source, settings.locale.clone()))?;
    registry.global()
}
