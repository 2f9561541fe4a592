//! # Localization
//!
//! Message bundles with parent fallback and cascading locale reload for the
//! trading plugin core.
//!
//! ## Overview
//!
//! A [`LocalizationRegistry`] owns one lazily built global [`MessageBundle`]
//! plus any number of named bundles parented to it. Lookups that miss a
//! bundle's own table fall through to the global bundle; switching the
//! active language is a single [`LocalizationRegistry::reload_all`] call
//! that cascades over every bundle in registration order.
//!
//! ## Features
//!
//! * **Lazy global bundle**: built at most once, on first access, behind a
//!   mutual-exclusion lock.
//! * **Parent fallback**: registered bundles delegate missing keys to the
//!   global bundle; misses surface as errors, never as empty text.
//! * **Cascading reload**: one call re-applies a new locale everywhere.
//! * **Pluggable sources**: any [`MessageSource`] supplies per-locale
//!   key/value tables; an in-memory implementation ships for hosts and
//!   tests.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tradepost_domain::locale::LocaleTag;
//! use tradepost_i18n::{BundleBuilder, I18nError, LocalizationRegistry, MemoryMessageSource};
//!
//! # fn main() -> Result<(), I18nError> {
//! let source = MemoryMessageSource::new();
//! source.insert("en", "trade.accept", "Accept");
//! source.insert("de", "trade.accept", "Annehmen");
//! let source = Arc::new(source);
//!
//! let registry = LocalizationRegistry::new();
//! registry.set_global_builder(BundleBuilder::new(source, LocaleTag::parse("en")))?;
//! assert_eq!(registry.global()?.resolve("trade.accept")?, "Accept");
//!
//! registry.reload_all(&LocaleTag::parse("de"))?;
//! assert_eq!(registry.global()?.resolve("trade.accept")?, "Annehmen");
//! # Ok(())
//! # }
//! ```

mod bundle;
mod error;
mod registry;
mod source;

pub use bundle::{BundleBuilder, GLOBAL_BUNDLE_NAME, MessageBundle};
pub use error::{I18nError, I18nErrorExt};
pub use registry::LocalizationRegistry;
pub use source::{MemoryMessageSource, MessageSource};
