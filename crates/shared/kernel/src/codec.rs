//! Compact item-identifier codec.
//!
//! Encoded identifiers look like `<category>` or `<category><sep><variant>`,
//! e.g. `ink_sack:10`. Category tokens resolve case-insensitively against the
//! catalog, with underscores optional (`INKSACK` matches `ink_sack`) and a
//! legacy numeric fallback (`351` matches `ink_sack`).

use fxhash::FxHashMap;
use std::borrow::Cow;
use std::sync::LazyLock;
use tradepost_domain::item::{ItemCategory, ItemIdentifier};

/// Errors produced while decoding an encoded item identifier.
#[tradepost_derive::tradepost_error]
pub enum CodecError {
    /// The category token matches no catalog spelling and no legacy code.
    #[error("Invalid item identifier{}: `{token}` is not a known category or legacy code", format_context(.context))]
    InvalidIdentifier { token: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A variant suffix is present but not numeric.
    #[error("Invalid item variant{}: `{token}` is not an integer", format_context(.context))]
    InvalidVariant { token: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

// Normalized-name index over the catalog: lowercase spellings, with and
// without underscores. Built in catalog order, so later entries overwrite
// earlier ones when normalized names collide.
static CATALOG_INDEX: LazyLock<FxHashMap<&'static str, ItemCategory>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for category in ItemCategory::ALL.iter().copied() {
        index.insert(category.name(), category);
    }
    index
});

static STRIPPED_INDEX: LazyLock<FxHashMap<String, ItemCategory>> = LazyLock::new(|| {
    let mut index = FxHashMap::default();
    for category in ItemCategory::ALL.iter().copied() {
        index.insert(category.name().replace('_', ""), category);
    }
    index
});

/// Decodes an encoded identifier with the given separator.
///
/// Components past the variant are ignored, matching how human-edited
/// configs have historically been read.
///
/// # Errors
/// Returns [`CodecError::InvalidIdentifier`] for an unknown category token
/// and [`CodecError::InvalidVariant`] for a non-numeric variant suffix.
pub fn parse(text: &str, separator: &str) -> Result<ItemIdentifier, CodecError> {
    let mut components = text.split(separator);
    let category_token = components.next().unwrap_or_default();
    let variant_token = components.next();

    let category =
        resolve_category(category_token).ok_or_else(|| CodecError::InvalidIdentifier {
            token: category_token.to_owned().into(),
            context: None,
        })?;

    let variant = match variant_token {
        Some(raw) => raw.parse::<i32>().map_err(|_| CodecError::InvalidVariant {
            token: raw.to_owned().into(),
            context: None,
        })?,
        None => 0,
    };

    Ok(ItemIdentifier::new(category, variant))
}

/// Renders an identifier back into its compact encoded form.
///
/// The variant is omitted when it is 0, so canonical spellings round-trip
/// through [`parse`].
#[must_use]
pub fn encode(identifier: &ItemIdentifier, separator: &str) -> String {
    if identifier.variant() == 0 {
        identifier.category().name().to_owned()
    } else {
        format!("{}{}{}", identifier.category().name(), separator, identifier.variant())
    }
}

fn resolve_category(token: &str) -> Option<ItemCategory> {
    let normalized = token.to_ascii_lowercase();
    if let Some(category) = CATALOG_INDEX.get(normalized.as_str()) {
        return Some(*category);
    }
    if let Some(category) = STRIPPED_INDEX.get(normalized.as_str()) {
        return Some(*category);
    }

    // Legacy numeric catalog codes.
    token.parse::<u16>().ok().and_then(ItemCategory::from_legacy_id)
}
