use crate::codec::{self, CodecError};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tradepost_domain::config::{
    ControlMode, InventorySettings, ItemControlSettings, MarkerSettings, RewardTiers, TradeRules,
    TradeSettings,
};
use tradepost_domain::constants::{CONFIG_FILE_STEM, IDENTIFIER_SEPARATOR};
use tradepost_domain::item::ItemIdentifier;
use tradepost_domain::locale::LocaleTag;
use tracing::{debug, info};

/// Custom error type for settings loading.
#[tradepost_derive::tradepost_error]
pub enum SettingsError {
    /// A required key is absent and has no documented default.
    #[error("Config key missing{}: `{key}` is required", format_context(.context))]
    MissingKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An encoded item identifier in the tree failed to decode.
    #[error("Config identifier error{}: {source}", format_context(.context))]
    Codec { source: CodecError, context: Option<Cow<'static, str>> },

    /// The underlying tree rejected a read (missing file, syntax, or type mismatch).
    #[error("Config tree error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Produces a fresh [`TradeSettings`] snapshot from a supplied config tree.
///
/// Absent scalar keys take their documented defaults; only
/// `localization.locale` is required. The call either succeeds as a whole or
/// fails without exposing a partial snapshot.
///
/// # Errors
/// * [`SettingsError::MissingKey`] when the locale key is absent.
/// * [`SettingsError::Codec`] when an encoded identifier fails to decode;
///   the codec error is surfaced unchanged as the source.
/// * [`SettingsError::Config`] when the tree rejects a read (e.g. a type
///   mismatch in a scalar value).
pub fn load_settings(tree: &Config) -> Result<TradeSettings, SettingsError> {
    let markers = MarkerSettings {
        accept: marker(tree, "blocks.accept", "ink_sack:10")?,
        decline: marker(tree, "blocks.decline", "ink_sack:1")?,
        // Historical key spelling, kept for config compatibility.
        separator: marker(tree, "blocks.seperator", "barrier")?,
    };

    let locale_raw: String = read(tree, "localization.locale")?.ok_or_else(|| {
        SettingsError::MissingKey { key: "localization.locale".into(), context: None }
    })?;
    let locale = LocaleTag::parse(&locale_raw);

    let inventory = InventorySettings {
        title: read(tree, "inventory.name")?
            .unwrap_or_else(|| InventorySettings::default().title),
        money: RewardTiers {
            low: read(tree, "inventory.money-value-1")?.unwrap_or(50),
            mid: read(tree, "inventory.money-value-2")?.unwrap_or(100),
            high: read(tree, "inventory.money-value-3")?.unwrap_or(500),
        },
        exp: RewardTiers {
            low: read(tree, "inventory.exp-value-1")?.unwrap_or(5),
            mid: read(tree, "inventory.exp-value-2")?.unwrap_or(50),
            high: read(tree, "inventory.exp-value-3")?.unwrap_or(100),
        },
    };

    let rules = TradeRules {
        max_distance: read(tree, "global.max-distance")?.unwrap_or(15),
        creative_trading: read(tree, "global.creative-trading")?.unwrap_or(true),
        timeout: Duration::from_secs(read(tree, "global.timeout")?.unwrap_or(60)),
        use_xp_trading: read(tree, "global.use-xp-trading")?.unwrap_or(true),
    };

    let mode_token: Option<String> = read(tree, "item-control.control-mode")?;
    let mut items = Vec::new();
    for raw in read::<Vec<String>>(tree, "item-control.item-list")?.unwrap_or_default() {
        items.push(codec::parse(&raw, IDENTIFIER_SEPARATOR)?);
    }
    let item_control = ItemControlSettings {
        mode: ControlMode::from_token(mode_token.as_deref()),
        items,
        lores: read(tree, "item-control.item-lore")?.unwrap_or_default(),
    };

    let settings = TradeSettings { markers, locale, inventory, rules, item_control };
    debug!(locale = %settings.locale, "Trade settings snapshot constructed");

    Ok(settings)
}

/// A reusable settings loader that combines a file-based tree with
/// environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads the tree from a file (e.g. `config.toml`). If no
///    path is provided, it defaults to the `config` file stem in the current
///    working directory.
/// 2. **Environment Overrides**: Overlays values from environment variables
///    prefixed with `TRADEPOST__`. Nested keys use double underscores
///    (e.g. `TRADEPOST__GLOBAL__MAX_DISTANCE` maps to `global.max-distance`).
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The tree content fails the validation performed by [`load_settings`].
pub fn load_settings_file(path: Option<impl AsRef<Path>>) -> Result<TradeSettings, SettingsError> {
    let effective_path =
        path.map_or_else(|| PathBuf::from(CONFIG_FILE_STEM), |p| p.as_ref().to_path_buf());

    let tree = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("TRADEPOST")
                .separator("__")
                .convert_case(config::Case::Kebab),
        )
        .build()
        .context("Failed to build config tree")?;

    info!("Loading trade settings from {}", effective_path.display());

    load_settings(&tree)
}

fn marker(tree: &Config, key: &str, default: &str) -> Result<ItemIdentifier, SettingsError> {
    let raw: String = read(tree, key)?.unwrap_or_else(|| default.to_owned());
    Ok(codec::parse(&raw, IDENTIFIER_SEPARATOR)?)
}

// Distinguishes "key absent" (defaults apply) from "key unreadable"
// (the load fails).
fn read<T: DeserializeOwned>(tree: &Config, key: &str) -> Result<Option<T>, SettingsError> {
    match tree.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(source) => {
            Err(SettingsError::Config { source, context: Some(key.to_owned().into()) })
        }
    }
}
