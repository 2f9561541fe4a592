use crate::constants::{DEFAULT_INVENTORY_TITLE, NO_MAX_DISTANCE, PLAYER_NAME_PLACEHOLDER};
use crate::item::{ItemCategory, ItemIdentifier};
use crate::locale::LocaleTag;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable settings snapshot produced by a single load.
///
/// A reload constructs a fresh snapshot; readers holding a previous one keep
/// a consistent, stale-but-valid view until they fetch the new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSettings {
    pub markers: MarkerSettings,
    pub locale: LocaleTag,
    pub inventory: InventorySettings,
    pub rules: TradeRules,
    pub item_control: ItemControlSettings,
}

/// The three marker items shown in the trade inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSettings {
    pub accept: ItemIdentifier,
    pub decline: ItemIdentifier,
    pub separator: ItemIdentifier,
}

/// Inventory title template and reward tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySettings {
    pub title: String,
    pub money: RewardTiers,
    pub exp: RewardTiers,
}

/// Low/mid/high reward amounts for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTiers {
    pub low: i32,
    pub mid: i32,
    pub high: i32,
}

/// Global trading rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRules {
    /// Maximum distance between trading partners; [`NO_MAX_DISTANCE`] means unlimited.
    pub max_distance: i32,
    pub creative_trading: bool,
    pub timeout: Duration,
    pub use_xp_trading: bool,
}

/// Whether the controlled item list is an allow list or a deny list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlMode {
    AllowList,
    #[default]
    DenyList,
}

impl ControlMode {
    /// Resolves a config token; absent or unrecognized tokens fall back to
    /// the deny list rather than failing the load.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(t) if t.eq_ignore_ascii_case("allow-list") => Self::AllowList,
            Some(t) if t.eq_ignore_ascii_case("deny-list") => Self::DenyList,
            _ => Self::DenyList,
        }
    }
}

/// Item-control mode plus the controlled identifiers and lore filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemControlSettings {
    pub mode: ControlMode,
    pub items: Vec<ItemIdentifier>,
    pub lores: Vec<String>,
}

impl TradeSettings {
    /// Baseline settings for a locale; every other field takes its
    /// documented default.
    #[must_use]
    pub fn with_locale(locale: LocaleTag) -> Self {
        Self {
            markers: MarkerSettings::default(),
            locale,
            inventory: InventorySettings::default(),
            rules: TradeRules::default(),
            item_control: ItemControlSettings::default(),
        }
    }

    /// Renders the inventory title with the player-name placeholder
    /// substituted.
    #[must_use]
    pub fn inventory_title(&self, display_name: &str) -> String {
        self.inventory.title.replace(PLAYER_NAME_PLACEHOLDER, display_name)
    }

    /// Whether the maximum trade distance is unlimited.
    #[must_use]
    pub const fn unlimited_distance(&self) -> bool {
        self.rules.max_distance == NO_MAX_DISTANCE
    }
}

// --- Default ---

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            accept: ItemIdentifier::new(ItemCategory::InkSack, 10),
            decline: ItemIdentifier::new(ItemCategory::InkSack, 1),
            separator: ItemIdentifier::of(ItemCategory::Barrier),
        }
    }
}

impl Default for InventorySettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_INVENTORY_TITLE.to_owned(),
            money: RewardTiers { low: 50, mid: 100, high: 500 },
            exp: RewardTiers { low: 5, mid: 50, high: 100 },
        }
    }
}

impl Default for TradeRules {
    fn default() -> Self {
        Self {
            max_distance: 15,
            creative_trading: true,
            timeout: Duration::from_secs(60),
            use_xp_trading: true,
        }
    }
}
