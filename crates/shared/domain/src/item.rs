use crate::constants::IDENTIFIER_SEPARATOR;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! catalog {
    ($(($variant:ident, $name:literal, $legacy_id:literal)),+ $(,)?) => {
        /// The known item catalog.
        ///
        /// Each entry carries a canonical lower-snake name and the legacy
        /// numeric code older configs use. `ALL` fixes the catalog ordering;
        /// later entries win when normalized names collide.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ItemCategory {
            $($variant),+
        }

        impl ItemCategory {
            /// Every catalog entry, in the fixed catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical lower-snake spelling of the catalog key.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }

            /// Legacy numeric catalog code.
            #[must_use]
            pub const fn legacy_id(self) -> u16 {
                match self {
                    $(Self::$variant => $legacy_id),+
                }
            }
        }
    };
}

catalog! {
    (Stone, "stone", 1),
    (Grass, "grass", 2),
    (Dirt, "dirt", 3),
    (Cobblestone, "cobblestone", 4),
    (Planks, "planks", 5),
    (Bedrock, "bedrock", 7),
    (Sand, "sand", 12),
    (Gravel, "gravel", 13),
    (GoldOre, "gold_ore", 14),
    (IronOre, "iron_ore", 15),
    (CoalOre, "coal_ore", 16),
    (Log, "log", 17),
    (Leaves, "leaves", 18),
    (Glass, "glass", 20),
    (LapisBlock, "lapis_block", 22),
    (Sandstone, "sandstone", 24),
    (Wool, "wool", 35),
    (GoldBlock, "gold_block", 41),
    (IronBlock, "iron_block", 42),
    (Tnt, "tnt", 46),
    (Bookshelf, "bookshelf", 47),
    (Obsidian, "obsidian", 49),
    (Torch, "torch", 50),
    (Chest, "chest", 54),
    (DiamondOre, "diamond_ore", 56),
    (DiamondBlock, "diamond_block", 57),
    (Furnace, "furnace", 61),
    (RedstoneOre, "redstone_ore", 73),
    (Ice, "ice", 79),
    (Clay, "clay", 82),
    (Pumpkin, "pumpkin", 86),
    (Netherrack, "netherrack", 87),
    (Glowstone, "glowstone", 89),
    (IronBars, "iron_bars", 101),
    (EmeraldOre, "emerald_ore", 129),
    (EmeraldBlock, "emerald_block", 133),
    (QuartzBlock, "quartz_block", 155),
    (Barrier, "barrier", 166),
    (Bow, "bow", 261),
    (Arrow, "arrow", 262),
    (Coal, "coal", 263),
    (Diamond, "diamond", 264),
    (IronIngot, "iron_ingot", 265),
    (GoldIngot, "gold_ingot", 266),
    (IronSword, "iron_sword", 267),
    (Stick, "stick", 280),
    (Bowl, "bowl", 281),
    (Feather, "feather", 288),
    (Gunpowder, "gunpowder", 289),
    (Wheat, "wheat", 296),
    (Bread, "bread", 297),
    (Flint, "flint", 318),
    (GoldenApple, "golden_apple", 322),
    (InkSack, "ink_sack", 351),
    (Bone, "bone", 352),
    (Sugar, "sugar", 353),
    (EnderPearl, "ender_pearl", 368),
    (BlazeRod, "blaze_rod", 369),
    (GoldNugget, "gold_nugget", 371),
    (Emerald, "emerald", 388),
    (NameTag, "name_tag", 421),
}

impl ItemCategory {
    /// Resolves a legacy numeric catalog code back to its entry.
    #[must_use]
    pub fn from_legacy_id(id: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.legacy_id() == id)
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ItemCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ItemCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.name() == name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown item category `{name}`")))
    }
}

/// A typed `(category, variant)` item selector.
///
/// Immutable once constructed; the category always refers to a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemIdentifier {
    category: ItemCategory,
    variant: i32,
}

impl ItemIdentifier {
    /// Creates an identifier with an explicit variant.
    #[must_use]
    pub const fn new(category: ItemCategory, variant: i32) -> Self {
        Self { category, variant }
    }

    /// Creates an identifier with the default variant 0.
    #[must_use]
    pub const fn of(category: ItemCategory) -> Self {
        Self { category, variant: 0 }
    }

    #[must_use]
    pub const fn category(&self) -> ItemCategory {
        self.category
    }

    #[must_use]
    pub const fn variant(&self) -> i32 {
        self.variant
    }
}

impl fmt::Display for ItemIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variant == 0 {
            f.write_str(self.category.name())
        } else {
            write!(f, "{}{}{}", self.category.name(), IDENTIFIER_SEPARATOR, self.variant)
        }
    }
}
