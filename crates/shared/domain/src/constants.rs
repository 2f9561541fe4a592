/// Separator between the category token and the variant in encoded identifiers.
pub const IDENTIFIER_SEPARATOR: &str = ":";

/// Placeholder substituted with a player display name in the inventory title.
pub const PLAYER_NAME_PLACEHOLDER: &str = "@p";

/// Sentinel distance meaning "no maximum trade distance".
pub const NO_MAX_DISTANCE: i32 = -1;

/// Default inventory title template.
pub const DEFAULT_INVENTORY_TITLE: &str = "SimpleTrading - @p";

/// Stem of the configuration file read when no explicit path is given.
pub const CONFIG_FILE_STEM: &str = "config";

/// Version tag of the configuration layout this build understands.
pub const CURRENT_CONFIG_VERSION: u32 = 1;
