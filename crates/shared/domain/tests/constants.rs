use tradepost_domain::constants::{
    CONFIG_FILE_STEM, CURRENT_CONFIG_VERSION, DEFAULT_INVENTORY_TITLE, IDENTIFIER_SEPARATOR,
    NO_MAX_DISTANCE, PLAYER_NAME_PLACEHOLDER,
};

#[test]
fn constants_match_config_strings() {
    assert_eq!(IDENTIFIER_SEPARATOR, ":");
    assert_eq!(PLAYER_NAME_PLACEHOLDER, "@p");
    assert_eq!(NO_MAX_DISTANCE, -1);
    assert_eq!(DEFAULT_INVENTORY_TITLE, "SimpleTrading - @p");
    assert_eq!(CONFIG_FILE_STEM, "config");
    assert_eq!(CURRENT_CONFIG_VERSION, 1);
}
