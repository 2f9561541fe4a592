use tradepost_domain::item::{ItemCategory, ItemIdentifier};
use tradepost_kernel::codec::{self, CodecError};

#[test]
fn parses_exact_spelling_with_variant() {
    let id = codec::parse("ink_sack:10", ":").expect("identifier should parse");
    assert_eq!(id.category(), ItemCategory::InkSack);
    assert_eq!(id.variant(), 10);
}

#[test]
fn parses_case_insensitively() {
    let id = codec::parse("BARRIER", ":").expect("identifier should parse");
    assert_eq!(id.category(), ItemCategory::Barrier);
    assert_eq!(id.variant(), 0);
}

#[test]
fn parses_with_underscores_stripped() {
    let id = codec::parse("INKSACK", ":").expect("identifier should parse");
    assert_eq!(id.category(), ItemCategory::InkSack);
    assert_eq!(id.variant(), 0);

    let id = codec::parse("goldingot", ":").expect("identifier should parse");
    assert_eq!(id.category(), ItemCategory::GoldIngot);
}

#[test]
fn parses_legacy_numeric_codes() {
    let id = codec::parse("351:3", ":").expect("identifier should parse");
    assert_eq!(id.category(), ItemCategory::InkSack);
    assert_eq!(id.variant(), 3);
}

#[test]
fn unknown_category_fails() {
    let err = codec::parse("unobtanium", ":").expect_err("parse should fail");
    assert!(matches!(err, CodecError::InvalidIdentifier { .. }));
    assert!(err.to_string().contains("unobtanium"));
}

#[test]
fn unknown_legacy_code_fails() {
    let err = codec::parse("9999", ":").expect_err("parse should fail");
    assert!(matches!(err, CodecError::InvalidIdentifier { .. }));
}

#[test]
fn non_numeric_variant_fails() {
    let err = codec::parse("barrier:x", ":").expect_err("parse should fail");
    assert!(matches!(err, CodecError::InvalidVariant { .. }));
}

#[test]
fn components_past_the_variant_are_ignored() {
    let id = codec::parse("ink_sack:10:99", ":").expect("identifier should parse");
    assert_eq!(id.variant(), 10);
}

#[test]
fn custom_separator() {
    let id = codec::parse("wool;14", ";").expect("identifier should parse");
    assert_eq!(id.category(), ItemCategory::Wool);
    assert_eq!(id.variant(), 14);
}

#[test]
fn encode_is_the_inverse_of_parse() {
    let id = ItemIdentifier::new(ItemCategory::InkSack, 10);
    assert_eq!(codec::encode(&id, ":"), "ink_sack:10");
    assert_eq!(codec::parse(&codec::encode(&id, ":"), ":").unwrap(), id);

    let plain = ItemIdentifier::of(ItemCategory::Barrier);
    assert_eq!(codec::encode(&plain, ":"), "barrier");
    assert_eq!(codec::parse(&codec::encode(&plain, ":"), ":").unwrap(), plain);
}
