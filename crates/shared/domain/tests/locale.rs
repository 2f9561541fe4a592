use tradepost_domain::locale::LocaleTag;

#[test]
fn language_only_tag() {
    let tag = LocaleTag::parse("en");
    assert_eq!(tag.language(), "en");
    assert_eq!(tag.region(), None);
    assert_eq!(tag.variant(), None);
}

#[test]
fn language_and_region_tag() {
    let tag = LocaleTag::parse("en_US");
    assert_eq!(tag.language(), "en");
    assert_eq!(tag.region(), Some("US"));
    assert_eq!(tag.variant(), None);
}

#[test]
fn full_tag() {
    let tag = LocaleTag::parse("en_US_posix");
    assert_eq!(tag.language(), "en");
    assert_eq!(tag.region(), Some("US"));
    assert_eq!(tag.variant(), Some("posix"));
}

#[test]
fn display_rejoins_components() {
    assert_eq!(LocaleTag::parse("en").to_string(), "en");
    assert_eq!(LocaleTag::parse("en_US").to_string(), "en_US");
    assert_eq!(LocaleTag::parse("en_US_posix").to_string(), "en_US_posix");
}

#[test]
fn extra_components_are_ignored() {
    let tag = LocaleTag::parse("zh_CN_hans_extra");
    assert_eq!(tag.language(), "zh");
    assert_eq!(tag.region(), Some("CN"));
    assert_eq!(tag.variant(), Some("hans"));
}
