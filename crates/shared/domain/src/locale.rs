use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed locale tag: `language`, `language_REGION`, or
/// `language_REGION_variant`.
///
/// Short tags simply omit the trailing parts; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleTag {
    language: String,
    region: Option<String>,
    variant: Option<String>,
}

impl LocaleTag {
    /// Builds a tag from an explicit language with no region or variant.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self { language: language.into(), region: None, variant: None }
    }

    /// Splits a raw tag on `_` into up to three components.
    ///
    /// Components past the third are ignored, matching how human-edited
    /// configs have historically been read.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let mut parts = tag.split('_');
        let language = parts.next().unwrap_or_default().to_owned();
        let region = parts.next().map(str::to_owned);
        let variant = parts.next().map(str::to_owned);

        Self { language, region, variant }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(region) = &self.region {
            write!(f, "_{region}")?;
        }
        if let Some(variant) = &self.variant {
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}
