use std::borrow::Cow;

/// A specialized [`I18nError`] enum of this crate.
#[tradepost_derive::tradepost_error]
pub enum I18nError {
    /// A global bundle builder was supplied twice.
    #[error("Locale builder error{}: global builder has already been set", format_context(.context))]
    BuilderAlreadySet { context: Option<Cow<'static, str>> },

    /// The global bundle was requested before any builder was supplied.
    #[error("Locale builder error{}: no global builder has been set", format_context(.context))]
    BuilderUnset { context: Option<Cow<'static, str>> },

    /// A bundle name is already taken.
    #[error("Bundle registration error{}: `{name}` is already registered", format_context(.context))]
    DuplicateBundle { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A bundle name is not registered.
    #[error("Bundle registration error{}: `{name}` is not registered", format_context(.context))]
    UnknownBundle { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A message key resolved to nothing, locally and through the parent chain.
    #[error("Missing message{}: no text for key `{key}`", format_context(.context))]
    MissingMessage { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or source failures.
    #[error("Internal localization error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
