//! Status strings announced while properties load.
//!
//! English strings are always available. With the `localization` feature the
//! strings come from the Fluent resources bundled under `locales/`.

/// The two status announcements of a properties container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    loading: String,
    loading_completed: String,
}

impl Messages {
    pub fn english() -> Self {
        Self {
            loading: "Loading properties".to_string(),
            loading_completed: "Loading properties completed".to_string(),
        }
    }

    /// Announced while the host is fetching properties.
    pub fn loading(&self) -> &str {
        &self.loading
    }

    /// Announced once the host reports loading finished.
    pub fn loading_completed(&self) -> &str {
        &self.loading_completed
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(feature = "localization")]
pub use fluent::L10nError;

#[cfg(feature = "localization")]
mod fluent {
    use fluent_bundle::{FluentBundle, FluentResource};
    use unic_langid::LanguageIdentifier;

    use super::Messages;

    const LOADING_ID: &str = "loading-properties";
    const LOADING_COMPLETED_ID: &str = "loading-properties-completed";

    const BUNDLED: &[(&str, &str)] = &[
        ("en-US", include_str!("../locales/en-US/properties.ftl")),
        ("pl-PL", include_str!("../locales/pl-PL/properties.ftl")),
    ];

    #[derive(Debug, thiserror::Error)]
    pub enum L10nError {
        #[error("invalid locale identifier `{0}`")]
        InvalidLocale(String),
        #[error("no bundled translations for `{0}`")]
        UnsupportedLocale(String),
        #[error("could not parse FTL for {locale}: {details}")]
        Parse { locale: String, details: String },
        #[error("could not add FTL resource for {locale}: {details}")]
        Resource { locale: String, details: String },
        #[error("message `{id}` is missing from {locale}")]
        MissingMessage { locale: String, id: &'static str },
    }

    fn parse_locale(locale: &str) -> Result<LanguageIdentifier, L10nError> {
        locale
            .parse()
            .map_err(|_| L10nError::InvalidLocale(locale.to_string()))
    }

    fn format_message(
        bundle: &FluentBundle<FluentResource>,
        locale: &LanguageIdentifier,
        id: &'static str,
    ) -> Result<String, L10nError> {
        let pattern = bundle
            .get_message(id)
            .and_then(|message| message.value())
            .ok_or_else(|| L10nError::MissingMessage {
                locale: locale.to_string(),
                id,
            })?;
        let mut errors = vec![];
        let text = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            log::warn!("formatting `{id}` for {locale}: {errors:?}");
        }
        Ok(text.into_owned())
    }

    impl Messages {
        /// Build the messages from an FTL `source` written for `locale`.
        pub fn from_ftl(locale: &str, source: &str) -> Result<Self, L10nError> {
            let langid = parse_locale(locale)?;
            let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
                L10nError::Parse {
                    locale: locale.to_string(),
                    details: format!("{errors:?}"),
                }
            })?;

            let mut bundle = FluentBundle::new(vec![langid.clone()]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| L10nError::Resource {
                    locale: locale.to_string(),
                    details: format!("{errors:?}"),
                })?;

            Ok(Self {
                loading: format_message(&bundle, &langid, LOADING_ID)?,
                loading_completed: format_message(&bundle, &langid, LOADING_COMPLETED_ID)?,
            })
        }

        /// Messages from the bundled translation closest to `locale`.
        ///
        /// An exact tag match wins, then a match on the language alone.
        pub fn bundled(locale: &str) -> Result<Self, L10nError> {
            let wanted = parse_locale(locale)?;
            let exact = BUNDLED
                .iter()
                .find(|(tag, _)| parse_locale(tag).is_ok_and(|id| id == wanted));
            let same_language = || {
                BUNDLED.iter().find(|(tag, _)| {
                    parse_locale(tag).is_ok_and(|id| id.language == wanted.language)
                })
            };
            let (tag, source) = exact
                .or_else(same_language)
                .ok_or_else(|| L10nError::UnsupportedLocale(locale.to_string()))?;
            Self::from_ftl(tag, source)
        }

        /// Like [`Messages::bundled`], falling back to English.
        pub fn for_locale(locale: &str) -> Self {
            Self::bundled(locale).unwrap_or_else(|err| {
                log::debug!("using English status messages: {err}");
                Self::english()
            })
        }

        /// Messages for the operating system's locale.
        pub fn system() -> Self {
            match sys_locale::get_locale() {
                Some(locale) => Self::for_locale(&locale),
                None => Self::english(),
            }
        }
    }

}
