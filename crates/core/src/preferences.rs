//! Display language and theme.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::storage::{KeyValueStore, keys};

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Hindi.
    Hi,
}

impl Language {
    /// Storage code for the language.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Storage code for the theme.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Persisted language and theme choice.
///
/// Changes apply in memory immediately; a failed write is logged.
pub struct Preferences<S: KeyValueStore> {
    store: Arc<S>,
    language: Language,
    theme: Theme,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Loads saved preferences. Missing or unknown values keep the defaults.
    pub async fn load(store: Arc<S>) -> Self {
        let language = load_choice(store.as_ref(), keys::LANGUAGE).await;
        let theme = load_choice(store.as_ref(), keys::THEME).await;
        Self {
            store,
            language,
            theme,
        }
    }

    /// Current language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns true for the dark theme.
    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Switches the interface language.
    pub async fn set_language(&mut self, language: Language) {
        self.language = language;
        self.save(keys::LANGUAGE, language.code()).await;
        info!(%language, "Language changed");
    }

    /// Flips between light and dark and returns the new theme.
    pub async fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.save(keys::THEME, self.theme.code()).await;
        info!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    async fn save(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value).await {
            error!(key, error = %e, "Failed to save preference");
        }
    }
}

async fn load_choice<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: FromStr<Err = String> + Default,
{
    match store.get(key).await {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: String| {
            warn!(key, error = %e, "Ignoring saved preference");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            error!(key, error = %e, "Failed to load preference");
            T::default()
        }
    }
}
