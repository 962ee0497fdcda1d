//! Locale identifiers

use aion_core::{AionError, AionResult};

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Get the ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Get the locale's own name for itself
    pub fn name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Get all supported locales
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Es]
    }

    /// Parse a locale code. Matching is case-insensitive on the
    /// two-letter code; anything else is rejected.
    pub fn from_code(code: &str) -> AionResult<Locale> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(AionError::UnsupportedLocale(other.to_string())),
        }
    }

    /// The next locale (for two-way selector toggles).
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
