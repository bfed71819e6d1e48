//! Multilingual field values.
//!
//! Every multilingual field is stored with one entry per supported language. Inputs are
//! lenient: a single scalar is copied into every language, missing languages default to an
//! empty string and unknown language codes are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the catalog carries translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    Kz,
}

pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::Ru, Language::Kz];

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Kz => "kz",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LANGUAGES.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A per-language value: either free text or a number (prices, discounts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    /// Empty text is the "not filled in" value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Text(String::new())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

/// A normalized multilingual value with an entry for every supported language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Localized {
    #[serde(default)]
    pub ru: Scalar,
    #[serde(default)]
    pub kz: Scalar,
}

impl Localized {
    pub fn new(ru: impl Into<Scalar>, kz: impl Into<Scalar>) -> Self {
        Self {
            ru: ru.into(),
            kz: kz.into(),
        }
    }

    /// The same value in every language.
    pub fn uniform(value: Scalar) -> Self {
        Self {
            ru: value.clone(),
            kz: value,
        }
    }

    pub fn get(&self, language: Language) -> &Scalar {
        match language {
            Language::Ru => &self.ru,
            Language::Kz => &self.kz,
        }
    }

    pub fn set(&mut self, language: Language, value: Scalar) {
        match language {
            Language::Ru => self.ru = value,
            Language::Kz => self.kz = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &Scalar)> {
        SUPPORTED_LANGUAGES.into_iter().map(move |l| (l, self.get(l)))
    }
}

/// What callers may send for a multilingual field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedInput {
    Single(Scalar),
    PerLanguage(Localized),
}

impl LocalizedInput {
    pub fn into_localized(self) -> Localized {
        match self {
            LocalizedInput::Single(value) => Localized::uniform(value),
            LocalizedInput::PerLanguage(localized) => localized,
        }
    }
}

impl From<Localized> for LocalizedInput {
    fn from(value: Localized) -> Self {
        LocalizedInput::PerLanguage(value)
    }
}
