// src/shared/domain/language.rs
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Supported content languages. Every localized document exists once per
/// variant. Spanish is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "en_EN")]
    EnEn,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid language code: '{code}'. Supported codes are: es_ES, en_EN")]
pub struct InvalidLanguage {
    pub code: String,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::EsEs, Language::EnEn];

    pub fn code(&self) -> &'static str {
        match self {
            Language::EsEs => "es_ES",
            Language::EnEn => "en_EN",
        }
    }

    /// Directory segment holding this language's documents.
    pub fn dir(&self) -> &'static str {
        match self {
            Language::EsEs => "es",
            Language::EnEn => "en",
        }
    }

    pub fn resolve(code: &str) -> Result<Self, InvalidLanguage> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| InvalidLanguage {
                code: code.to_string(),
            })
    }

    /// Resolves an optional code, falling back to `default` when the caller
    /// supplied none. With neither, the absent code is rejected.
    pub fn resolve_or(
        code: Option<&str>,
        default: Option<Language>,
    ) -> Result<Self, InvalidLanguage> {
        match (code, default) {
            (Some(code), _) => Self::resolve(code),
            (None, Some(default)) => Ok(default),
            (None, None) => Err(InvalidLanguage {
                code: "null".to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = InvalidLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
