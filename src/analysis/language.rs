use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// The closed set of languages the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hu")]
    Hungarian,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "sv")]
    Swedish,
}

pub const SUPPORTED_LANGUAGES: [Language; 7] = [
    Language::English,
    Language::French,
    Language::Hungarian,
    Language::Norwegian,
    Language::Russian,
    Language::Spanish,
    Language::Swedish,
];

/// Per-language token boundary rules. Text is lowercased before splitting;
/// a token is any maximal run of characters NOT matched by its rule.
static SPLIT_RULES: Lazy<HashMap<Language, Regex>> = Lazy::new(|| {
    HashMap::from([
        (Language::English, Regex::new(r"[^A-Za-zàèéìòóù0-9_'-]").unwrap()),
        (Language::French, Regex::new(r"[^a-z0-9äâàéèëêïîöôùüûœç-]").unwrap()),
        (Language::Hungarian, Regex::new(r"[^a-z0-9áéíóöőúüűÁÉÍÓÖŐÚÜŰ]").unwrap()),
        (Language::Norwegian, Regex::new(r"[^a-z0-9_æøåÆØÅäÄöÖüÜ]").unwrap()),
        (Language::Russian, Regex::new(r"[^a-z0-9а-яА-ЯёЁ]").unwrap()),
        (Language::Spanish, Regex::new(r"[^a-z0-9A-Zá-úÁ-ÚñÑüÜ]").unwrap()),
        (Language::Swedish, Regex::new(r"[^a-z0-9_åÅäÄöÖüÜ-]").unwrap()),
    ])
});

impl Language {
    /// BCP 47 style primary tag, e.g. `"en"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Hungarian => "hu",
            Language::Norwegian => "no",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
        }
    }

    /// Parses a language tag. Unknown tags are rejected, this is the only
    /// place an `UnsupportedLanguage` error can originate.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "en" => Ok(Language::English),
            "fr" => Ok(Language::French),
            "hu" => Ok(Language::Hungarian),
            "no" => Ok(Language::Norwegian),
            "ru" => Ok(Language::Russian),
            "es" => Ok(Language::Spanish),
            "sv" => Ok(Language::Swedish),
            other => Err(Error::unsupported_language(other)),
        }
    }

    pub(crate) fn split_rule(&self) -> &'static Regex {
        &SPLIT_RULES[self]
    }

    pub(crate) fn stemmer_algorithm(&self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::French => Algorithm::French,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_tag_round_trip() {
        for language in SUPPORTED_LANGUAGES {
            assert_eq!(Language::from_tag(language.tag()).unwrap(), language);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = Language::from_tag("pl").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedLanguage);

        assert!(Language::from_tag("").is_err());
        assert!(Language::from_tag("EN").is_err());
    }

    #[test]
    fn test_split_rules_compile_for_all_languages() {
        for language in SUPPORTED_LANGUAGES {
            assert!(!language.split_rule().as_str().is_empty());
        }
    }
}
