//! Language selection and bilingual text values.
//!
//! Catalog fields are stored as English/Arabic pairs. Internally they are
//! carried as a [`Bilingual`] sub-value; the flat `nameEn`/`nameAr` shape
//! exists only at the wire boundary and in the column mapping.

use serde::{Deserialize, Serialize};

/// Content language requested by a client.
///
/// Anything other than an explicit `"ar"` query parameter selects English,
/// so an absent or unrecognized value falls back to the English fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Resolve the language from a raw `language` query parameter.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("ar") => Language::Ar,
            _ => Language::En,
        }
    }
}

/// An English/Arabic pair of text values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub en: String,
    pub ar: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The variant for the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}
