//! Localized strings.
//!
//! Catalog content is authored in Finnish and translated to English and
//! Swedish. Lookup falls back in the order: requested locale, then fi,
//! then en, then sv — the first non-empty translation wins.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fi,
    En,
    Sv,
}

/// A string with fi/en/sv translations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub fi: String,
    pub en: String,
    pub sv: String,
}

impl LocalizedString {
    /// Construct with all three translations.
    pub fn new(fi: impl Into<String>, en: impl Into<String>, sv: impl Into<String>) -> Self {
        Self {
            fi: fi.into(),
            en: en.into(),
            sv: sv.into(),
        }
    }

    /// Construct from the authoring locale only; other translations empty.
    pub fn finnish(fi: impl Into<String>) -> Self {
        Self {
            fi: fi.into(),
            en: String::new(),
            sv: String::new(),
        }
    }

    /// Resolve the translation for `locale`, falling back fi → en → sv.
    pub fn localize(&self, locale: Locale) -> &str {
        let requested = match locale {
            Locale::Fi => &self.fi,
            Locale::En => &self.en,
            Locale::Sv => &self.sv,
        };
        for candidate in [requested, &self.fi, &self.en, &self.sv] {
            if !candidate.is_empty() {
                return candidate;
            }
        }
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_requested_locale() {
        let s = LocalizedString::new("Lounasetu", "Lunch benefit", "Lunchförmån");
        assert_eq!(s.localize(Locale::En), "Lunch benefit");
        assert_eq!(s.localize(Locale::Sv), "Lunchförmån");
        assert_eq!(s.localize(Locale::Fi), "Lounasetu");
    }

    #[test]
    fn falls_back_to_finnish() {
        let s = LocalizedString::finnish("Liikuntaetu");
        assert_eq!(s.localize(Locale::En), "Liikuntaetu");
        assert_eq!(s.localize(Locale::Sv), "Liikuntaetu");
    }

    #[test]
    fn falls_back_past_finnish_when_empty() {
        let s = LocalizedString::new("", "Phone benefit", "");
        assert_eq!(s.localize(Locale::Sv), "Phone benefit");
    }

    #[test]
    fn empty_string_resolves_to_empty() {
        let s = LocalizedString::default();
        assert_eq!(s.localize(Locale::Fi), "");
    }
}
