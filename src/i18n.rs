use serde::Deserialize;
use std::collections::HashMap;

const EMBEDDED_CATALOG: &str = include_str!("../locales/catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::En => "EN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    pub fn flag_src(self) -> &'static str {
        match self {
            Self::Es => "/cuba.svg",
            Self::En => "/usa.svg",
        }
    }

    pub fn flag_alt(self) -> &'static str {
        match self {
            Self::Es => "Cuba",
            Self::En => "USA",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Translations {
    es: HashMap<String, String>,
    en: HashMap<String, String>,
}

impl Translations {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Looks `key` up for `language`; unknown keys come back verbatim.
    pub fn lookup<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        let table = match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        };

        match table.get(key) {
            Some(value) => value.as_str(),
            None => {
                log::debug!("missing translation key={key} language={}", language.as_str());
                key
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn catalog() -> Translations {
        Translations::embedded().expect("embedded catalog parses")
    }

    #[test]
    fn locales_define_the_same_keys() {
        let catalog = catalog();
        let es: BTreeSet<&String> = catalog.es.keys().collect();
        let en: BTreeSet<&String> = catalog.en.keys().collect();

        assert!(!es.is_empty());
        assert_eq!(es, en);
    }

    #[test]
    fn lookup_switches_with_language() {
        let catalog = catalog();
        assert_eq!(catalog.lookup(Language::Es, "nav.home"), "Inicio");
        assert_eq!(catalog.lookup(Language::En, "nav.home"), "Home");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let catalog = catalog();
        assert_eq!(catalog.lookup(Language::En, "hero.missing"), "hero.missing");
        assert_eq!(Translations::default().lookup(Language::Es, "nav.home"), "nav.home");
    }

    #[test]
    fn double_toggle_restores_every_string() {
        let catalog = catalog();
        let start = Language::default();
        let twice = start.toggled().toggled();

        assert_eq!(twice, start);
        for key in catalog.es.keys() {
            assert_eq!(catalog.lookup(twice, key), catalog.lookup(start, key));
            assert_ne!(catalog.lookup(start.toggled(), key), key.as_str());
        }
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(Translations::from_json("{\"es\": {}}").is_err());
        assert!(Translations::from_json("not json").is_err());
    }
}
