//! Localization store.
//!
//! Holds the active language and one nested dictionary per supported
//! language. Lookups never fail: a key missing from the active dictionary is
//! read from the default language, and a key missing there too renders as its
//! own path.

mod dictionary;

pub use dictionary::{Dictionary, Item, LocaleError};

use std::borrow::Cow;
use std::collections::HashMap;

use log::{debug, warn};

const EN: &str = include_str!("locales/en.yaml");
const PT: &str = include_str!("locales/pt.yaml");
const ES: &str = include_str!("locales/es.yaml");

/// The closed set of languages the site ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Pt,
    Es,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Pt, Language::Es]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Português",
            Language::Es => "Español",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    /// Next language in the switcher cycle.
    pub fn next(&self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::Es,
            Language::Es => Language::En,
        }
    }
}

pub struct LocaleStore {
    current: Language,
    default: Language,
    dictionaries: HashMap<Language, Dictionary>,
}

impl LocaleStore {
    /// Builds the store from the dictionaries embedded in the binary.
    pub fn bundled(default: Language) -> Result<Self, LocaleError> {
        let mut dictionaries = HashMap::new();
        for (language, source) in [(Language::En, EN), (Language::Pt, PT), (Language::Es, ES)] {
            dictionaries.insert(language, Dictionary::from_yaml(language.code(), source)?);
        }
        Ok(Self::with_dictionaries(default, dictionaries))
    }

    pub fn with_dictionaries(default: Language, dictionaries: HashMap<Language, Dictionary>) -> Self {
        Self {
            current: default,
            default,
            dictionaries,
        }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn default_language(&self) -> Language {
        self.default
    }

    pub fn set_language(&mut self, language: Language) {
        debug!("Language switched to {}", language.code());
        self.current = language;
    }

    /// Switches by raw code. Unsupported codes select the default language.
    pub fn request(&mut self, code: &str) {
        match Language::from_code(code) {
            Some(language) => self.set_language(language),
            None => {
                warn!("Unsupported language code {code:?}, using {}", self.default.code());
                self.set_language(self.default);
            }
        }
    }

    pub fn cycle(&mut self) {
        self.set_language(self.current.next());
    }

    /// Dictionary for the active language, or the default one if it is absent.
    pub fn dictionary(&self) -> &Dictionary {
        self.dictionaries
            .get(&self.current)
            .or_else(|| self.dictionaries.get(&self.default))
            .unwrap_or_else(|| Dictionary::empty_ref())
    }

    fn fallback(&self) -> Option<&Dictionary> {
        self.dictionaries.get(&self.default)
    }

    /// Text at a dotted key path.
    pub fn text<'a>(&'a self, path: &'a str) -> Cow<'a, str> {
        if let Some(value) = self.dictionary().text(path) {
            return value;
        }
        if let Some(value) = self.fallback().and_then(|dict| dict.text(path)) {
            return value;
        }
        debug!("Missing translation for {path}");
        Cow::Borrowed(path)
    }

    /// Repeated structured content at a dotted key path.
    pub fn items(&self, path: &str) -> Vec<Item> {
        self.dictionary()
            .items(path)
            .or_else(|| self.fallback().and_then(|dict| dict.items(path)))
            .unwrap_or_default()
    }

    /// Leaf key paths of the default dictionary that `language` does not provide.
    pub fn missing_keys(&self, language: Language) -> Vec<String> {
        let Some(reference) = self.fallback() else {
            return Vec::new();
        };
        let target = self.dictionaries.get(&language);
        reference
            .leaf_paths()
            .into_iter()
            .filter(|path| target.is_none_or(|dict| !dict.contains(path)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LocaleStore {
        LocaleStore::bundled(Language::En).expect("bundled dictionaries parse")
    }

    #[test]
    fn unsupported_code_falls_back_to_default() {
        let mut store = store();
        store.set_language(Language::Pt);
        store.request("xx");
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.text("nav.home"), "HOME");
    }

    #[test]
    fn missing_language_dictionary_uses_default() {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(
            Language::En,
            Dictionary::from_yaml("en", "nav:\n  home: HOME\n").unwrap(),
        );
        let mut store = LocaleStore::with_dictionaries(Language::En, dictionaries);
        store.set_language(Language::Es);
        assert_eq!(store.text("nav.home"), "HOME");
    }

    #[test]
    fn missing_key_reads_default_then_path() {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(
            Language::En,
            Dictionary::from_yaml("en", "nav:\n  home: HOME\n  blog: BLOG\n").unwrap(),
        );
        dictionaries.insert(
            Language::Pt,
            Dictionary::from_yaml("pt", "nav:\n  home: INÍCIO\n").unwrap(),
        );
        let mut store = LocaleStore::with_dictionaries(Language::En, dictionaries);
        store.set_language(Language::Pt);
        assert_eq!(store.text("nav.home"), "INÍCIO");
        assert_eq!(store.text("nav.blog"), "BLOG");
        assert_eq!(store.text("nav.nowhere"), "nav.nowhere");
        assert_eq!(store.missing_keys(Language::Pt), vec!["nav.blog".to_string()]);
    }

    #[test]
    fn every_language_covers_the_default_keys() {
        let store = store();
        for language in Language::all() {
            let missing = store.missing_keys(*language);
            assert!(missing.is_empty(), "{} is missing {missing:?}", language.code());
        }
    }

    #[test]
    fn faq_items_are_structured() {
        let mut store = store();
        store.set_language(Language::Es);
        let items = store.items("pages.faq.items");
        assert!(!items.is_empty());
        assert!(items.iter().all(|item| item.get("title").is_some()));
    }

    #[test]
    fn cycle_visits_every_language() {
        let mut store = store();
        let mut seen = vec![store.language()];
        for _ in 0..2 {
            store.cycle();
            seen.push(store.language());
        }
        assert_eq!(seen, Language::all());
        store.cycle();
        assert_eq!(store.language(), Language::En);
    }
}
