use crate::Binding;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Vernacular names grouped by language tag.
/// Languages keep the order in which they were first seen, and names the order
/// in which the endpoint returned them; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap {
    names: IndexMap<String, Vec<String>>,
}

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces bindings into a map, appending each name under its language tag.
    pub fn from_bindings<I: IntoIterator<Item = Binding>>(bindings: I) -> Self {
        let mut ret = Self::new();
        for binding in bindings {
            ret.push(binding.lang(), binding.vernacular());
        }
        ret
    }

    /// Appends a vernacular name for a language, creating the language entry if needed.
    pub fn push<S1: Into<String>, S2: Into<String>>(&mut self, language: S1, name: S2) {
        self.names
            .entry(language.into())
            .or_default()
            .push(name.into());
    }

    /// Returns the names for a language.
    pub fn get_lang(&self, language: &str) -> Option<&[String]> {
        self.names.get(language).map(|v| v.as_slice())
    }

    pub fn contains_language(&self, language: &str) -> bool {
        self.names.contains_key(language)
    }

    /// Returns the language tags, in first-seen order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the number of languages
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no languages
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.names
    }
}

impl FromIterator<Binding> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        Self::from_bindings(iter)
    }
}
