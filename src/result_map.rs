use crate::{LanguageMap, TaxonId, VernacularError};
use std::collections::HashMap;

pub type VernacularResult = Result<LanguageMap, VernacularError>;

/// The outcome of a lookup: every requested identifier, mapped to its
/// vernacular names or to the error recorded for it.
#[derive(Debug, Default)]
pub struct ResultMap {
    results: HashMap<TaxonId, VernacularResult>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a map holding a single identifier.
    pub fn single(taxon_id: TaxonId, result: VernacularResult) -> Self {
        let mut ret = Self::new();
        ret.insert(taxon_id, result);
        ret
    }

    /// Inserts a result. An existing result for the same identifier is replaced.
    pub fn insert(&mut self, taxon_id: TaxonId, result: VernacularResult) {
        self.results.insert(taxon_id, result);
    }

    /// Moves all results of `other` into `self`; `other` wins on identical identifiers.
    pub fn merge(&mut self, other: ResultMap) {
        self.results.extend(other.results);
    }

    pub fn get<T: Into<TaxonId>>(&self, taxon_id: T) -> Option<&VernacularResult> {
        self.results.get(&taxon_id.into())
    }

    /// Returns the vernacular names for an identifier, if it resolved successfully.
    pub fn names<T: Into<TaxonId>>(&self, taxon_id: T) -> Option<&LanguageMap> {
        self.get(taxon_id).and_then(|r| r.as_ref().ok())
    }

    /// Returns the error recorded for an identifier, if its lookup failed.
    pub fn error<T: Into<TaxonId>>(&self, taxon_id: T) -> Option<&VernacularError> {
        self.get(taxon_id).and_then(|r| r.as_ref().err())
    }

    pub fn contains<T: Into<TaxonId>>(&self, taxon_id: T) -> bool {
        self.results.contains_key(&taxon_id.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &TaxonId> {
        self.results.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TaxonId, &VernacularResult)> {
        self.results.iter()
    }

    /// Iterates over the identifiers that resolved.
    pub fn successes(&self) -> impl Iterator<Item = (&TaxonId, &LanguageMap)> {
        self.results
            .iter()
            .filter_map(|(id, r)| r.as_ref().ok().map(|lm| (id, lm)))
    }

    /// Iterates over the identifiers whose lookup failed.
    pub fn failures(&self) -> impl Iterator<Item = (&TaxonId, &VernacularError)> {
        self.results
            .iter()
            .filter_map(|(id, r)| r.as_ref().err().map(|e| (id, e)))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_inner(self) -> HashMap<TaxonId, VernacularResult> {
        self.results
    }
}

impl IntoIterator for ResultMap {
    type Item = (TaxonId, VernacularResult);
    type IntoIter = std::collections::hash_map::IntoIter<TaxonId, VernacularResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl FromIterator<(TaxonId, VernacularResult)> for ResultMap {
    fn from_iter<I: IntoIterator<Item = (TaxonId, VernacularResult)>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn server_error() -> VernacularError {
        VernacularError::HttpStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            status_text: "Internal Server Error".to_owned(),
        }
    }

    fn names(lang: &str, name: &str) -> LanguageMap {
        let mut lm = LanguageMap::new();
        lm.push(lang, name);
        lm
    }

    #[test]
    fn test_single() {
        let rm = ResultMap::single("1".into(), Ok(LanguageMap::new()));
        assert_eq!(rm.len(), 1);
        assert!(rm.contains("1"));
        assert!(rm.names("1").unwrap().is_empty());
        assert!(rm.error("1").is_none());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut rm = ResultMap::single("1".into(), Ok(names("fr", "a")));
        rm.merge(ResultMap::single("2".into(), Err(server_error())));
        rm.merge(ResultMap::single("1".into(), Ok(names("fr", "b"))));
        assert_eq!(rm.len(), 2);
        assert_eq!(rm.names("1").unwrap().get_lang("fr").unwrap(), &["b"]);
        assert_eq!(
            rm.error("2").unwrap().status(),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn test_successes_and_failures() {
        let rm: ResultMap = vec![
            (TaxonId::from("1"), Ok(names("en", "corn"))),
            (TaxonId::from("2"), Err(server_error())),
            (TaxonId::from("3"), Ok(LanguageMap::new())),
        ]
        .into_iter()
        .collect();
        assert_eq!(rm.successes().count(), 2);
        let failures: Vec<_> = rm.failures().map(|(id, _)| id.to_string()).collect();
        assert_eq!(failures, vec!["2".to_string()]);
        assert_eq!(rm.into_iter().count(), 3);
    }

    #[test]
    fn test_lookup_by_integer() {
        let rm = ResultMap::single(5290052_u64.into(), Ok(names("fr", "Maïs")));
        assert!(rm.contains(5290052_u64));
        assert!(rm.contains("5290052"));
        assert_eq!(rm.keys().count(), 1);
    }
}
