use crate::VernacularError;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A GBIF taxon key that passed local validation (digits only).
#[nutype(
    sanitize(trim),
    validate(regex = "^[0-9]+$"),
    derive(Debug, Display, Clone, PartialEq)
)]
pub struct GbifTaxonKey(String);

/// How identifiers are checked before a query is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdValidation {
    /// Identifiers go into the query as they are; malformed ones yield empty results.
    #[default]
    PassThrough,
    /// Identifiers must be numeric GBIF keys; others are rejected without a request.
    Strict,
}

/// An identifier naming a taxon in GBIF, as stored in Wikidata.
/// It is opaque: no format is enforced unless `IdValidation::Strict` is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonId(String);

impl TaxonId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the degenerate (empty) identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validates the identifier as a numeric GBIF taxon key.
    /// # Errors
    /// Returns `VernacularError::InvalidTaxonId` if the identifier is not all digits.
    pub fn gbif_key(&self) -> Result<GbifTaxonKey, VernacularError> {
        GbifTaxonKey::try_new(self.0.as_str())
            .map_err(|_| VernacularError::InvalidTaxonId(self.0.to_owned()))
    }

    /// Checks the identifier according to `validation`, and returns the
    /// identifier to query with. `Strict` returns the validated (trimmed) key.
    /// # Errors
    /// Returns `VernacularError::InvalidTaxonId` if `Strict` validation fails.
    pub fn checked(&self, validation: IdValidation) -> Result<TaxonId, VernacularError> {
        match validation {
            IdValidation::PassThrough => Ok(self.to_owned()),
            IdValidation::Strict => self.gbif_key().map(|key| TaxonId(key.into_inner())),
        }
    }
}

impl fmt::Display for TaxonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TaxonId> for String {
    fn from(val: TaxonId) -> Self {
        val.0
    }
}

impl From<&TaxonId> for TaxonId {
    fn from(val: &TaxonId) -> Self {
        val.to_owned()
    }
}

impl From<&str> for TaxonId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for TaxonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for TaxonId {
    fn from(s: &String) -> Self {
        Self(s.to_owned())
    }
}

macro_rules! taxon_id_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TaxonId {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

taxon_id_from_integer!(u32, u64, i32, i64, usize);

/// One identifier, or an ordered list of them.
#[derive(Debug, Clone, PartialEq)]
pub enum TaxonIds {
    Single(TaxonId),
    Many(Vec<TaxonId>),
}

impl TaxonIds {
    /// Returns the number of identifiers (duplicates included).
    pub fn len(&self) -> usize {
        match self {
            TaxonIds::Single(_) => 1,
            TaxonIds::Many(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<TaxonId> for TaxonIds {
    fn from(id: TaxonId) -> Self {
        TaxonIds::Single(id)
    }
}

impl From<&TaxonId> for TaxonIds {
    fn from(id: &TaxonId) -> Self {
        TaxonIds::Single(id.to_owned())
    }
}

impl From<&str> for TaxonIds {
    fn from(id: &str) -> Self {
        TaxonIds::Single(id.into())
    }
}

impl From<String> for TaxonIds {
    fn from(id: String) -> Self {
        TaxonIds::Single(id.into())
    }
}

impl From<u64> for TaxonIds {
    fn from(id: u64) -> Self {
        TaxonIds::Single(id.into())
    }
}

impl<T: Into<TaxonId>> From<Vec<T>> for TaxonIds {
    fn from(ids: Vec<T>) -> Self {
        TaxonIds::Many(ids.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TaxonId> + Clone> From<&[T]> for TaxonIds {
    fn from(ids: &[T]) -> Self {
        TaxonIds::Many(ids.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<TaxonId>, const N: usize> From<[T; N]> for TaxonIds {
    fn from(ids: [T; N]) -> Self {
        TaxonIds::Many(ids.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxon_id_from_str_and_integer() {
        assert_eq!(TaxonId::from("5290052"), TaxonId::from(5290052_u64));
        assert_eq!(TaxonId::from(3033894_i32).as_str(), "3033894");
        assert_eq!(TaxonId::from("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_taxon_id_default_is_empty() {
        let id = TaxonId::default();
        assert!(id.is_empty());
        assert_eq!(id.to_string(), "");
    }

    #[test]
    fn test_gbif_key() {
        let key = TaxonId::from(" 5290052 ").gbif_key().unwrap();
        assert_eq!(key.to_string(), "5290052");
        assert!(TaxonId::from("Q42").gbif_key().is_err());
        assert!(TaxonId::default().gbif_key().is_err());
    }

    #[test]
    fn test_checked() {
        let id = TaxonId::from("not-a-key");
        assert_eq!(id.checked(IdValidation::PassThrough).unwrap(), id);
        match id.checked(IdValidation::Strict) {
            Err(VernacularError::InvalidTaxonId(s)) => assert_eq!(s, "not-a-key"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(TaxonId::from(42_u32).checked(IdValidation::Strict).is_ok());
        let padded = TaxonId::from(" 5290052 ");
        assert_eq!(padded.checked(IdValidation::PassThrough).unwrap(), padded);
        assert_eq!(
            padded.checked(IdValidation::Strict).unwrap(),
            TaxonId::from("5290052")
        );
    }

    #[test]
    fn test_taxon_ids_single() {
        let ids: TaxonIds = "5290052".into();
        assert_eq!(ids, TaxonIds::Single(TaxonId::from("5290052")));
        assert_eq!(ids.len(), 1);
        let ids: TaxonIds = 5290052_u64.into();
        assert_eq!(ids, TaxonIds::Single(TaxonId::from("5290052")));
    }

    #[test]
    fn test_taxon_ids_many() {
        let ids: TaxonIds = vec!["5290052", "3033894"].into();
        assert_eq!(
            ids,
            TaxonIds::Many(vec![TaxonId::from("5290052"), TaxonId::from("3033894")])
        );
        let ids: TaxonIds = [1_u64, 2, 3].into();
        assert_eq!(ids.len(), 3);
        let slice: &[&str] = &[];
        let ids: TaxonIds = slice.into();
        assert!(ids.is_empty());
    }

    #[test]
    fn test_taxon_id_serialize() {
        let json = serde_json::to_string(&TaxonId::from("5290052")).unwrap();
        assert_eq!(json, r#""5290052""#);
    }
}
