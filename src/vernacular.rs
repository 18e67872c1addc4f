use crate::{FetchBindings, LanguageMap, ResultMap, TaxonId, VernacularError, VernacularQuery};
use tracing::{debug, warn};

/// Vernacular names of a single taxon.
#[derive(Debug, Clone, Copy)]
pub struct VernacularNames;

impl VernacularNames {
    /// Queries the vernacular names of one taxon, grouped by language.
    /// A taxon without names (or an identifier matching nothing) yields an empty map.
    /// # Errors
    /// Returns an error if the identifier is rejected, or the request or its parsing fails.
    pub async fn get<F: FetchBindings + ?Sized>(
        taxon_id: &TaxonId,
        source: &F,
    ) -> Result<LanguageMap, VernacularError> {
        let query_id = taxon_id.checked(source.id_validation())?;
        let query = VernacularQuery::new_from_config(query_id, source.config()).to_sparql();
        let bindings = source.fetch_bindings(&query).await?;
        debug!(taxon_id = %taxon_id, rows = bindings.len(), "received bindings");
        Ok(LanguageMap::from_bindings(bindings))
    }
}

/// Resolves one identifier. The result always holds exactly that identifier,
/// mapped to its names or to the error that occurred.
pub async fn resolve_one<T, F>(taxon_id: T, source: &F) -> ResultMap
where
    T: Into<TaxonId>,
    F: FetchBindings + ?Sized,
{
    let taxon_id = taxon_id.into();
    let result = VernacularNames::get(&taxon_id, source).await;
    if let Err(e) = &result {
        warn!(taxon_id = %taxon_id, error = %e, "vernacular name lookup failed");
    }
    ResultMap::single(taxon_id, result)
}
