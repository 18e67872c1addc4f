use crate::{resolve_one, FetchBindings, ResultMap, TaxonIds};
use futures::prelude::*;
use tracing::{debug, info};

/// Resolves one identifier, or a list of identifiers one after the other.
///
/// A single identifier is looked up immediately. For a list, the source's
/// request delay is awaited before every request (the first one included),
/// and only one request is in flight at any time. Every identifier ends up
/// in the result exactly once; if an identifier is repeated, its last lookup wins.
/// A failing identifier is recorded and does not stop the others.
pub async fn resolve_many<T, F>(taxon_ids: T, source: &F) -> ResultMap
where
    T: Into<TaxonIds>,
    F: FetchBindings + ?Sized,
{
    let taxon_ids = match taxon_ids.into() {
        TaxonIds::Single(taxon_id) => return resolve_one(taxon_id, source).await,
        TaxonIds::Many(taxon_ids) => taxon_ids,
    };
    let delay = source.request_delay();
    let total = taxon_ids.len();
    let results = stream::iter(taxon_ids.into_iter().enumerate())
        .then(move |(index, taxon_id)| async move {
            debug!(index, taxon_id = %taxon_id, ?delay, "waiting");
            tokio::time::sleep(delay).await;
            debug!(index, taxon_id = %taxon_id, "fetching");
            let result = resolve_one(taxon_id, source).await;
            debug!(index, "resolved");
            result
        })
        .collect::<Vec<_>>()
        .await;

    let mut ret = ResultMap::new();
    for result in results {
        ret.merge(result);
    }
    info!(
        requested = total,
        resolved = ret.successes().count(),
        failed = ret.failures().count(),
        "vernacular name batch done"
    );
    ret
}
