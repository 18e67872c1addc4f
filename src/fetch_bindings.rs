use crate::{config::WIKIDATA_CONFIG, Binding, Config, IdValidation, VernacularError};
use async_trait::async_trait;
use std::time::Duration;

/// The pause before each request of a multi-identifier lookup.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(2000);

/// A source of SPARQL bindings, and the settings lookups against it run with.
#[async_trait]
pub trait FetchBindings: Sync {
    /// Runs a SPARQL query and returns the rows at `results.bindings`.
    async fn fetch_bindings(&self, query: &str) -> Result<Vec<Binding>, VernacularError>;

    /// The vocabulary used to build queries.
    fn config(&self) -> &Config {
        &WIKIDATA_CONFIG
    }

    /// The pause before each request of a multi-identifier lookup.
    fn request_delay(&self) -> Duration {
        DEFAULT_REQUEST_DELAY
    }

    /// How identifiers are checked before a query is sent.
    fn id_validation(&self) -> IdValidation {
        IdValidation::PassThrough
    }
}
