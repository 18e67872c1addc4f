// Traits
pub use crate::fetch_bindings::FetchBindings;

// Functions
pub use crate::batch::resolve_many;
pub use crate::vernacular::resolve_one;

// Structs and enums
pub use crate::binding::Binding;
pub use crate::config::Config;
pub use crate::error::VernacularError;
pub use crate::language_map::LanguageMap;
pub use crate::query::VernacularQuery;
pub use crate::result_map::{ResultMap, VernacularResult};
pub use crate::sparql_api::SparqlApi;
pub use crate::taxon_id::{IdValidation, TaxonId, TaxonIds};
pub use crate::vernacular::VernacularNames;
