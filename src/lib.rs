#![forbid(unsafe_code)]
#![warn(
    clippy::cognitive_complexity,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_link_with_quotes,
    clippy::doc_markdown,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::float_equality_without_abs,
    keyword_idents,
    clippy::missing_const_for_fn,
    missing_copy_implementations,
    missing_debug_implementations,
    // clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::mod_module_files,
    non_ascii_idents,
    noop_method_call,
    clippy::option_if_let_else,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::semicolon_if_nothing_returned,
    clippy::unseparated_literal_suffix,
    clippy::shadow_unrelated,
    clippy::similar_names,
    clippy::suspicious_operation_groupings,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    clippy::unused_self,
    clippy::use_debug,
    clippy::used_underscore_binding,
    clippy::useless_let_if_seq,
    clippy::wildcard_dependencies,
    clippy::wildcard_imports
)]

//! **Wikidata vernacular** resolves vernacular (common) plant names from
//! [Wikidata](https://www.wikidata.org), keyed by
//! [GBIF](https://www.gbif.org) taxon ID and grouped by language.
//!
//! Names are fetched from the [Wikidata Query Service](https://query.wikidata.org)
//! with one SPARQL query per taxon. Lists of taxa are resolved one at a time,
//! with a pause before every request, to stay within the service's rate limits.
//!
//! ```no_run
//! use wikidata_vernacular::prelude::*;
//!
//! # async fn demo() -> Result<(), VernacularError> {
//! let api = SparqlApi::wikidata()?;
//! let results = resolve_many(["5290052", "3033894"], &api).await;
//! for (taxon_id, names) in results.successes() {
//!     println!("{taxon_id}: {:?}", names.get_lang("fr"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod binding;
pub mod config;
pub mod error;
pub mod fetch_bindings;
pub mod language_map;
pub mod prelude;
pub mod query;
pub mod result_map;
pub mod sparql_api;
pub mod sparql_api_builder;
pub mod taxon_id;
pub mod vernacular;

pub use batch::resolve_many;
pub use binding::Binding;
pub use config::Config;
pub use error::VernacularError;
pub use fetch_bindings::{FetchBindings, DEFAULT_REQUEST_DELAY};
pub use language_map::LanguageMap;
pub use query::VernacularQuery;
pub use result_map::{ResultMap, VernacularResult};
pub use sparql_api::{SparqlApi, WIKIDATA_SPARQL_ENDPOINT};
pub use sparql_api_builder::SparqlApiBuilder;
pub use taxon_id::{GbifTaxonKey, IdValidation, TaxonId, TaxonIds};
pub use vernacular::{resolve_one, VernacularNames};
