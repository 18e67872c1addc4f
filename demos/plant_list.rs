use std::time::Duration;
use wikidata_vernacular::prelude::*;

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), VernacularError> {
    tracing_subscriber::fmt()
        .with_env_filter("wikidata_vernacular=info")
        .init();

    // Reject anything that is not a numeric GBIF key before querying
    let api = SparqlApi::builder(wikidata_vernacular::WIKIDATA_SPARQL_ENDPOINT)?
        .with_id_validation(IdValidation::Strict)
        .with_request_delay(Duration::from_secs(2))
        .build();

    // Zea mays, Berberis vulgaris, and an invalid ID
    let results = resolve_many(["5290052", "3033894", "not-a-taxon"], &api).await;

    for (taxon_id, result) in results.iter() {
        match result {
            Ok(names) => {
                let french = names.get_lang("fr").unwrap_or_default();
                println!("{taxon_id} => fr: {}", french.join(" / "));
            }
            Err(e) => println!("{taxon_id} => error: {e}"),
        }
    }

    Ok(())
}
