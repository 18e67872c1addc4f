use wikidata_vernacular::prelude::*;

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), VernacularError> {
    tracing_subscriber::fmt()
        .with_env_filter("wikidata_vernacular=debug")
        .init();

    // Use the Wikidata Query Service
    let api = SparqlApi::wikidata()?;

    // Zea mays, by GBIF taxon ID
    let taxon_id = TaxonId::from(5290052_u64);
    let names = VernacularNames::get(&taxon_id, &api).await?;

    let mut languages: Vec<&str> = names.languages().collect();
    languages.sort_unstable();
    for language in languages {
        let values = names.get_lang(language).unwrap_or_default();
        println!("{language}: {}", values.join(", "));
    }

    Ok(())
}
