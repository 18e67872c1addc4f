use crate::{config::WIKIDATA_CONFIG, Config, TaxonId};

/// Prefixes used as shorthand in the query body.
const PREFIXES: &str = "PREFIX wdt: <http://www.wikidata.org/prop/direct/>";

/// The vernacular name query for one taxon: distinct name/language pairs of the
/// subject whose GBIF taxon ID property equals the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct VernacularQuery {
    taxon_id: TaxonId,
    config: Config,
}

impl VernacularQuery {
    /// Constructs a query for `taxon_id` using the Wikidata vocabulary.
    pub fn new<T: Into<TaxonId>>(taxon_id: T) -> Self {
        Self::new_from_config(taxon_id, &WIKIDATA_CONFIG)
    }

    /// Constructs a query for `taxon_id` using a bespoke vocabulary.
    pub fn new_from_config<T: Into<TaxonId>>(taxon_id: T, config: &Config) -> Self {
        Self {
            taxon_id: taxon_id.into(),
            config: *config,
        }
    }

    pub const fn taxon_id(&self) -> &TaxonId {
        &self.taxon_id
    }

    /// Renders the SPARQL text.
    pub fn to_sparql(&self) -> String {
        format!(
            r#"{PREFIXES}
SELECT DISTINCT ?vernacular ?lang
WHERE {{
    ?subject wdt:{taxon_id_property} "{literal}".
    ?subject wdt:{vernacular_property} ?vernacular
    BIND(LANG(?vernacular) AS ?lang)
}} LIMIT {limit}
"#,
            taxon_id_property = self.config.taxon_id_property(),
            vernacular_property = self.config.vernacular_property(),
            literal = escape_literal(self.taxon_id.as_str()),
            limit = self.config.result_limit(),
        )
    }
}

/// Escapes `\` and `"` so the value stays inside a double-quoted SPARQL literal.
fn escape_literal(s: &str) -> String {
    let mut ret = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => ret.push_str("\\\\"),
            '"' => ret.push_str("\\\""),
            '\n' => ret.push_str("\\n"),
            '\r' => ret.push_str("\\r"),
            _ => ret.push(c),
        }
    }
    ret
}
