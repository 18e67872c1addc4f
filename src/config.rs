/// The Wikibase vocabulary used to build the vernacular name query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    taxon_id_property: &'static str,
    vernacular_property: &'static str,
    result_limit: u32,
}

impl Config {
    /// Constructs a new `Config` object from the taxon ID property, the vernacular name property, and a row limit.
    pub const fn new(
        taxon_id_property: &'static str,
        vernacular_property: &'static str,
        result_limit: u32,
    ) -> Config {
        Config {
            taxon_id_property,
            vernacular_property,
            result_limit,
        }
    }

    /// Returns the property holding the GBIF taxon ID.
    pub const fn taxon_id_property(&self) -> &'static str {
        self.taxon_id_property
    }

    /// Returns the property holding vernacular (common) names.
    pub const fn vernacular_property(&self) -> &'static str {
        self.vernacular_property
    }

    /// Returns the maximum number of rows requested per query.
    pub const fn result_limit(&self) -> u32 {
        self.result_limit
    }
}

impl Default for Config {
    fn default() -> Self {
        WIKIDATA_CONFIG
    }
}

pub const WIKIDATA_CONFIG: Config = Config {
    taxon_id_property: "P846",
    vernacular_property: "P1843",
    result_limit: 1000,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config() {
        let config = Config::new("P123", "P456", 10);
        assert_eq!(config.taxon_id_property(), "P123");
        assert_eq!(config.vernacular_property(), "P456");
        assert_eq!(config.result_limit(), 10);
    }

    #[test]
    fn test_default_is_wikidata() {
        assert_eq!(Config::default(), WIKIDATA_CONFIG);
        assert_eq!(WIKIDATA_CONFIG.taxon_id_property(), "P846");
        assert_eq!(WIKIDATA_CONFIG.vernacular_property(), "P1843");
        assert_eq!(WIKIDATA_CONFIG.result_limit(), 1000);
    }
}
