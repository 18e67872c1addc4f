use crate::VernacularError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingValue {
    value: String,
}

impl BindingValue {
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One result row: a vernacular name and the language tag of that name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    vernacular: BindingValue,
    lang: BindingValue,
}

impl Binding {
    /// Constructs a new `Binding` from a vernacular name and a language tag.
    pub fn new<S1: Into<String>, S2: Into<String>>(vernacular: S1, lang: S2) -> Self {
        Self {
            vernacular: BindingValue {
                value: vernacular.into(),
            },
            lang: BindingValue { value: lang.into() },
        }
    }

    /// Returns the vernacular name.
    pub fn vernacular(&self) -> &str {
        self.vernacular.value()
    }

    /// Returns the language tag.
    pub fn lang(&self) -> &str {
        self.lang.value()
    }

    /// Extracts the bindings from a SPARQL JSON result document.
    /// A document without `results.bindings` has no bindings.
    /// # Errors
    /// Returns an error if a binding lacks `vernacular.value` or `lang.value`.
    pub fn from_results_json(mut j: Value) -> Result<Vec<Binding>, VernacularError> {
        let bindings = match j.pointer_mut("/results/bindings").map(Value::take) {
            Some(bindings) if !bindings.is_null() => bindings,
            _ => return Ok(vec![]),
        };
        let bindings = serde_json::from_value(bindings)?;
        Ok(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_binding() {
        let b = Binding::new("Maïs", "fr");
        assert_eq!(b.vernacular(), "Maïs");
        assert_eq!(b.lang(), "fr");
    }

    #[test]
    fn test_from_results_json() {
        let v = std::fs::read_to_string("test_data/zea_mays.json").unwrap();
        let v: Value = serde_json::from_str(&v).unwrap();
        let bindings = Binding::from_results_json(v).unwrap();
        assert_eq!(bindings.len(), 5);
        assert_eq!(bindings[0], Binding::new("Maïs", "fr"));
        assert_eq!(bindings[1].lang(), "en");
    }

    #[test]
    fn test_from_results_json_ignores_extra_fields() {
        let j = json!({"results": {"bindings": [
            {"vernacular": {"type": "literal", "xml:lang": "de", "value": "Mais"},
             "lang": {"type": "literal", "value": "de"}}
        ]}});
        let bindings = Binding::from_results_json(j).unwrap();
        assert_eq!(bindings, vec![Binding::new("Mais", "de")]);
    }

    #[test]
    fn test_from_results_json_missing() {
        assert!(Binding::from_results_json(json!({})).unwrap().is_empty());
        assert!(Binding::from_results_json(json!({"results": {}}))
            .unwrap()
            .is_empty());
        assert!(Binding::from_results_json(json!({"results": {"bindings": null}}))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_from_results_json_malformed_binding() {
        let j = json!({"results": {"bindings": [{"vernacular": {"value": "Maïs"}}]}});
        match Binding::from_results_json(j) {
            Err(VernacularError::SerdeJson(_)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
