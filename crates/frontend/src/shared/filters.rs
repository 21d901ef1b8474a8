//! Filter form state shared by the report views
//!
//! A [`FilterSet`] holds one string per field of a fixed schema. Empty means
//! "not filtering"; only non-empty fields reach the query string.

/// Ordered field names a view filters on
pub type FilterSchema = &'static [&'static str];

/// Query parameters produced from a filter set, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "a filter query must be sent for the view to refresh"]
pub struct FilterQuery(Vec<(&'static str, String)>);

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `a=1&b=x%20y`, empty when there is nothing to filter on
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    schema: FilterSchema,
    values: Vec<String>,
}

impl FilterSet {
    pub fn new(schema: FilterSchema) -> Self {
        Self {
            schema,
            values: vec![String::new(); schema.len()],
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.position(key)
            .map(|i| self.values[i].as_str())
            .unwrap_or_default()
    }

    /// Returns false (and changes nothing) for keys outside the schema
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.position(key) {
            Some(i) => {
                self.values[i] = value.into();
                true
            }
            None => {
                log::warn!("ignoring unknown filter field '{}'", key);
                false
            }
        }
    }

    pub fn build_query(&self) -> FilterQuery {
        FilterQuery(
            self.schema
                .iter()
                .zip(&self.values)
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (*k, v.clone()))
                .collect(),
        )
    }

    /// Resets every field and hands back the (empty) query to refetch with
    pub fn clear(&mut self) -> FilterQuery {
        self.values.iter_mut().for_each(String::clear);
        self.build_query()
    }

    pub fn apply(&self) -> FilterQuery {
        self.build_query()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.schema.iter().position(|k| *k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: FilterSchema = &["nome_vendedor", "data_inicio", "data_fim", "comissao_paga"];

    #[test]
    fn test_build_query_keeps_only_non_empty_in_schema_order() {
        let mut filters = FilterSet::new(SCHEMA);
        assert!(filters.set_field("comissao_paga", "true"));
        assert!(filters.set_field("nome_vendedor", "Maria"));

        assert_eq!(
            filters.build_query().to_query_string(),
            "nome_vendedor=Maria&comissao_paga=true"
        );
    }

    #[test]
    fn test_single_field_query_string() {
        let mut filters = FilterSet::new(SCHEMA);
        let _ = filters.set_field("data_inicio", "2025-06-01");
        assert_eq!(filters.apply().to_query_string(), "data_inicio=2025-06-01");
    }

    #[test]
    fn test_query_string_is_encoded() {
        let mut filters = FilterSet::new(SCHEMA);
        let _ = filters.set_field("nome_vendedor", "João Silva");
        assert_eq!(
            filters.apply().to_query_string(),
            "nome_vendedor=Jo%C3%A3o%20Silva"
        );
    }

    #[test]
    fn test_clear_resets_everything_and_returns_empty_query() {
        let mut filters = FilterSet::new(SCHEMA);
        let _ = filters.set_field("nome_vendedor", "Maria");
        let _ = filters.set_field("data_fim", "2025-06-30");

        let query = filters.clear();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
        assert_eq!(filters, FilterSet::new(SCHEMA));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut filters = FilterSet::new(SCHEMA);
        assert!(!filters.set_field("pagina", "2"));
        assert_eq!(filters.get("pagina"), "");
        assert!(filters.build_query().is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut filters = FilterSet::new(SCHEMA);
        let _ = filters.set_field("comissao_paga", "false");
        assert_eq!(filters.apply(), filters.apply());
    }
}
