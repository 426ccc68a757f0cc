use std::collections::BTreeMap;

use serde::Serialize;

/// A typed value bound to a query placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ParamValue {
    Long(i64),
    Str(String),
}

/// Bound parameters for [`Gateway::execute_query`](super::Gateway::execute_query).
///
/// Values only ever travel as typed bindings; nothing here is spliced into
/// the query text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryParams {
    #[serde(flatten)]
    values: BTreeMap<String, ParamValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_long(mut self, name: &str, value: i64) -> Self {
        self.values.insert(name.to_string(), ParamValue::Long(value));
        self
    }

    pub fn add_str(mut self, name: &str, value: &str) -> Self {
        self.values
            .insert(name.to_string(), ParamValue::Str(value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
