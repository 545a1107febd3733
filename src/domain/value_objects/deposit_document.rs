use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::errors::DomainError;

/// Parsed deposit metadata document
///
/// Leaves are conceptually value lists: a bare scalar reads as a one-element
/// list and `null` reads as empty. Branches are mappings, or lists of
/// mappings for repeated records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct DepositDocument {
    fields: Map<String, Value>,
}

impl DepositDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DomainError::malformed(
                "<document>",
                "a mapping",
                describe(&other),
            )),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidDocument(e.to_string()))?;
        Self::from_value(value)
    }

    /// Top-level record view
    pub fn root(&self) -> Record<'_> {
        Record {
            fields: &self.fields,
            path: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Value> for DepositDocument {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Borrowed view over one mapping of the deposit document
///
/// Every accessor treats a missing key and `null` the same way, and reports
/// shape violations with the dotted path of the offending field.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    fields: &'a Map<String, Value>,
    path: String,
}

impl<'a> Record<'a> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// Key/value pairs in document order
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        let fields: &'a Map<String, Value> = self.fields;
        fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All leaf values of `key`, in order
    pub fn values(&self, key: &str) -> Result<Vec<&'a Value>, DomainError> {
        match self.fields.get(key) {
            Some(value) => self.leaf_values(key, value),
            None => Ok(Vec::new()),
        }
    }

    /// First leaf value of `key`, if any
    pub fn first(&self, key: &str) -> Result<Option<&'a Value>, DomainError> {
        Ok(self.values(key)?.into_iter().next())
    }

    /// First leaf value of `key` when it is a string
    pub fn first_str(&self, key: &str) -> Result<Option<&'a str>, DomainError> {
        Ok(self.first(key)?.and_then(Value::as_str))
    }

    /// Leaf values of an entry obtained from [`Record::entries`]
    pub fn leaf_values(&self, key: &str, value: &'a Value) -> Result<Vec<&'a Value>, DomainError> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match item {
                        Value::Null => {}
                        Value::Array(_) | Value::Object(_) => {
                            return Err(DomainError::malformed(
                                format!("{}[{}]", self.child_path(key), index),
                                "a value",
                                describe(item),
                            ));
                        }
                        _ => values.push(item),
                    }
                }
                Ok(values)
            }
            Value::Object(_) => Err(DomainError::malformed(
                self.child_path(key),
                "a value list",
                describe(value),
            )),
            _ => Ok(vec![value]),
        }
    }

    /// Sub-mapping at `key`; absent, `null` and `[]` all read as `None`
    pub fn mapping(&self, key: &str) -> Result<Option<Record<'a>>, DomainError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) if items.is_empty() => Ok(None),
            Some(Value::Object(fields)) => Ok(Some(Record {
                fields,
                path: self.child_path(key),
            })),
            Some(other) => Err(DomainError::malformed(
                self.child_path(key),
                "a mapping",
                describe(other),
            )),
        }
    }

    /// Repeated sub-records at `key`; a lone mapping reads as one record
    pub fn records(&self, key: &str) -> Result<Vec<Record<'a>>, DomainError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Object(fields)) => Ok(vec![Record {
                fields,
                path: self.child_path(key),
            }]),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter(|(_, item)| !item.is_null())
                .map(|(index, item)| match item {
                    Value::Object(fields) => Ok(Record {
                        fields,
                        path: format!("{}[{}]", self.child_path(key), index),
                    }),
                    other => Err(DomainError::malformed(
                        format!("{}[{}]", self.child_path(key), index),
                        "a mapping",
                        describe(other),
                    )),
                })
                .collect(),
            Some(other) => Err(DomainError::malformed(
                self.child_path(key),
                "a list of mappings",
                describe(other),
            )),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> DepositDocument {
        DepositDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_scalar_reads_as_single_value() {
        let d = doc(json!({"title": "Only", "pages": 12}));
        assert_eq!(d.root().values("title").unwrap(), vec![&json!("Only")]);
        assert_eq!(d.root().first("pages").unwrap(), Some(&json!(12)));
    }

    #[test]
    fn test_missing_and_null_are_empty() {
        let d = doc(json!({"abstract": null, "topic": [null]}));
        assert!(d.root().values("abstract").unwrap().is_empty());
        assert!(d.root().values("topic").unwrap().is_empty());
        assert!(d.root().values("nope").unwrap().is_empty());
    }

    #[test]
    fn test_mapping_where_list_expected_is_malformed() {
        let d = doc(json!({"title": {"main": ["x"]}}));
        let err = d.root().values("title").unwrap_err();
        assert_eq!(
            err,
            DomainError::malformed("title", "a value list", "a mapping")
        );
    }

    #[test]
    fn test_scalar_where_mapping_expected_is_malformed() {
        let d = doc(json!({"form": "paper"}));
        let err = d.root().mapping("form").unwrap_err();
        assert!(err.to_string().contains("form"));
        assert!(err.to_string().contains("expected a mapping"));
    }

    #[test]
    fn test_nested_paths_in_errors() {
        let d = doc(json!({"names": [{"affiliation": ["x"]}]}));
        let names = d.root().records("names").unwrap();
        let err = names[0].mapping("affiliation").unwrap_err();
        assert_eq!(
            err,
            DomainError::malformed("names[0].affiliation", "a mapping", "a list")
        );
    }

    #[test]
    fn test_records_accept_single_mapping() {
        let d = doc(json!({"related_items": {"type": ["host"]}}));
        let records = d.root().records("related_items").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_str("type").unwrap(), Some("host"));
    }

    #[test]
    fn test_document_must_be_mapping() {
        assert!(DepositDocument::from_value(json!(["a"])).is_err());
        assert!(DepositDocument::from_json_str("{not json").is_err());
    }
}
