//! Polymorphic JSON values for fields whose shape varies with server state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A JSON value that keeps `null`, `[]` and `{}` apart.
///
/// Custom project fields, for instance, arrive as an object when set, an
/// empty array when the project has none, or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum AnyValue {
    #[default]
    Null,
    Object(Map<String, Value>),
    Array(Vec<Value>),
    Scalar(Scalar),
}

/// A JSON primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    String(String),
}

impl AnyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AnyValue::Null)
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            AnyValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            AnyValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for AnyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AnyValue::Null,
            Value::Bool(b) => AnyValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => AnyValue::Scalar(Scalar::Number(n)),
            Value::String(s) => AnyValue::Scalar(Scalar::String(s)),
            Value::Array(items) => AnyValue::Array(items),
            Value::Object(map) => AnyValue::Object(map),
        }
    }
}

impl From<AnyValue> for Value {
    fn from(value: AnyValue) -> Self {
        match value {
            AnyValue::Null => Value::Null,
            AnyValue::Object(map) => Value::Object(map),
            AnyValue::Array(items) => Value::Array(items),
            AnyValue::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            AnyValue::Scalar(Scalar::Number(n)) => Value::Number(n),
            AnyValue::Scalar(Scalar::String(s)) => Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default)]
        fields: AnyValue,
    }

    fn fields(json: &str) -> AnyValue {
        serde_json::from_str::<Holder>(json).unwrap().fields
    }

    #[test]
    fn keeps_null_empty_array_and_empty_object_apart() {
        let null = fields(r#"{"fields": null}"#);
        let array = fields(r#"{"fields": []}"#);
        let object = fields(r#"{"fields": {}}"#);

        assert!(null.is_null());
        assert_eq!(array.as_array().map(<[Value]>::len), Some(0));
        assert_eq!(object.as_object().map(Map::len), Some(0));
        assert_ne!(null, array);
        assert_ne!(array, object);
        assert_ne!(null, object);
    }

    #[test]
    fn populated_object_is_preserved() {
        let value = fields(r#"{"fields": {"priority": "high", "budget": 10}}"#);
        let map = value.as_object().unwrap();
        assert_eq!(map["priority"], "high");
        assert_eq!(map["budget"], 10);
    }

    #[test]
    fn scalars_and_missing_field() {
        assert_eq!(fields(r#"{"fields": "x"}"#).as_str(), Some("x"));
        assert_eq!(
            fields(r#"{"fields": true}"#),
            AnyValue::Scalar(Scalar::Bool(true))
        );
        assert!(fields("{}").is_null());
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        let value = fields(r#"{"fields": []}"#);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[]");
    }
}
