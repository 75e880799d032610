use serde_json::{Map, Value, json};
use std::fmt;

/// Static description of a flow record: field names as they appear on the wire.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [Field],
}

#[derive(Debug)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub problem: Problem,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Missing,
    WrongType { expected: &'static str },
    Blank,
    NotAnObject,
}

/// Non-empty list of violations found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Schema {
    pub fn validate(&self, value: &Value) -> Result<(), Violations> {
        let Some(object) = value.as_object() else {
            return Err(Violations(vec![Violation {
                field: self.name.to_string(),
                problem: Problem::NotAnObject,
            }]));
        };

        let violations: Vec<Violation> = self
            .fields
            .iter()
            .filter_map(|field| {
                field.check(object).map(|problem| Violation {
                    field: field.name.to_string(),
                    problem,
                })
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(violations))
        }
    }

    /// Closed JSON Schema document, as published in the flow catalog.
    pub fn to_json_schema(&self) -> Value {
        let mut document = self.to_response_format_schema();
        document["additionalProperties"] = Value::Bool(false);
        document
    }

    /// Document declared to the provider as the expected output shape.
    /// Gemini's OpenAI-compatible endpoint rejects `additionalProperties`,
    /// so it is left out here; extra fields are dropped on deserialization.
    pub fn to_response_format_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|field| (field.name.to_string(), field.to_json_schema()))
            .collect();
        let required: Vec<&str> = self.fields.iter().map(|field| field.name).collect();

        json!({
            "type": "object",
            "description": self.description,
            "properties": properties,
            "required": required,
        })
    }
}

impl Field {
    fn check(&self, object: &Map<String, Value>) -> Option<Problem> {
        let value = match object.get(self.name) {
            None | Some(Value::Null) => return Some(Problem::Missing),
            Some(value) => value,
        };

        match self.kind {
            FieldKind::Text => match value.as_str() {
                None => Some(Problem::WrongType { expected: "string" }),
                Some(text) if text.trim().is_empty() => Some(Problem::Blank),
                Some(_) => None,
            },
            FieldKind::TextList => match value.as_array() {
                None => Some(Problem::WrongType {
                    expected: "array of strings",
                }),
                Some(items) => items.iter().find_map(|item| match item.as_str() {
                    None => Some(Problem::WrongType {
                        expected: "array of strings",
                    }),
                    Some(text) if text.trim().is_empty() => Some(Problem::Blank),
                    Some(_) => None,
                }),
            },
        }
    }

    fn to_json_schema(&self) -> Value {
        match self.kind {
            FieldKind::Text => json!({
                "type": "string",
                "description": self.description,
            }),
            FieldKind::TextList => json!({
                "type": "array",
                "items": { "type": "string" },
                "description": self.description,
            }),
        }
    }
}

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.field.as_str()).collect()
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::Missing => write!(f, "field `{}` is required", self.field),
            Problem::WrongType { expected } => {
                write!(f, "field `{}` must be {}", self.field, expected)
            }
            Problem::Blank => write!(f, "field `{}` must not be blank", self.field),
            Problem::NotAnObject => write!(f, "`{}` must be a JSON object", self.field),
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static REPORT: Schema = Schema {
        name: "report",
        description: "A test record",
        fields: &[
            Field {
                name: "summary",
                kind: FieldKind::Text,
                description: "Short summary",
            },
            Field {
                name: "items",
                kind: FieldKind::TextList,
                description: "Listed items",
            },
        ],
    };

    #[test]
    fn test_valid_record() {
        let value = json!({"summary": "ok", "items": ["a", "b"]});
        assert_eq!(REPORT.validate(&value), Ok(()));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let value = json!({"summary": "ok", "items": []});
        assert!(REPORT.validate(&value).is_ok());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let value = json!({"summary": "ok", "items": [], "confidence": 0.4});
        assert!(REPORT.validate(&value).is_ok());
    }

    #[test]
    fn test_missing_and_null_fields() {
        let violations = REPORT.validate(&json!({"summary": null})).unwrap_err();

        assert_eq!(violations.fields(), vec!["summary", "items"]);
        assert!(violations.iter().all(|v| v.problem == Problem::Missing));
    }

    #[test]
    fn test_blank_text() {
        let violations = REPORT
            .validate(&json!({"summary": "  \n", "items": ["x"]}))
            .unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.to_string(),
            "field `summary` must not be blank"
        );
    }

    #[test]
    fn test_wrong_types() {
        let violations = REPORT
            .validate(&json!({"summary": 12, "items": "not a list"}))
            .unwrap_err();

        assert_eq!(
            violations.to_string(),
            "field `summary` must be string; field `items` must be array of strings"
        );
    }

    #[test]
    fn test_list_with_non_string_item() {
        let violations = REPORT
            .validate(&json!({"summary": "ok", "items": ["fine", 3]}))
            .unwrap_err();

        assert_eq!(
            violations.iter().next().map(|v| &v.problem),
            Some(&Problem::WrongType {
                expected: "array of strings"
            })
        );
    }

    #[test]
    fn test_non_object() {
        let violations = REPORT.validate(&json!(["summary"])).unwrap_err();
        assert_eq!(violations.to_string(), "`report` must be a JSON object");
    }

    #[test]
    fn test_json_schema_document() {
        let schema = REPORT.to_json_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["summary", "items"]));
        assert_eq!(schema["properties"]["summary"]["type"], "string");
        assert_eq!(schema["properties"]["items"]["items"]["type"], "string");
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_response_format_schema_omits_additional_properties() {
        let schema = REPORT.to_response_format_schema();

        assert_eq!(schema["required"], json!(["summary", "items"]));
        assert!(schema.get("additionalProperties").is_none());
    }
}
