//! Field declarations for (de)serializing transactions to and from flat JSON
//! objects.
//!
//! `POST /books` does not go through this schema; stored records are kept
//! exactly as posted. The schema renders the `Book` OpenAPI component and is
//! the typed entry point for callers that want a [`Book`] out of a mapping.

use serde_json::{json, Map, Value};
use thiserror::Error;
use time::{format_description::well_known::Iso8601, Date};

use super::models::{Book, Transaction};

/// Primitive kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Number,
    /// Calendar date rendered as `YYYY-MM-DD`
    Date,
}

impl FieldKind {
    pub const fn describe(&self) -> &'static str {
        match self {
            FieldKind::Str => "string",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        }
    }

    /// OpenAPI schema for a value of this kind
    pub fn openapi(&self) -> Value {
        match self {
            FieldKind::Str => json!({ "type": "string" }),
            FieldKind::Number => json!({ "type": "number" }),
            FieldKind::Date => json!({ "type": "string", "format": "date" }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

const TRANSACTION_FIELDS: [Field; 4] = [
    Field {
        name: "name",
        kind: FieldKind::Str,
    },
    Field {
        name: "amount",
        kind: FieldKind::Number,
    },
    Field {
        name: "created_at",
        kind: FieldKind::Date,
    },
    Field {
        name: "type",
        kind: FieldKind::Str,
    },
];

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' must be a {expected}, got {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{0}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(&'static str),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{0}' is set by the record itself and cannot be loaded")]
    ReadOnlyField(&'static str),
}

/// Typed values of the declared fields found in a loaded mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFields {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub created_at: Option<Date>,
    pub kind: Option<String>,
}

/// Schema shared by every transaction type.
pub struct TransactionSchema;

impl TransactionSchema {
    pub fn fields() -> &'static [Field] {
        &TRANSACTION_FIELDS
    }

    /// Serialize a transaction into a flat mapping of the declared fields.
    pub fn dump(transaction: &Transaction) -> Map<String, Value> {
        let created_at = transaction
            .created_at
            .date()
            .format(&Iso8601::DATE)
            .map(Value::String)
            .unwrap_or(Value::Null);

        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(transaction.name.clone()));
        map.insert("amount".to_string(), Value::from(transaction.amount));
        map.insert("created_at".to_string(), created_at);
        map.insert(
            "type".to_string(),
            Value::String(transaction.kind.as_str().to_string()),
        );
        map
    }

    /// Check a mapping against the declared fields and extract typed values.
    ///
    /// Unknown keys are rejected. Declared fields are all optional here;
    /// record-specific hooks decide what is required.
    pub fn load(value: &Value) -> Result<TransactionFields, SchemaError> {
        let map = value
            .as_object()
            .ok_or_else(|| SchemaError::NotAnObject(json_type(value)))?;

        if let Some(unknown) = map
            .keys()
            .find(|key| !TRANSACTION_FIELDS.iter().any(|field| field.name == key.as_str()))
        {
            return Err(SchemaError::UnknownField(unknown.clone()));
        }

        let mut fields = TransactionFields::default();
        for field in &TRANSACTION_FIELDS {
            let Some(raw) = map.get(field.name) else {
                continue;
            };
            match field.name {
                "name" => fields.name = Some(load_str(field, raw)?),
                "amount" => fields.amount = Some(load_number(field, raw)?),
                "created_at" => fields.created_at = Some(load_date(field, raw)?),
                "type" => fields.kind = Some(load_str(field, raw)?),
                _ => {}
            }
        }

        Ok(fields)
    }

    /// OpenAPI object schema listing the declared fields
    pub fn openapi_component() -> Value {
        let properties: Map<String, Value> = TRANSACTION_FIELDS
            .iter()
            .map(|field| (field.name.to_string(), field.kind.openapi()))
            .collect();

        json!({
            "type": "object",
            "properties": properties,
        })
    }
}

/// Schema for [`Book`] records.
pub struct BookSchema;

impl BookSchema {
    pub fn dump(book: &Book) -> Map<String, Value> {
        TransactionSchema::dump(book.transaction())
    }

    /// Load a mapping and build a [`Book`] from it.
    pub fn load(value: &Value) -> Result<Book, SchemaError> {
        let fields = TransactionSchema::load(value)?;
        Self::make_book(fields)
    }

    /// OpenAPI schema for a stored book; `name` and `amount` are the seeded keys
    pub fn openapi_component() -> Value {
        let mut component = TransactionSchema::openapi_component();
        component["required"] = json!(["name", "amount"]);
        component
    }

    fn make_book(fields: TransactionFields) -> Result<Book, SchemaError> {
        if fields.created_at.is_some() {
            return Err(SchemaError::ReadOnlyField("created_at"));
        }
        if fields.kind.is_some() {
            return Err(SchemaError::ReadOnlyField("type"));
        }

        let name = fields.name.ok_or(SchemaError::MissingField("name"))?;
        let amount = fields.amount.ok_or(SchemaError::MissingField("amount"))?;

        Ok(Book::new(name, amount))
    }
}

fn load_str(field: &Field, raw: &Value) -> Result<String, SchemaError> {
    raw.as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_type(field, raw))
}

fn load_number(field: &Field, raw: &Value) -> Result<f64, SchemaError> {
    raw.as_f64().ok_or_else(|| invalid_type(field, raw))
}

fn load_date(field: &Field, raw: &Value) -> Result<Date, SchemaError> {
    let text = raw.as_str().ok_or_else(|| invalid_type(field, raw))?;
    Date::parse(text, &Iso8601::DATE).map_err(|_| SchemaError::InvalidDate(field.name))
}

fn invalid_type(field: &Field, raw: &Value) -> SchemaError {
    SchemaError::InvalidType {
        field: field.name,
        expected: field.kind.describe(),
        found: json_type(raw),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::models::TransactionType;
    use time::{Month, OffsetDateTime};

    #[test]
    fn declares_four_fields() {
        let names: Vec<_> = TransactionSchema::fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "amount", "created_at", "type"]);
        assert_eq!(TransactionSchema::fields()[2].kind, FieldKind::Date);
    }

    #[test]
    fn dump_renders_declared_fields() {
        let mut tx = Transaction::new("Dune", 3.5, TransactionType::Book);
        tx.created_at = Date::from_calendar_date(2024, Month::March, 9)
            .unwrap()
            .midnight()
            .assume_utc();

        let dumped = TransactionSchema::dump(&tx);
        assert_eq!(
            Value::Object(dumped),
            json!({
                "name": "Dune",
                "amount": 3.5,
                "created_at": "2024-03-09",
                "type": "BOOK",
            })
        );
    }

    #[test]
    fn book_dump_uses_today() {
        let dumped = BookSchema::dump(&Book::new("Dune", 3.0));
        let today = OffsetDateTime::now_utc().date();
        let created_at = dumped["created_at"].as_str().unwrap();
        let parsed = Date::parse(created_at, &Iso8601::DATE).unwrap();
        assert!(parsed == today || parsed == today.previous_day().unwrap());
        assert_eq!(dumped["type"], "BOOK");
    }

    #[test]
    fn load_book_runs_post_load_hook() {
        let book = BookSchema::load(&json!({"name": "Dune", "amount": 3})).unwrap();
        assert_eq!(book.name(), "Dune");
        assert_eq!(book.amount(), 3.0);
        assert_eq!(book.transaction().kind, TransactionType::Book);
    }

    #[test]
    fn load_parses_dates_and_type() {
        let fields =
            TransactionSchema::load(&json!({"created_at": "2024-03-09", "type": "BOOK"})).unwrap();
        assert_eq!(
            fields.created_at,
            Some(Date::from_calendar_date(2024, Month::March, 9).unwrap())
        );
        assert_eq!(fields.kind.as_deref(), Some("BOOK"));
        assert_eq!(fields.name, None);
    }

    #[test]
    fn load_rejects_wrong_shapes() {
        assert_eq!(
            TransactionSchema::load(&json!(42)),
            Err(SchemaError::NotAnObject("number"))
        );
        assert_eq!(
            TransactionSchema::load(&json!({"title": "Dune"})),
            Err(SchemaError::UnknownField("title".to_string()))
        );
        assert_eq!(
            TransactionSchema::load(&json!({"amount": "three"})),
            Err(SchemaError::InvalidType {
                field: "amount",
                expected: "number",
                found: "string",
            })
        );
        assert_eq!(
            TransactionSchema::load(&json!({"created_at": "yesterday"})),
            Err(SchemaError::InvalidDate("created_at"))
        );
    }

    #[test]
    fn book_hook_requires_name_and_amount() {
        assert_eq!(
            BookSchema::load(&json!({"amount": 3})),
            Err(SchemaError::MissingField("name"))
        );
        assert_eq!(
            BookSchema::load(&json!({"name": "Dune"})),
            Err(SchemaError::MissingField("amount"))
        );
    }

    #[test]
    fn book_hook_refuses_record_owned_fields() {
        let err = BookSchema::load(&json!({"name": "Dune", "amount": 3, "type": "BOOK"}))
            .unwrap_err();
        assert_eq!(err, SchemaError::ReadOnlyField("type"));
        assert_eq!(
            err.to_string(),
            "field 'type' is set by the record itself and cannot be loaded"
        );
    }

    #[test]
    fn openapi_component_lists_fields() {
        let component = BookSchema::openapi_component();
        assert_eq!(component["type"], "object");
        assert_eq!(component["properties"]["created_at"]["format"], "date");
        assert_eq!(component["required"], json!(["name", "amount"]));
    }
}
