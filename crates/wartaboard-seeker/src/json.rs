//! [`Record`] support for dynamic JSON rows.
//!
//! A JSON object is the closest thing to a structurally typed row: its keys
//! are only known at runtime. Insertion order is preserved, so the first
//! row's key order becomes the column order.

use std::borrow::Cow;

use serde_json::{Map, Value as Json};

use crate::traits::Record;
use crate::value::{Number, Value};

impl Record for Map<String, Json> {
    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        self.get(field).map_or(Value::None, json_value)
    }
}

fn json_value(json: &Json) -> Value<'_> {
    match json {
        Json::Null => Value::None,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else {
                n.as_f64()
                    .map_or(Value::None, |f| Value::Number(Number::F64(f)))
            }
        }
        Json::String(s) => Value::String(Cow::Borrowed(s.as_str())),
        nested @ (Json::Array(_) | Json::Object(_)) => {
            Value::String(Cow::Owned(nested.to_string()))
        }
    }
}
