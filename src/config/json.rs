//! Purpose: Hold an arbitrary JSON value decoded from a configuration string.
//! Exports: `Json`.
//! Role: Leaf value box; serializes transparently as its inner value.
//! Invariants: Starts as `null`; empty input leaves the value untouched.
//! Invariants: Malformed input yields `ErrorKind::Malformed` and keeps the prior value.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Decode;
use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

const DECODE_CONTEXT: &str = "config.json";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json {
    data: Value,
}

impl Json {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Value {
        &mut self.data
    }

    pub fn into_inner(self) -> Value {
        self.data
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// Parses `value` as JSON and replaces the held value.
    ///
    /// The empty string is treated as an absent setting: the call succeeds and
    /// the held value is left as it was. On malformed input the held value is
    /// also left as it was.
    pub fn decode(&mut self, value: &str) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        self.data = parse::from_str::<Value>(value).map_err(malformed)?;
        Ok(())
    }
}

impl Decode for Json {
    fn decode(&mut self, value: &str) -> Result<(), Error> {
        Json::decode(self, value)
    }
}

impl FromStr for Json {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut json = Json::new();
        json.decode(s)?;
        Ok(json)
    }
}

impl From<Value> for Json {
    fn from(data: Value) -> Self {
        Self { data }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        json.data
    }
}

fn malformed(err: serde_json::Error) -> Error {
    let hint = parse::hint_for_error(&err, DECODE_CONTEXT);
    Error::new(ErrorKind::Malformed)
        .with_message("invalid JSON value")
        .with_hint(hint)
        .with_position(err.line(), err.column())
        .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::Json;
    use crate::config::Decode;
    use crate::core::error::ErrorKind;
    use serde_json::{Value, json};

    #[test]
    fn starts_null() {
        assert!(Json::new().is_null());
    }

    #[test]
    fn empty_input_keeps_prior_value() {
        let mut holder = Json::from(json!({"keep": true}));
        holder.decode("").expect("empty is ok");
        assert_eq!(holder.data(), &json!({"keep": true}));
    }

    #[test]
    fn malformed_input_keeps_prior_value() {
        let mut holder = Json::new();
        holder.decode("[1,2]").expect("decode");
        let err = holder.decode("[1,").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert_eq!(holder.data(), &json!([1, 2]));
    }

    #[test]
    fn error_carries_position_and_hint() {
        let err = Json::new().decode("{not valid").unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert!(err.column().is_some());
        let hint = err.hint().expect("hint");
        assert!(hint.contains("parse category: syntax"));
        assert!(hint.contains("context: config.json"));
        assert!(!hint.contains("not valid"));
    }

    #[test]
    fn trait_object_dispatch_decodes() {
        let mut holder = Json::new();
        let field: &mut dyn Decode = &mut holder;
        field.decode("\"hello\"").expect("decode");
        assert_eq!(holder.into_inner(), Value::String("hello".to_string()));
    }
}
