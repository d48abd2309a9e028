use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// JWT header fields this crate recognizes
///
/// Only `alg`, `typ` and `kid` are read; every other header field is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenHeader {
    algorithm: String,
    token_type: Option<String>,
    key_id: Option<String>,
}

impl TokenHeader {
    /// Extract the recognized fields from a decoded header
    ///
    /// `alg` must be a JSON string. `typ` and `kid` are optional, and a value
    /// of any other JSON type is treated as absent rather than as an error.
    pub(crate) fn from_json(header: &Value) -> Result<Self> {
        let object = header.as_object().ok_or(Error::HeaderNotObject)?;

        let algorithm = object
            .get("alg")
            .and_then(Value::as_str)
            .ok_or(Error::HeaderMissingAlgorithm)?
            .to_string();

        Ok(Self {
            algorithm,
            token_type: optional_string(object, "typ"),
            key_id: optional_string(object, "kid"),
        })
    }

    /// Algorithm (`alg`), exactly as written in the token
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Token type (`typ`), typically `"JWT"`
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// Key ID (`kid`) for selecting the verification key
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}

fn optional_string(object: &Map<String, Value>, field: &str) -> Option<String> {
    object.get(field).and_then(Value::as_str).map(str::to_string)
}
