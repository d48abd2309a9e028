//! Claim accessors
//!
//! Payload shape is chosen by the issuer, so every accessor here is total:
//! a missing claim, a claim of the wrong JSON type, or a payload that is not
//! a JSON object all read as absent (or empty) instead of failing. None of
//! these methods enforce policy; expiry, audience and issuer decisions stay
//! with the caller.

use crate::token::Token;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

impl Token {
    fn claim(&self, name: &str) -> Option<&Value> {
        self.payload().get(name)
    }

    /// Claim as an instant, when it is an integral number of epoch seconds
    ///
    /// Floats, strings and integers outside the `i64` or chrono range are
    /// absent.
    pub fn payload_instant(&self, name: &str) -> Option<DateTime<Utc>> {
        self.claim(name)
            .and_then(Value::as_i64)
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }

    /// Claim as a string, when it is a JSON string
    pub fn payload_string(&self, name: &str) -> Option<&str> {
        self.claim(name).and_then(Value::as_str)
    }

    /// Claim of any type rendered back to compact JSON
    ///
    /// Meant for logs and diagnostics. If rendering fails the result is a
    /// `"Bad JSON: ..."` placeholder, which is not machine-parseable.
    pub fn payload_value_as_text(&self, name: &str) -> Option<String> {
        self.claim(name).map(|value| {
            serde_json::to_string(value).unwrap_or_else(|e| format!("Bad JSON: {e}"))
        })
    }

    /// Every top-level claim, in the order the issuer wrote them
    pub fn payload_map(&self) -> Map<String, Value> {
        self.payload().as_object().cloned().unwrap_or_default()
    }

    /// Claim that may be a single string or an array of strings
    ///
    /// - absent: empty
    /// - string: one element
    /// - array: its string elements in order; other elements are dropped
    /// - anything else: empty
    pub fn payload_string_or_array(&self, name: &str) -> Vec<String> {
        match self.claim(name) {
            Some(Value::String(value)) => vec![value.clone()],
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    // Registered claims (RFC 7519 §4.1)

    /// Issuer (`iss`)
    pub fn issuer(&self) -> Option<&str> {
        self.payload_string("iss")
    }

    /// Subject (`sub`)
    pub fn subject(&self) -> Option<&str> {
        self.payload_string("sub")
    }

    /// Audience (`aud`), normalized to a list
    pub fn audience(&self) -> Vec<String> {
        self.payload_string_or_array("aud")
    }

    /// Expiration time (`exp`)
    pub fn expiration(&self) -> Option<DateTime<Utc>> {
        self.payload_instant("exp")
    }

    /// Not before (`nbf`)
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.payload_instant("nbf")
    }

    /// Issued at (`iat`)
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.payload_instant("iat")
    }

    /// JWT ID (`jti`)
    pub fn jwt_id(&self) -> Option<&str> {
        self.payload_string("jti")
    }
}
