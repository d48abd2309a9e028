//! DER encoding of ECDSA signatures
//!
//! JWS carries ECDSA signatures as the fixed-width concatenation `R || S`
//! (RFC 7518 §3.4), while the aws-lc-rs `*_ASN1` verification algorithms
//! expect the X9.62 structure:
//!
//! ```text
//! Ecdsa-Sig-Value ::= SEQUENCE {
//!     r  INTEGER,
//!     s  INTEGER
//! }
//! ```
//!
//! The RustCrypto `der` crate does the INTEGER work: `UintRef` strips leading
//! zero bytes and re-prepends a single `0x00` whenever the most significant
//! remaining byte has its high bit set, so a large R or S is never read back
//! as negative. Long-form lengths (P-521) come for free as well.

use crate::error::{Error, Result};
use der::{asn1::UintRef, Encode, Sequence};

#[derive(Sequence)]
struct EcdsaSigValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

fn der_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::SignatureMalformed(format!("der: {operation}: {details}"))
}

/// Transcode a raw `R || S` ECDSA signature into DER
pub(crate) fn ecdsa_signature_to_der(raw: &[u8]) -> Result<Vec<u8>> {
    if raw.is_empty() || raw.len() % 2 != 0 {
        return Err(Error::SignatureMalformed(format!(
            "raw ECDSA signature must split into two equal halves, got {} bytes",
            raw.len()
        )));
    }

    let (r, s) = raw.split_at(raw.len() / 2);

    let signature = EcdsaSigValue {
        r: UintRef::new(r).map_err(|e| der_error("failed to encode r", e))?,
        s: UintRef::new(s).map_err(|e| der_error("failed to encode s", e))?,
    };

    signature
        .to_der()
        .map_err(|e| der_error("failed to encode signature", e))
}
