//! # jwtinspect - Decode, Inspect and Verify JWT Bearer Tokens
//!
//! **jwtinspect** is the token-handling core of an authentication pipeline. It
//! recognizes JWT compact serialization, decodes it into an immutable
//! [`Token`], verifies signatures against public keys supplied by the caller,
//! and exposes the payload through accessors that never fail on missing or
//! mistyped claims.
//!
//! Key discovery, issuer trust, audience and expiry policy are deliberately
//! left to the caller. The crate hands out the raw values those decisions
//! need (`kid`, `iss`, `aud`, `exp`, ...) and nothing more.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtinspect::{is_compatible_format, EcdsaCurve, PublicKey, Token};
//!
//! if !is_compatible_format(bearer) {
//!     return Ok(None); // some other kind of bearer token
//! }
//!
//! let token = Token::from_string(bearer)?;
//! let key = lookup_key(token.key_id())?;
//!
//! if token.is_signed_by(&key) {
//!     println!("subject: {:?}", token.subject());
//!     println!("expires: {:?}", token.expiration());
//! }
//! ```
//!
//! ## Two Failure Regimes
//!
//! - **Decoding** fails fast. [`Token::from_string`] returns an [`Error`] for
//!   any structural defect (segment count, Base64URL, JSON, missing `alg`), and
//!   [`Error::is_malformed_token`] is `true` for every such error.
//! - **Verification** never fails. [`Token::is_signed_by`] answers `false` for
//!   unsupported algorithms, key mismatches, malformed signatures and
//!   cryptographic mismatches alike, and logs the reason through `tracing`.
//!   Use [`Token::verify_signature`] to get the reason as a value.
//!
//! ## Algorithm Support
//!
//! | `alg` | Digest  | Scheme            | Key          |
//! |-------|---------|-------------------|--------------|
//! | RS256 | SHA-256 | RSASSA-PKCS1-v1_5 | RSA          |
//! | ES256 | SHA-256 | ECDSA             | EC P-256     |
//! | ES384 | SHA-384 | ECDSA             | EC P-384     |
//! | ES512 | SHA-512 | ECDSA             | EC P-521     |
//!
//! ECDSA signatures arrive in the JWS raw `R || S` form and are transcoded to
//! ASN.1 DER before verification with `aws-lc-rs`.
//!
//! ## Features
//!
//! - **`rsa`** (default): RS256
//! - **`ecdsa`** (default): ES256, ES384, ES512
//! - **`all-algorithms`**: both of the above
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518) - JSON Web Algorithms (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)

mod error;

// Internal modules
pub(crate) mod utils;

pub mod algorithm;
mod claims;
pub mod keys;
pub mod token;

// Public Interface
pub use algorithm::{AlgorithmId, DigestAlgorithm, SignatureScheme};
pub use error::{Error, Result};
pub use keys::{EcdsaCurve, EcdsaPublicKey, PublicKey, RsaPublicKey};
pub use token::{is_compatible_format, Segment, Token, TokenHeader};
