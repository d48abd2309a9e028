pub(crate) mod base64url;

#[cfg(feature = "ecdsa")]
pub(crate) mod der;
