//! Token and key helpers shared by the integration tests
//!
//! Keys are generated fresh with aws-lc-rs (ECDSA) and the `rsa` crate (RSA),
//! and tokens are signed the way a JWS issuer signs them: RSA PKCS#1 v1.5
//! signatures as-is, ECDSA signatures in the fixed-width `R || S` form.

#![allow(dead_code)]

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{
    EcdsaKeyPair, EcdsaSigningAlgorithm, KeyPair, RsaKeyPair, ECDSA_P256_SHA256_FIXED_SIGNING,
    ECDSA_P384_SHA384_FIXED_SIGNING, ECDSA_P521_SHA512_FIXED_SIGNING, RSA_PKCS1_SHA256,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jwtinspect::{EcdsaCurve, PublicKey};
use rsa::{pkcs8::EncodePrivateKey, RsaPrivateKey};

pub fn b64(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// `base64url(header).base64url(payload)`
pub fn signing_input(header: &str, payload: &str) -> String {
    format!("{}.{}", b64(header), b64(payload))
}

/// Send test logs to the test writer; repeated calls are harmless
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtinspect=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// ============================================================================
// RSA
// ============================================================================

pub fn rsa_keypair() -> RsaKeyPair {
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
    let pkcs8_doc = private_key
        .to_pkcs8_der()
        .expect("Failed to serialize to PKCS#8");
    RsaKeyPair::from_pkcs8(pkcs8_doc.as_bytes()).expect("Failed to load key")
}

pub fn rsa_public_key(keypair: &RsaKeyPair) -> PublicKey {
    PublicKey::rsa(keypair.public_key().as_ref().to_vec())
}

pub fn rsa_sign(keypair: &RsaKeyPair, data: &[u8]) -> Vec<u8> {
    let rng = SystemRandom::new();
    let mut signature = vec![0u8; keypair.public_modulus_len()];
    keypair
        .sign(&RSA_PKCS1_SHA256, &rng, data, &mut signature)
        .expect("Signing failed");
    signature
}

pub fn rs256_token(keypair: &RsaKeyPair, header: &str, payload: &str) -> String {
    let input = signing_input(header, payload);
    let signature = rsa_sign(keypair, input.as_bytes());
    format!("{input}.{}", b64(signature))
}

// ============================================================================
// ECDSA
// ============================================================================

fn ecdsa_signing_algorithm(curve: EcdsaCurve) -> &'static EcdsaSigningAlgorithm {
    match curve {
        EcdsaCurve::P256 => &ECDSA_P256_SHA256_FIXED_SIGNING,
        EcdsaCurve::P384 => &ECDSA_P384_SHA384_FIXED_SIGNING,
        EcdsaCurve::P521 => &ECDSA_P521_SHA512_FIXED_SIGNING,
    }
}

pub fn ecdsa_keypair(curve: EcdsaCurve) -> EcdsaKeyPair {
    let rng = SystemRandom::new();
    let alg = ecdsa_signing_algorithm(curve);
    let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &rng).expect("Failed to generate key");
    EcdsaKeyPair::from_pkcs8(alg, pkcs8.as_ref()).expect("Failed to parse key")
}

pub fn ecdsa_public_key(keypair: &EcdsaKeyPair, curve: EcdsaCurve) -> PublicKey {
    PublicKey::ecdsa(keypair.public_key().as_ref().to_vec(), curve)
}

/// Raw `R || S` signature
pub fn ecdsa_sign(keypair: &EcdsaKeyPair, data: &[u8]) -> Vec<u8> {
    let rng = SystemRandom::new();
    keypair
        .sign(&rng, data)
        .expect("Signing failed")
        .as_ref()
        .to_vec()
}

pub fn es_token(keypair: &EcdsaKeyPair, header: &str, payload: &str) -> String {
    let input = signing_input(header, payload);
    let signature = ecdsa_sign(keypair, input.as_bytes());
    format!("{input}.{}", b64(signature))
}

/// Replace the payload segment, keeping header and signature
pub fn tamper_payload(token: &str, payload: &str) -> String {
    let parts: Vec<&str> = token.split('.').collect();
    format!("{}.{}.{}", parts[0], b64(payload), parts[2])
}
