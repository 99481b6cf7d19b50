// src/session/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

/// Fresh session token from the OS RNG.
pub fn generate_session_token() -> String {
    generate_token(&mut OsRng, SESSION_TOKEN_BYTES)
}

/// URL-safe base64 without padding, so the token can sit in a cookie as-is.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// The store only ever sees this hash, never the raw cookie value.
pub fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
