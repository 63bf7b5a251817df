use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a raw RGBA frame. Stable across runs, handy for comparing
/// rendered output without storing images.
pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rgba);
    hex::encode(hasher.finalize())
}
