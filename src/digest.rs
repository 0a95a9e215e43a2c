//! Password digest applied at write time.
//!
//! Plain SHA-256 hex, no salt, no work factor. This matches the service's
//! observed storage contract (the column always holds a digest, never the
//! plaintext) but is not a serious password scheme.

use sha2::{Digest, Sha256};

pub fn sha256_hex(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}
