//! OpenSSL `EVP_BytesToKey` key + IV derivation (MD5 digest, one iteration).
//!
//! ```text
//! D_0 = ""
//! D_i = MD5(D_{i-1} || passphrase || salt)
//! key || iv = D_1 || D_2 || D_3   (first 48 bytes)
//! ```
//!
//! MD5 here is a compatibility requirement of the salted envelope, not a
//! choice of hash for new designs.

use md5::{Digest, Md5};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-CBC initialisation vector.
pub const IV_LEN: usize = 16;

/// Byte length of the random salt stored in the envelope header.
pub const SALT_LEN: usize = 8;

/// AES key and IV derived from a passphrase and salt. Zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    pub key: [u8; KEY_LEN],
    pub iv: [u8; IV_LEN],
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive an AES-256 key and CBC IV from `passphrase` and `salt`.
pub fn derive_key_iv(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut material = [0u8; KEY_LEN + IV_LEN];
    let mut previous: Vec<u8> = Vec::new();
    let mut filled = 0;

    while filled < material.len() {
        let mut hasher = Md5::new();
        hasher.update(&previous);
        hasher.update(passphrase);
        hasher.update(salt);
        let block = hasher.finalize();

        let take = (material.len() - filled).min(block.len());
        material[filled..filled + take].copy_from_slice(&block[..take]);
        filled += take;

        previous.zeroize();
        previous.extend_from_slice(&block);
    }

    let mut derived = DerivedKey {
        key: [0u8; KEY_LEN],
        iv: [0u8; IV_LEN],
    };
    derived.key.copy_from_slice(&material[..KEY_LEN]);
    derived.iv.copy_from_slice(&material[KEY_LEN..]);

    material.zeroize();
    previous.zeroize();
    derived
}
