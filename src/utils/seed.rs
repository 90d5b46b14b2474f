//! Deterministic seed digits for salted code obfuscation.

use sha2::{Digest, Sha256};

/// Derives a `padding`-digit decimal string from `n` and `salt`.
///
/// The digits come from the SHA-256 digest of the decimal form of `n`
/// concatenated with the salt: the first `padding` hex characters are read
/// as a hex integer and reduced modulo `10^padding`. A result of exactly
/// zero is forced to 1, and the value is padded with trailing zeros to
/// exactly `padding` digits. Both rules keep the leading digit non-zero,
/// so a composite number prefixed with these digits keeps a fixed decimal
/// width and the suffix stays recoverable by truncation.
///
/// Stable across runs for the same `(n, salt)` pair. `padding` must be
/// between 1 and 16; the configuration layer enforces this.
pub fn seed_digits(n: u64, salt: &str, padding: u32) -> String {
    let digest = hex::encode(Sha256::digest(format!("{n}{salt}")));
    let prefix = &digest[..padding as usize];

    // At most 16 hex characters, so the value always fits in a u64.
    let value = u64::from_str_radix(prefix, 16).expect("digest prefix is valid hex");

    let mut value = value % 10u64.pow(padding);
    if value == 0 {
        value = 1;
    }

    format!("{value:0<width$}", width = padding as usize)
}
