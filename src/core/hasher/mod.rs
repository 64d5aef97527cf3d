//! # Hasher Module
//!
//! Digest computation for candidate strings.
//!
//! A candidate's digest is its MD5 hash rendered as canonical lowercase
//! hexadecimal text, fixed at 32 characters. That textual form is what the
//! digest file contains, so membership testing is a plain string comparison
//! against the target set.

/// Trait for candidate digest computation.
///
/// Implementations must be pure: the same candidate always produces the
/// same digest text, with no shared mutable state. The trait seam exists so
/// tests can substitute a cheap fake.
pub trait CandidateHasher: Send + Sync {
    /// Compute the digest of a candidate as lowercase hex text.
    fn digest_hex(&self, candidate: &str) -> String;
}

/// MD5 digest computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl Md5Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateHasher for Md5Hasher {
    fn digest_hex(&self, candidate: &str) -> String {
        // md5::Digest's LowerHex impl zero-pads every byte, so the output
        // is always exactly 32 characters
        format!("{:x}", md5::compute(candidate.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference vectors from RFC 1321, appendix A.5
    #[test]
    fn md5_matches_reference_vectors() {
        let hasher = Md5Hasher::new();
        assert_eq!(hasher.digest_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hasher.digest_hex("a"), "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(hasher.digest_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            hasher.digest_hex("message digest"),
            "f96b697d7cb7938d525a2f31aaf161d0"
        );
    }

    #[test]
    fn digest_is_always_32_lowercase_hex_chars() {
        let hasher = Md5Hasher::new();
        for candidate in ["", "a", "hunter2", "0", "zzzzzzzz"] {
            let digest = hasher.digest_hex(candidate);
            assert_eq!(digest.len(), 32);
            assert!(digest
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let hasher = Md5Hasher::new();
        assert_eq!(
            hasher.digest_hex("swordfish"),
            hasher.digest_hex("swordfish")
        );
    }
}
