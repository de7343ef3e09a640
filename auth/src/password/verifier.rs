use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::PasswordError;

/// Argon2id parameters for hashing and verification.
///
/// Stored hashes carry no parameter header (the blob is just salt + digest),
/// so verification only works under the same options the hash was created
/// with. Options are supplied at construction, never inferred from the blob.
#[derive(Debug, Clone)]
pub struct HashingOptions {
    /// Salt length in bytes (blob prefix)
    pub salt_size: usize,
    /// Digest length in bytes (blob suffix)
    pub hash_size: usize,
    /// Number of passes over memory
    pub iterations: u32,
    /// Memory cost in KiB
    pub memory_size_kb: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HashingOptions {
    fn default() -> Self {
        Self {
            salt_size: 16,
            hash_size: 32,
            iterations: 4,
            memory_size_kb: 65536,
            parallelism: 1,
        }
    }
}

/// Password verification against `base64(salt || digest)` blobs.
///
/// Stateless apart from its immutable options; safe to share across
/// request handlers.
pub struct PasswordVerifier {
    options: HashingOptions,
}

impl PasswordVerifier {
    pub fn new(options: HashingOptions) -> Self {
        Self { options }
    }

    /// Verify a plaintext password against a stored hash blob.
    ///
    /// Never panics and never errors: empty inputs, non-base64 blobs and
    /// wrong-length blobs all verify as false.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Base64 blob of salt followed by digest
    ///
    /// # Returns
    /// True only when the recomputed digest matches the stored one.
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        if password.trim().is_empty() || stored_hash.trim().is_empty() {
            return false;
        }

        let combined = match STANDARD.decode(stored_hash) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        if combined.len() != self.options.salt_size + self.options.hash_size {
            return false;
        }

        let (salt, expected) = combined.split_at(self.options.salt_size);

        let recomputed = match self.digest(password, salt) {
            Ok(digest) => digest,
            Err(_) => return false,
        };

        constant_time_equals(expected, &recomputed)
    }

    /// Hash a plaintext password for storage.
    ///
    /// Generates a random salt and returns `base64(salt || digest)`.
    ///
    /// # Errors
    /// * `InvalidParams` - Options outside the Argon2 parameter ranges
    /// * `HashingFailed` - Key derivation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = vec![0u8; self.options.salt_size];
        OsRng.fill_bytes(&mut salt);

        let digest = self.digest(password, &salt)?;

        let mut combined = salt;
        combined.extend_from_slice(&digest);
        Ok(STANDARD.encode(combined))
    }

    /// Derive a digest over the password with the configured options.
    fn digest(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, PasswordError> {
        let params = Params::new(
            self.options.memory_size_kb,
            self.options.iterations,
            self.options.parallelism,
            Some(self.options.hash_size),
        )
        .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut output = vec![0u8; self.options.hash_size];
        argon2
            .hash_password_into(password.as_bytes(), salt, &mut output)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(output)
    }
}

/// XOR-accumulate comparison over equal-length buffers.
///
/// Unequal lengths short-circuit before the loop; they reveal nothing the
/// blob length check has not already revealed.
fn constant_time_equals(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut difference = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        difference |= x ^ y;
    }

    difference == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low-cost parameters so the test suite stays fast; one test below
    // exercises the production defaults.
    fn test_options() -> HashingOptions {
        HashingOptions {
            salt_size: 16,
            hash_size: 32,
            iterations: 1,
            memory_size_kb: 1024,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let verifier = PasswordVerifier::new(test_options());
        let hash = verifier.hash("my_secure_password").expect("hash failed");

        assert!(verifier.verify("my_secure_password", &hash));
        assert!(!verifier.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_and_verify_default_options() {
        let verifier = PasswordVerifier::new(HashingOptions::default());
        let hash = verifier.hash("senha123").expect("hash failed");

        assert!(verifier.verify("senha123", &hash));
    }

    #[test]
    fn test_verify_empty_inputs() {
        let verifier = PasswordVerifier::new(test_options());
        let hash = verifier.hash("password").expect("hash failed");

        assert!(!verifier.verify("", &hash));
        assert!(!verifier.verify("   ", &hash));
        assert!(!verifier.verify("password", ""));
        assert!(!verifier.verify("password", "   "));
    }

    #[test]
    fn test_verify_non_base64_hash() {
        let verifier = PasswordVerifier::new(test_options());
        assert!(!verifier.verify("password", "not-valid-base64!!!"));
    }

    #[test]
    fn test_verify_wrong_length_blob() {
        let verifier = PasswordVerifier::new(test_options());
        // Valid base64, but decodes to fewer bytes than salt_size + hash_size
        let short_blob = STANDARD.encode([0u8; 10]);
        assert!(!verifier.verify("password", &short_blob));

        let long_blob = STANDARD.encode([0u8; 64]);
        assert!(!verifier.verify("password", &long_blob));
    }

    #[test]
    fn test_hashes_are_salted() {
        let verifier = PasswordVerifier::new(test_options());
        let first = verifier.hash("password").expect("hash failed");
        let second = verifier.hash("password").expect("hash failed");

        assert_ne!(first, second);
        assert!(verifier.verify("password", &first));
        assert!(verifier.verify("password", &second));
    }

    #[test]
    fn test_verify_under_mismatched_options() {
        let verifier = PasswordVerifier::new(test_options());
        let hash = verifier.hash("password").expect("hash failed");

        let other = PasswordVerifier::new(HashingOptions {
            iterations: 2,
            ..test_options()
        });
        assert!(!other.verify("password", &hash));
    }
}
