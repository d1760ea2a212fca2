//! Verification code generation

use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::domain::entities::verification_record::CODE_LENGTH;

/// Source of fresh verification codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a `CODE_LENGTH` character uppercase alphanumeric code
    fn generate(&self) -> String;
}

/// Codes derived from 16 bytes of OS entropy
///
/// The bytes are hashed and the first six hex digits kept, so every code
/// is drawn from `[0-9A-F]` and carries 24 bits of entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureCodeGenerator;

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self) -> String {
        let mut seed = [0u8; 16];
        OsRng.fill_bytes(&mut seed);

        let digest = hex::encode(Sha256::digest(seed));
        digest[..CODE_LENGTH].to_ascii_uppercase()
    }
}
