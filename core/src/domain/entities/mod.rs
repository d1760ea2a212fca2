//! Domain entities representing core business objects.

pub mod account;
pub mod verification_record;

pub use account::Account;
pub use verification_record::{
    normalize_code, VerificationRecord, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES,
};

#[cfg(test)]
mod tests;
