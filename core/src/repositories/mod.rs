pub mod user;
pub mod verification;

pub use user::{InMemoryUserDirectory, UserDirectory};
pub use verification::{InMemoryVerificationStore, VerificationStore};
