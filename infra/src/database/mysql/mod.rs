//! MySQL implementations of the core repository traits

mod user_directory_impl;
mod verification_store_impl;

pub use user_directory_impl::MySqlUserDirectory;
pub use verification_store_impl::MySqlVerificationStore;
