pub mod env_keys;
pub mod types;

pub use types::CheckStatus;
