pub mod credential_draft;
pub mod data_stores;
pub mod secret;

pub use credential_draft::*;
pub use data_stores::*;
pub use secret::*;
