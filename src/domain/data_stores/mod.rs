pub mod draft_store;

pub use draft_store::DraftStore;
