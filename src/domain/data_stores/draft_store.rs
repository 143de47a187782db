use tokio::sync::watch;

use crate::domain::{CredentialDraft, DraftPatch, SecretString};

/// Contract of the credential draft holder.
///
/// Every operation is total: setters unconditionally replace the stored
/// value and reads always succeed, so nothing here returns a `Result`.
/// Mutators take `&mut self` so the shared `RwLock` write guard is the only
/// path that can change the draft.
#[async_trait::async_trait]
pub trait DraftStore: Send + Sync {
    /// Replace the stored email with `value`, exactly as given.
    async fn set_email(&mut self, value: String);

    /// Replace the stored password with `value`, exactly as given.
    async fn set_password(&mut self, value: String);

    async fn email(&self) -> String;
    async fn password(&self) -> SecretString;

    /// Snapshot of the whole draft as of this call.
    async fn draft(&self) -> CredentialDraft;

    /// Apply all fields present in `patch` as one mutation, notifying
    /// subscribers once.
    async fn patch(&mut self, patch: DraftPatch);

    /// Return both fields to the empty string.
    async fn reset(&mut self);

    /// Watch the draft; the receiver always borrows the latest value and is
    /// woken on every mutation.
    fn subscribe(&self) -> watch::Receiver<CredentialDraft>;
}
