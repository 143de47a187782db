use tokio::sync::watch;

use crate::domain::{CredentialDraft, DraftPatch, DraftStore, SecretString};

/// Memory-only draft holder. The current draft lives inside the watch
/// channel, so every write through `send_modify` is seen by subscribers
/// exactly once and "last write wins" falls out of the channel semantics.
pub struct InMemoryDraftStore {
    tx: watch::Sender<CredentialDraft>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CredentialDraft::default());
        InMemoryDraftStore { tx }
    }
}

impl Default for InMemoryDraftStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn set_email(&mut self, value: String) {
        log::debug!("draft email updated ({} bytes)", value.len());
        self.tx.send_modify(|draft| draft.set_email(value));
    }

    async fn set_password(&mut self, value: String) {
        // Never log the password itself.
        log::debug!("draft password updated ({} bytes)", value.len());
        self.tx.send_modify(|draft| draft.set_password(value));
    }

    async fn email(&self) -> String {
        self.tx.borrow().email().to_string()
    }

    async fn password(&self) -> SecretString {
        self.tx.borrow().password().clone()
    }

    async fn draft(&self) -> CredentialDraft {
        self.tx.borrow().clone()
    }

    async fn patch(&mut self, patch: DraftPatch) {
        log::debug!(
            "draft patched (email: {}, password: {})",
            patch.email.is_some(),
            patch.password.is_some()
        );
        self.tx.send_modify(|draft| draft.apply(patch));
    }

    async fn reset(&mut self) {
        log::debug!("draft reset");
        self.tx.send_modify(|draft| draft.clear());
    }

    fn subscribe(&self) -> watch::Receiver<CredentialDraft> {
        self.tx.subscribe()
    }
}
