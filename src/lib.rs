use app_state::AppState;

pub mod app_state;
pub mod domain;
pub mod services;
pub mod utils;

pub use domain::{CredentialDraft, DraftPatch, DraftStore, SecretString};
pub use services::InMemoryDraftStore;

// This struct encapsulates the page/session lifetime of the draft holder.
pub struct Session {
    // state is exposed as a public field,
    // so we have access to it in tests.
    pub state: AppState,
}

impl Session {
    /// Start a session. A remembered prefill email from the config goes
    /// through the regular setter, so subscribers observe it like any
    /// other write.
    pub async fn build(state: AppState) -> Self {
        let prefill = state.config.read().await.prefill_email().map(String::from);
        if let Some(email) = prefill {
            state.draft_store.write().await.set_email(email).await;
        }
        log::info!("session started");
        Session { state }
    }

    /// Tear the session down. Unless configured otherwise, the draft is
    /// reset so the plaintext password does not outlive the session.
    pub async fn end(self) {
        if self.state.config.read().await.reset_on_session_end() {
            self.state.draft_store.write().await.reset().await;
            log::info!("session ended, draft cleared");
        } else {
            log::info!("session ended");
        }
    }
}
