use super::secret::SecretString;

/// The transient, unvalidated email/password pair a user is currently
/// typing, prior to submission. Both fields start empty and hold exactly
/// the last value written, with no trimming or validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    email: String,
    password: SecretString,
}

impl CredentialDraft {
    pub fn new(email: String, password: SecretString) -> Self {
        CredentialDraft { email, password }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = SecretString::new(value);
    }

    /// Apply every field present in the patch. Absent fields are untouched.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = SecretString::new(password);
        }
    }

    pub fn clear(&mut self) {
        *self = CredentialDraft::default();
    }
}

/// Optional per-field update, applied as a single mutation.
#[derive(Debug, Default)]
pub struct DraftPatch {
    pub email: Option<String>,
    pub password: Option<String>,
}
