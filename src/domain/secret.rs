use std::fmt;

/// Wrapper for the password draft.
///
/// Holds exactly the bytes the user typed, but never reveals them through
/// `Debug` and zeroes its memory on drop. `Display` is deliberately not
/// implemented.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        SecretString(value.into())
    }

    /// The exact stored value. Use only at the point it is actually needed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        SecretString(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        SecretString(value.to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(*** {} bytes ***)", self.0.len())
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // SAFETY: we own the String and it is dropped right after this.
        unsafe {
            for byte in self.0.as_bytes_mut() {
                std::ptr::write_volatile(byte, 0);
            }
        }
    }
}
