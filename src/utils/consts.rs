pub mod env {
    pub const PREFILL_EMAIL_ENV_VAR: &str = "PREFILL_EMAIL";
    pub const RESET_ON_SESSION_END_ENV_VAR: &str = "RESET_ON_SESSION_END";
}
