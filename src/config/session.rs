use super::env_parse;

/// Session cookie settings.
///
/// - `SESSION_SECURE_COOKIE`: only send the cookie over HTTPS (default: false)
/// - `SESSION_INACTIVITY_MINUTES`: idle time before a session expires (default: 60)
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secure_cookie: bool,
    pub inactivity_minutes: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secure_cookie: false,
            inactivity_minutes: 60,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            secure_cookie: env_parse("SESSION_SECURE_COOKIE").unwrap_or(defaults.secure_cookie),
            inactivity_minutes: env_parse("SESSION_INACTIVITY_MINUTES")
                .filter(|minutes: &i64| *minutes > 0)
                .unwrap_or(defaults.inactivity_minutes),
        }
    }
}
