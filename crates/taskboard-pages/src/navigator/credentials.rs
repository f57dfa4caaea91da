use std::fmt;

/// Environment variable holding the sign-in name.
pub const USERNAME_VAR: &str = "LOGINNAME";

/// Environment variable holding the sign-in password.
pub const PASSWORD_VAR: &str = "PASSWORD";

/// Sign-in credentials. Opaque to everything but the login form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads `LOGINNAME` and `PASSWORD`; unset variables become empty strings.
    ///
    /// Values are taken verbatim so passwords like `007` keep their exact text.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds credentials from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            username: lookup(USERNAME_VAR).unwrap_or_default(),
            password: lookup(PASSWORD_VAR).unwrap_or_default(),
        }
    }

    /// The sign-in name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_defaults_missing_values_to_empty() {
        let vars = HashMap::from([(USERNAME_VAR, "admin".to_string())]);
        let creds = Credentials::from_lookup(|name| vars.get(name).cloned());
        assert_eq!(creds.username(), "admin");
        assert_eq!(creds.password(), "");
    }

    #[test]
    fn values_are_verbatim() {
        let creds = Credentials::from_lookup(|name| {
            (name == PASSWORD_VAR).then(|| " 007 ".to_string())
        });
        assert_eq!(creds.password(), " 007 ");
        assert_eq!(creds.username(), "");
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("admin", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    #[serial_test::serial]
    fn reads_process_environment() {
        unsafe {
            std::env::set_var(USERNAME_VAR, "env-user");
            std::env::remove_var(PASSWORD_VAR);
        }
        let creds = Credentials::from_env();
        assert_eq!(creds.username(), "env-user");
        assert_eq!(creds.password(), "");
        unsafe {
            std::env::remove_var(USERNAME_VAR);
        }
    }
}
