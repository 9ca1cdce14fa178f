//! Demo configuration loaded from environment variables.
//!
//! Every setting has a default so the demo runs with zero configuration.
//! Invalid values are logged and ignored.

use siwes_shared::Role;

/// Who the demo logs in as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAs {
    /// The first account holding the role.
    Role(Role),
    /// The account registered under this email.
    Email(String),
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Env: `SIWES_ROLE` (`student`, `supervisor` or `admin`), or
    /// `SIWES_EMAIL` when no role is given.
    /// Default: the first student.
    pub login: LoginAs,

    /// Load the demo dataset into the empty store.
    /// Env: `SIWES_SEED_DEMO` (true/false)
    /// Default: `true`
    pub seed_demo: bool,

    /// Pretty-print the JSON dashboard.
    /// Env: `SIWES_PRETTY` (true/false)
    /// Default: `true`
    pub pretty: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            login: LoginAs::Role(Role::Student),
            seed_demo: true,
            pretty: true,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        let role = var("SIWES_ROLE").and_then(|value| match value.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                tracing::warn!(error = %e, "Invalid SIWES_ROLE, ignoring");
                None
            }
        });
        let email = var("SIWES_EMAIL").filter(|e| !e.trim().is_empty());

        config.login = match (role, email) {
            (Some(role), _) => LoginAs::Role(role),
            (None, Some(email)) => LoginAs::Email(email),
            (None, None) => config.login,
        };

        if let Some(value) = var("SIWES_SEED_DEMO") {
            config.seed_demo = parse_flag("SIWES_SEED_DEMO", &value, config.seed_demo);
        }
        if let Some(value) = var("SIWES_PRETTY") {
            config.pretty = parse_flag("SIWES_PRETTY", &value, config.pretty);
        }

        // RUST_LOG is read by the tracing EnvFilter directly.

        config
    }
}

fn parse_flag(key: &str, value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        _ => {
            tracing::warn!(key, value, "Invalid boolean, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> DemoConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        assert_eq!(load(&[]), DemoConfig::default());
        assert_eq!(DemoConfig::default().login, LoginAs::Role(Role::Student));
    }

    #[test]
    fn test_role_wins_over_email() {
        let config = load(&[("SIWES_ROLE", "admin"), ("SIWES_EMAIL", "john.doe@example.com")]);
        assert_eq!(config.login, LoginAs::Role(Role::Admin));
    }

    #[test]
    fn test_email_login() {
        let config = load(&[("SIWES_EMAIL", "jane.smith@example.com")]);
        assert_eq!(
            config.login,
            LoginAs::Email("jane.smith@example.com".to_string())
        );
    }

    #[test]
    fn test_invalid_values_ignored() {
        let config = load(&[("SIWES_ROLE", "dean"), ("SIWES_PRETTY", "maybe")]);
        assert_eq!(config.login, LoginAs::Role(Role::Student));
        assert!(config.pretty);
    }

    #[test]
    fn test_flags() {
        let config = load(&[("SIWES_SEED_DEMO", "false"), ("SIWES_PRETTY", "0")]);
        assert!(!config.seed_demo);
        assert!(!config.pretty);
    }
}
