//! Service configuration.

use std::str::FromStr;

use tracing::warn;

/// Configuration shared by the logic facades.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Optional pepper prepended to passwords before Argon2id hashing.
    pub pepper: Option<String>,
    /// Minimum password length for policy enforcement.
    pub min_password_length: usize,
    /// Argon2id memory cost in KiB (default: 19456 = 19 MiB).
    pub argon2_memory_kib: u32,
    /// Argon2id iterations (default: 2).
    pub argon2_iterations: u32,
    /// Argon2id lanes (default: 1).
    pub argon2_parallelism: u32,
    /// Largest accepted organization logo in bytes (default: 2 MiB).
    pub logo_max_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            pepper: None,
            min_password_length: 12,
            argon2_memory_kib: 19456,
            argon2_iterations: 2,
            argon2_parallelism: 1,
            logo_max_bytes: 2 * 1024 * 1024,
        }
    }
}

impl ServiceConfig {
    /// Defaults overridden by `AEGIS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(pepper) = lookup("AEGIS_PASSWORD_PEPPER").filter(|p| !p.is_empty()) {
            config.pepper = Some(pepper);
        }
        parse_into(
            &lookup,
            "AEGIS_MIN_PASSWORD_LENGTH",
            &mut config.min_password_length,
        );
        parse_into(&lookup, "AEGIS_LOGO_MAX_BYTES", &mut config.logo_max_bytes);
        config
    }
}

fn parse_into<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(_) => warn!(key, value = %raw, "Ignoring unparsable configuration value"),
    }
}
