use regex::Regex;
use std::env;
use std::sync::OnceLock;

fn env_reference() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env reference pattern is valid"))
}

/// Expand environment variables in a string using ${VAR_NAME} syntax.
/// Unset variables are left as written.
pub fn expand_env_var_in_string(value: &str) -> String {
    env_reference()
        .replace_all(value, |cap: &regex::Captures<'_>| {
            env::var(&cap[1]).unwrap_or_else(|_| cap[0].to_string())
        })
        .into_owned()
}

/// Parse a boolean flag the way the environment overrides spell them.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Strip one trailing slash and append exactly one.
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    format!("{}/", trimmed.strip_suffix('/').unwrap_or(trimmed))
}
