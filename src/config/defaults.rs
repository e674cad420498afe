/// Public API root used when no address is configured.
pub const DEFAULT_ADDRESS: &str = "https://api.mistral.ai";

pub const API_KEY_ENV: &str = "MISTRAL_API_KEY";
pub const ADDRESS_ENV: &str = "MISTRAL_ADDRESS";
pub const SERVER_SENT_EVENTS_ENV: &str = "MISTRAL_SSE";

pub const CONFIG_DIR_NAME: &str = "mistral-ai";
pub const LOCAL_CONFIG_STEM: &str = ".mistral-ai";

pub fn default_address() -> String {
    format!("{}/", DEFAULT_ADDRESS)
}

pub fn default_server_sent_events() -> bool {
    false
}
