use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Credentials {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the API. A custom address is treated as a trusted endpoint
    /// that may not need a key (a local server, a proxy).
    #[serde(default)]
    pub address: Option<String>,
}
