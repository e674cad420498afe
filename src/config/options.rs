use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Options {
    /// Stream responses unless a call says otherwise. Defaults to `false`.
    #[serde(default)]
    pub server_sent_events: Option<bool>,
    #[serde(default)]
    pub connection: ConnectionOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConnectionOptions {
    #[serde(default)]
    pub request: RequestOptions,
}

/// Transport tuning for every request, in seconds.
///
/// Only these four keys are recognized; anything else under
/// `connection.request` is dropped when the configuration is parsed.
///
/// | key             | default | effect                                              |
/// |-----------------|---------|-----------------------------------------------------|
/// | `timeout`       | none    | upper bound on the whole exchange                   |
/// | `open_timeout`  | none    | upper bound on establishing the connection          |
/// | `read_timeout`  | none    | longest wait between two body chunks                |
/// | `write_timeout` | none    | upper bound on sending the request until headers arrive |
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_timeout: Option<u64>,
}
