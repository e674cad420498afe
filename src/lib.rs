//! Client for Mistral AI's large language model API.
//!
//! ```no_run
//! use mistral_ai::Config;
//! use serde_json::json;
//!
//! # async fn run() -> mistral_ai::Result<()> {
//! let client = mistral_ai::new(Config::new().api_key("key").server_sent_events(true))?;
//!
//! let mut print_delta = |event: &serde_json::Value,
//!                        _parsed: &mistral_ai::ParsedEvent,
//!                        _raw: &mistral_ai::RawChunk| {
//!     if let Some(content) = mistral_ai::api::response::delta_content(event) {
//!         print!("{}", content);
//!     }
//! };
//!
//! let events = client
//!     .chat_completions(
//!         &json!({
//!             "model": "mistral-small-latest",
//!             "stream": true,
//!             "messages": [{ "role": "user", "content": "hi!" }]
//!         }),
//!         None,
//!         Some(&mut print_delta),
//!     )
//!     .await?;
//! # let _ = events;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{Client, EventCallback, RawChunk, RequestMethod, Response, StreamEvent};
pub use config::{ClientConfig, Config, RequestOptions};
pub use error::{MistralError, Result};
pub use transport::{HttpRequest, HttpResponse, ParsedEvent, Transport, TransportError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shorthand for [`Client::new`].
pub fn new(config: Config) -> Result<Client> {
    Client::new(config)
}
