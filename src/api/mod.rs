pub mod client;
pub mod models;
pub mod response;
pub mod streaming;

pub use client::Client;
pub use models::{EventCallback, RawChunk, RequestMethod, Response, StreamEvent};
pub use response::decode;
pub use streaming::process_streaming_response;
