// Adapters layer: concrete implementations of the domain ports (storage, message delivery).

pub mod sinks;
pub mod storage;

pub use sinks::{build_sink, LogSink, MemorySink, WebhookSink};
pub use storage::LocalStorage;
