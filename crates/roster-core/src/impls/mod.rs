//! Port implementations.

pub mod sinks;

pub use self::sinks::{ConsoleSink, FanoutSink, MemorySink, TracingSink};
