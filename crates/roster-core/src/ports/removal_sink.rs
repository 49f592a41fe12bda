//! RemovalSink port.
//!
//! Groups never print. Every successful removal is handed to a sink as a
//! [`RemovalRecord`]; whether it ends up on stdout, in a trace, or in a test
//! buffer is the sink's business.
//!
//! # Implementations
//! - `MemorySink`: keeps records in order (tests)
//! - `TracingSink`: structured `tracing` event
//! - `ConsoleSink`: rendered line on stdout
//! - `FanoutSink`: forwards to several sinks

use crate::domain::RemovalRecord;

/// Receives removal records.
///
/// Takes `&self`: sinks are shared between groups and called from inside a
/// raise, so implementations use interior mutability where they need state.
/// The reporting group has already applied the removal and released its
/// borrow, so `emit` may query any group.
pub trait RemovalSink {
    fn emit(&self, record: &RemovalRecord);
}
