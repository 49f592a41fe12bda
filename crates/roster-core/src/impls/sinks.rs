//! RemovalSink implementations.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::domain::RemovalRecord;
use crate::ports::RemovalSink;

/// Keeps every record in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RefCell<Vec<RemovalRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<RemovalRecord> {
        self.records.borrow().clone()
    }

    /// Rendered lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.records.borrow().iter().map(ToString::to_string).collect()
    }

    /// Drain everything emitted so far.
    pub fn take(&self) -> Vec<RemovalRecord> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl RemovalSink for MemorySink {
    fn emit(&self, record: &RemovalRecord) {
        self.records.borrow_mut().push(*record);
    }
}

/// Emits one structured `info` event per removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl RemovalSink for TracingSink {
    fn emit(&self, record: &RemovalRecord) {
        info!(
            group = %record.group,
            group_id = record.group_id.0,
            employee_id = record.employee.0,
            cause = %record.cause,
            "{record}"
        );
    }
}

/// Prints the rendered line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl RemovalSink for ConsoleSink {
    fn emit(&self, record: &RemovalRecord) {
        println!("{record}");
    }
}

/// Forwards each record to every inner sink, in order.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Rc<dyn RemovalSink>>,
}

impl FanoutSink {
    pub fn with(mut self, sink: Rc<dyn RemovalSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl RemovalSink for FanoutSink {
    fn emit(&self, record: &RemovalRecord) {
        for sink in &self.sinks {
            sink.emit(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeId, GroupId, GroupKind, LayoffCause};

    fn record(employee: u32) -> RemovalRecord {
        RemovalRecord {
            group: GroupKind::Department,
            group_id: GroupId(101),
            employee: EmployeeId(employee),
            cause: LayoffCause::Resigned,
        }
    }

    #[test]
    fn memory_sink_keeps_order_and_drains() {
        let sink = MemorySink::new();
        sink.emit(&record(1));
        sink.emit(&record(2));

        assert_eq!(
            sink.lines(),
            vec![
                "[Department] Removed Employee 1 due to Resigned",
                "[Department] Removed Employee 2 due to Resigned",
            ]
        );
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn fanout_reaches_every_sink() {
        let a = Rc::new(MemorySink::new());
        let b = Rc::new(MemorySink::new());
        let fanout = FanoutSink::default()
            .with(a.clone())
            .with(b.clone())
            .with(Rc::new(TracingSink));

        fanout.emit(&record(7));

        assert_eq!(fanout.len(), 3);
        assert_eq!(a.records(), vec![record(7)]);
        assert_eq!(b.records(), vec![record(7)]);
    }

    #[test]
    fn console_sink_prints_and_passes_on() {
        let after = Rc::new(MemorySink::new());
        let fanout = FanoutSink::default()
            .with(Rc::new(ConsoleSink))
            .with(after.clone());

        fanout.emit(&record(3));

        assert_eq!(after.lines(), vec![record(3).to_string()]);
    }
}
