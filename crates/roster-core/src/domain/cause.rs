//! Lay-off causes and the event payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an employee is being laid off. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoffCause {
    VacationStockNegative,
    AgeGreaterThan60,
    FailedToMeetTarget,
    Resigned,
}

impl LayoffCause {
    pub const ALL: [LayoffCause; 4] = [
        LayoffCause::VacationStockNegative,
        LayoffCause::AgeGreaterThan60,
        LayoffCause::FailedToMeetTarget,
        LayoffCause::Resigned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoffCause::VacationStockNegative => "VacationStockNegative",
            LayoffCause::AgeGreaterThan60 => "AgeGreaterThan60",
            LayoffCause::FailedToMeetTarget => "FailedToMeetTarget",
            LayoffCause::Resigned => "Resigned",
        }
    }
}

impl fmt::Display for LayoffCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of one lay-off notification. Built per raise, never stored by the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoffEvent {
    cause: LayoffCause,
}

impl LayoffEvent {
    pub fn new(cause: LayoffCause) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> LayoffCause {
        self.cause
    }
}

impl From<LayoffCause> for LayoffEvent {
    fn from(cause: LayoffCause) -> Self {
        Self::new(cause)
    }
}
