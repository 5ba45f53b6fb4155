//! Domain entities - the timestamp value type and its operations

mod timestamp;

pub use timestamp::{Timestamp, TimestampKind};
