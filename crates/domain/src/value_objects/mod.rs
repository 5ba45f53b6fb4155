//! Value Objects - Immutable, identity-less domain primitives

mod adjustment;
mod delta;
mod source_position;
mod span;
mod week_config;

pub use adjustment::Adjustment;
pub use delta::{FieldOverrides, SpanDeltas};
pub use source_position::SourcePosition;
pub use span::Span;
pub use week_config::WeekConfig;
