pub mod axis;
pub mod breakpoint;
pub mod range;

pub use axis::Axis;
pub use breakpoint::{Bound, BreakpointDefinition, BreakpointRef};
pub use range::{NormalizedRange, RawBound, StaticRange};
