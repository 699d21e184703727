//! The dispatcher: decodes `op` tags and drives the arithmetic, memory, float,
//! vector, VFPU, and control-flow kernels against one [`crate::state::CpuState`].

mod dispatch;

pub use dispatch::{interpret, interpret_raw};
