//! Pure kernels backing the dispatcher's opcode arms. Extracted into standalone
//! functions wherever the logic is more than a one-line register transfer, so the
//! tricky parts (division edge cases, packed-vector bit twiddling, directed
//! rounding) are unit-testable in isolation from the dispatch match.

pub mod alu;
pub mod fpu;
pub mod vector;
pub mod vfpu_ctrl;
