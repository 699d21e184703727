//! Error handling surface: the one recoverable outcome the interpreter can
//! produce (host-requested suspension), and the config knob for the debug-only
//! producer-invariant checks.
//!
//! Fatal construction bugs (unknown opcode, `Nop` in a live block, falling off
//! the end without an exit, `r[0] != 0`) are not modeled as `InterpretFault`
//! variants: they indicate a defective IR producer, a trusted co-located
//! component, and are reported with `panic!`/`debug_assert!` rather than a
//! `Result` no caller could meaningfully recover from.

use thiserror::Error;

/// The recoverable outcome of [`crate::interp::interpret`]: execution suspended at
/// the host's request rather than running to a normal block exit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InterpretFault {
    /// A breakpoint or memcheck hook fired, or a syscall left the core no longer
    /// running. The block terminated early; re-enter the dispatcher loop at
    /// `resume_pc`.
    #[error("interpreter suspended at pc=0x{resume_pc:08x}")]
    Suspended { resume_pc: u32 },
}

/// Runtime toggles for the interpreter. Debug invariant checks (`r[0] == 0` after
/// every instruction) are expensive enough that release embedders may want to
/// skip them even in a build that otherwise wants `debug_assertions`-style
/// checking elsewhere; this gives that choice to the caller instead of baking it
/// into a cfg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// When true, asserts `r[0] == 0` after every executed instruction and panics
    /// otherwise. Defaults to `cfg!(debug_assertions)`.
    pub debug_invariants: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            debug_invariants: cfg!(debug_assertions),
        }
    }
}
