//! The non-memory external collaborators the dispatcher calls out to: syscall
//! dispatch, the scalar MIPS interpreter fallback, the replacement-function table,
//! the breakpoint/memcheck registry, and the scheduler/core control hooks.
//!
//! Bundled behind one trait, the way the grounding teacher collects its runtime
//! callbacks behind a single small trait rather than scattering free functions
//! across the crate.

/// Host-side collaborators invoked by `Syscall`, `Interpret`, `CallReplacement`,
/// `Break`, `Breakpoint`, and `MemoryCheck`. All out of scope for this crate per
/// the purpose statement; implementations live in the embedder.
pub trait HostBridge {
    /// Decodes and executes a MIPS syscall instruction. Use `is_running` afterwards
    /// to decide whether a scheduler force-check is warranted.
    fn call_syscall(&mut self, opcode: u32);

    /// Decodes and executes a single MIPS instruction via the scalar interpreter
    /// fallback (`Interpret`, the slow path).
    fn mips_interpret(&mut self, opcode: u32);

    /// Invokes the replacement function registered at `index` and returns the
    /// number of cycles it consumed, to be subtracted from `downcount`.
    fn call_replacement(&mut self, index: u32) -> i32;

    /// Whether the emulated core is still in its normal running state. `false`
    /// after a syscall or breakpoint hit indicates the outer dispatcher loop
    /// should be given a chance to observe the state change.
    fn is_running(&self) -> bool;

    /// Forces the scheduler to re-evaluate timing/pending events immediately
    /// (`CoreTiming::ForceCheck`).
    fn force_check(&mut self);

    /// Requests that the host core break execution (`Core_Break`).
    fn core_break(&mut self);

    /// If a "skip first hit" breakpoint is armed at exactly this `pc`, returns
    /// `Some(pc)` so the caller can silently continue past it once.
    fn check_skip_first(&self) -> Option<u32>;

    /// Notifies the breakpoint registry that execution reached `pc`.
    fn exec_breakpoint(&mut self, pc: u32);

    /// Notifies the memcheck registry that a memory access at `addr` occurred
    /// while executing the instruction at `pc`.
    fn exec_mem_check(&mut self, addr: u32, pc: u32);

    /// `FSin`: the guest's table-based sine approximation (`vfpu_sin`), not a
    /// direct `sinf` call. `x` is in the guest's fixed-point-of-a-circle units.
    fn vfpu_sin(&self, x: f32) -> f32;

    /// `FCos`: as `vfpu_sin`, for cosine (`vfpu_cos`).
    fn vfpu_cos(&self, x: f32) -> f32;

    /// `FAsin`: the guest's table-based arcsine approximation (`vfpu_asin`).
    fn vfpu_asin(&self, x: f32) -> f32;

    /// `FSat0_1`/`FSatMinus1_1`: the guest's NaN/−0-aware clamp (`vfpu_clamp`).
    /// NaN collapses to `lo`; otherwise `x` is clamped into `[lo, hi]`.
    fn vfpu_clamp(&self, x: f32, lo: f32, hi: f32) -> f32;
}

/// Runs the `Breakpoint` / `MemoryCheck` "should we suspend" protocol shared by
/// both opcodes: skip once if armed, otherwise notify the registry and report
/// whether the core left its running state.
///
/// Returns `true` if the block must terminate and return `pc` to the caller.
pub(crate) fn run_breakpoint(host: &mut dyn HostBridge, pc: u32) -> bool {
    if host.check_skip_first() == Some(pc) {
        return false;
    }
    host.exec_breakpoint(pc);
    !host.is_running()
}

/// As [`run_breakpoint`], but for a `MemoryCheck` opcode which also carries the
/// effective address being checked.
pub(crate) fn run_mem_check(host: &mut dyn HostBridge, pc: u32, addr: u32) -> bool {
    if host.check_skip_first() == Some(pc) {
        return false;
    }
    host.exec_mem_check(addr, pc);
    !host.is_running()
}
