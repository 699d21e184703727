//! A standalone interpreter core for pre-decoded MIPS Allegrex IR blocks.
//!
//! This crate owns the guest register file ([`state::CpuState`]), the closed IR
//! opcode set ([`ir::IrOp`]), the per-opcode arithmetic/memory/float/vector/VFPU
//! kernels ([`kernels`]), and the dispatcher that walks one block at a time
//! ([`interp::interpret`]). Guest memory ([`mem::MemoryBus`]) and the handful of
//! operations that require cooperation from the surrounding emulator
//! ([`host::HostBridge`]) are abstracted behind traits so this crate has no
//! dependency on any particular embedder.

pub mod fault;
pub mod host;
pub mod interp;
pub mod ir;
pub mod kernels;
pub mod mem;
pub mod state;

pub use fault::{InterpretFault, InterpreterConfig};
pub use host::HostBridge;
pub use interp::{interpret, interpret_raw};
pub use ir::{Block, FpCompareMode, IrInst, IrOp};
pub use mem::{FlatMemoryBus, MemoryBus};
pub use state::CpuState;
