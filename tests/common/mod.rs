use allegrex_ir_interp::{HostBridge, InterpretFault, InterpreterConfig, IrInst, IrOp};

/// A `HostBridge` that records what the dispatcher asked of it and never
/// actually suspends the core, for tests that only exercise the dispatcher's
/// own bookkeeping around those calls.
#[derive(Default)]
pub struct RecordingHost {
    pub syscalls: Vec<u32>,
    pub interpreted: Vec<u32>,
    pub replacements_called: Vec<u32>,
    pub replacement_cycles: i32,
    pub running: bool,
    pub breakpoints_hit: Vec<u32>,
    pub mem_checks_hit: Vec<(u32, u32)>,
    pub skip_first_at: Option<u32>,
    pub cores_broken: u32,
}

impl RecordingHost {
    pub fn new() -> Self {
        RecordingHost {
            running: true,
            ..Default::default()
        }
    }
}

impl HostBridge for RecordingHost {
    fn call_syscall(&mut self, opcode: u32) {
        self.syscalls.push(opcode);
    }

    fn mips_interpret(&mut self, opcode: u32) {
        self.interpreted.push(opcode);
    }

    fn call_replacement(&mut self, index: u32) -> i32 {
        self.replacements_called.push(index);
        self.replacement_cycles
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn force_check(&mut self) {}

    fn core_break(&mut self) {
        self.cores_broken += 1;
    }

    fn check_skip_first(&self) -> Option<u32> {
        self.skip_first_at
    }

    fn exec_breakpoint(&mut self, pc: u32) {
        self.breakpoints_hit.push(pc);
    }

    fn exec_mem_check(&mut self, addr: u32, pc: u32) {
        self.mem_checks_hit.push((addr, pc));
    }

    fn vfpu_sin(&self, x: f32) -> f32 {
        x
    }

    fn vfpu_cos(&self, x: f32) -> f32 {
        x
    }

    fn vfpu_asin(&self, x: f32) -> f32 {
        x
    }

    fn vfpu_clamp(&self, x: f32, lo: f32, hi: f32) -> f32 {
        if x.is_nan() {
            lo
        } else if x < lo {
            lo
        } else if x > hi {
            hi
        } else {
            x
        }
    }
}

/// Runs `block` to completion against a fresh [`allegrex_ir_interp::CpuState`]
/// and a zeroed [`allegrex_ir_interp::FlatMemoryBus`], returning the exit value
/// and the final register state for assertions.
pub fn run_block(
    block: &[IrInst],
) -> (
    Result<u32, InterpretFault>,
    allegrex_ir_interp::CpuState,
    RecordingHost,
) {
    let mut state = allegrex_ir_interp::CpuState::default();
    let mut bus = allegrex_ir_interp::FlatMemoryBus::new(0x1_0000);
    let mut host = RecordingHost::new();
    let result = allegrex_ir_interp::interpret(
        &mut state,
        block,
        block.len(),
        &mut bus,
        &mut host,
        InterpreterConfig::default(),
    );
    (result, state, host)
}

/// As [`run_block`], but with caller-supplied memory so tests can seed bytes
/// before executing.
pub fn run_block_with_bus(
    block: &[IrInst],
    bus: &mut allegrex_ir_interp::FlatMemoryBus,
) -> (Result<u32, InterpretFault>, allegrex_ir_interp::CpuState) {
    let mut state = allegrex_ir_interp::CpuState::default();
    let mut host = RecordingHost::new();
    let result = allegrex_ir_interp::interpret(
        &mut state,
        block,
        block.len(),
        bus,
        &mut host,
        InterpreterConfig::default(),
    );
    (result, state)
}

pub fn exit_const(value: u32) -> IrInst {
    IrInst::new(IrOp::ExitToConst).with_constant(value)
}
