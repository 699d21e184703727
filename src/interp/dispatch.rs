use crate::fault::{InterpretFault, InterpreterConfig};
use crate::host::{run_breakpoint, run_mem_check, HostBridge};
use crate::ir::{Block, FpCompareMode, IrOp};
use crate::kernels::{alu, fpu, vector, vfpu_ctrl};
use crate::mem::MemoryBus;
use crate::state::{CpuState, VFPU_CTRL_CC};

/// Executes IR records `block[0..count)` against `state`, in order, until an
/// exit-class opcode runs, a breakpoint/memcheck hook requests suspension, or
/// `Break` executes.
///
/// Reaching the end of `block` without an exit is a producer bug and panics,
/// matching the guarantee that every block terminates on every path. Unknown
/// opcodes cannot occur: `IrOp` is a closed enum, so the match below is
/// exhaustive by construction rather than needing a `default: Crash()` arm.
pub fn interpret(
    state: &mut CpuState,
    block: Block,
    count: usize,
    bus: &mut dyn MemoryBus,
    host: &mut dyn HostBridge,
    config: InterpreterConfig,
) -> Result<u32, InterpretFault> {
    let _span = tracing::debug_span!("interpret", entry_pc = state.pc, count).entered();

    for inst in &block[..count] {
        #[cfg(feature = "trace-ops")]
        tracing::trace!(op = ?inst.op, dest = inst.dest, src1 = inst.src1, src2 = inst.src2, src3 = inst.src3, constant = inst.constant, "exec");

        let d = inst.dest as usize;
        let s1 = inst.src1 as usize;
        let s2 = inst.src2 as usize;
        let s3 = inst.src3 as usize;

        match inst.op {
            IrOp::Nop => panic!("Nop encountered in a live IR block: producer bug"),

            // --- Integer data movement / ALU ---------------------------------
            IrOp::SetConst => state.r[d] = inst.constant,
            IrOp::SetConstF => state.set_fpr_u32(d, inst.constant),
            IrOp::Add => state.r[d] = state.r[s1].wrapping_add(state.r[s2]),
            IrOp::Sub => state.r[d] = state.r[s1].wrapping_sub(state.r[s2]),
            IrOp::And => state.r[d] = state.r[s1] & state.r[s2],
            IrOp::Or => state.r[d] = state.r[s1] | state.r[s2],
            IrOp::Xor => state.r[d] = state.r[s1] ^ state.r[s2],
            IrOp::Mov => state.r[d] = state.r[s1],
            IrOp::AddConst => state.r[d] = state.r[s1].wrapping_add(inst.constant),
            IrOp::SubConst => state.r[d] = state.r[s1].wrapping_sub(inst.constant),
            IrOp::AndConst => state.r[d] = state.r[s1] & inst.constant,
            IrOp::OrConst => state.r[d] = state.r[s1] | inst.constant,
            IrOp::XorConst => state.r[d] = state.r[s1] ^ inst.constant,
            IrOp::Neg => state.r[d] = (state.r[s1] as i32).wrapping_neg() as u32,
            IrOp::Not => state.r[d] = !state.r[s1],
            IrOp::Ext8to32 => state.r[d] = (state.r[s1] as i8) as i32 as u32,
            IrOp::Ext16to32 => state.r[d] = (state.r[s1] as i16) as i32 as u32,
            IrOp::ReverseBits => state.r[d] = alu::reverse_bits32(state.r[s1]),

            IrOp::ShlImm => state.r[d] = state.r[s1] << (s2 as u32),
            IrOp::ShrImm => state.r[d] = state.r[s1] >> (s2 as u32),
            IrOp::SarImm => state.r[d] = ((state.r[s1] as i32) >> (s2 as u32)) as u32,
            IrOp::RorImm => state.r[d] = alu::rotr32(state.r[s1], s2 as u32),
            IrOp::Shl => state.r[d] = state.r[s1] << (state.r[s2] & 31),
            IrOp::Shr => state.r[d] = state.r[s1] >> (state.r[s2] & 31),
            IrOp::Sar => state.r[d] = ((state.r[s1] as i32) >> (state.r[s2] & 31)) as u32,
            IrOp::Ror => state.r[d] = alu::rotr32(state.r[s1], state.r[s2]),

            IrOp::Clz => state.r[d] = alu::clz32(state.r[s1]),

            IrOp::Slt => state.r[d] = ((state.r[s1] as i32) < (state.r[s2] as i32)) as u32,
            IrOp::SltU => state.r[d] = (state.r[s1] < state.r[s2]) as u32,
            IrOp::SltConst => state.r[d] = ((state.r[s1] as i32) < (inst.constant as i32)) as u32,
            IrOp::SltUConst => state.r[d] = (state.r[s1] < inst.constant) as u32,

            IrOp::MovZ => {
                if state.r[s1] == 0 {
                    state.r[d] = state.r[s2];
                }
            }
            IrOp::MovNZ => {
                if state.r[s1] != 0 {
                    state.r[d] = state.r[s2];
                }
            }

            IrOp::Max => {
                state.r[d] = if (state.r[s1] as i32) > (state.r[s2] as i32) {
                    state.r[s1]
                } else {
                    state.r[s2]
                }
            }
            IrOp::Min => {
                state.r[d] = if (state.r[s1] as i32) < (state.r[s2] as i32) {
                    state.r[s1]
                } else {
                    state.r[s2]
                }
            }

            IrOp::MtLo => state.lo = state.r[s1],
            IrOp::MtHi => state.hi = state.r[s1],
            IrOp::MfLo => state.r[d] = state.lo,
            IrOp::MfHi => state.r[d] = state.hi,

            IrOp::Mult => {
                let result = alu::mul_signed(state.r[s1] as i32, state.r[s2] as i32);
                state.set_lo_hi_i64(result);
            }
            IrOp::MultU => {
                let result = alu::mul_unsigned(state.r[s1], state.r[s2]);
                state.set_lo_hi_i64(result);
            }
            IrOp::Madd => {
                let result = state
                    .lo_hi_i64()
                    .wrapping_add(alu::mul_signed(state.r[s1] as i32, state.r[s2] as i32));
                state.set_lo_hi_i64(result);
            }
            IrOp::MaddU => {
                let result = state
                    .lo_hi_i64()
                    .wrapping_add(alu::mul_unsigned(state.r[s1], state.r[s2]));
                state.set_lo_hi_i64(result);
            }
            IrOp::Msub => {
                let result = state
                    .lo_hi_i64()
                    .wrapping_sub(alu::mul_signed(state.r[s1] as i32, state.r[s2] as i32));
                state.set_lo_hi_i64(result);
            }
            IrOp::MsubU => {
                let result = state
                    .lo_hi_i64()
                    .wrapping_sub(alu::mul_unsigned(state.r[s1], state.r[s2]));
                state.set_lo_hi_i64(result);
            }

            IrOp::Div => {
                let (lo, hi) = alu::divide_signed(state.r[s1] as i32, state.r[s2] as i32);
                state.lo = lo;
                state.hi = hi;
            }
            IrOp::DivU => {
                let (lo, hi) = alu::divide_unsigned(state.r[s1], state.r[s2]);
                state.lo = lo;
                state.hi = hi;
            }

            IrOp::BSwap16 => state.r[d] = alu::bswap16_lanes(state.r[s1]),
            IrOp::BSwap32 => state.r[d] = alu::bswap32(state.r[s1]),

            // --- Memory Gateway ------------------------------------------------
            IrOp::Load8 => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                state.r[d] = bus.read_u8(ea) as u32;
            }
            IrOp::Load8Ext => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                state.r[d] = (bus.read_u8(ea) as i8) as i32 as u32;
            }
            IrOp::Load16 => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                state.r[d] = bus.read_u16(ea) as u32;
            }
            IrOp::Load16Ext => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                state.r[d] = (bus.read_u16(ea) as i16) as i32 as u32;
            }
            IrOp::Load32 => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                state.r[d] = bus.read_u32(ea);
            }
            IrOp::Load32Left => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                let shift = (ea & 3) * 8;
                let word = bus.read_u32(ea & !3);
                let dest_mask = 0x00FF_FFFFu32 >> shift;
                state.r[d] = (state.r[d] & dest_mask) | (word << (24 - shift));
            }
            IrOp::Load32Right => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                let shift = (ea & 3) * 8;
                let word = bus.read_u32(ea & !3);
                let dest_mask = 0xFFFF_FF00u32 << (24 - shift);
                state.r[d] = (state.r[d] & dest_mask) | (word >> shift);
            }
            IrOp::LoadFloat => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                state.set_fpr_f32(d, bus.read_f32(ea));
            }
            IrOp::LoadVec4 => {
                let base = state.r[s1].wrapping_add(inst.constant);
                for i in 0..4u32 {
                    let v = bus.read_f32(base + 4 * i);
                    state.set_fpr_f32(d + i as usize, v);
                }
            }

            IrOp::Store8 => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                bus.write_u8(ea, state.r[s3] as u8);
            }
            IrOp::Store16 => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                bus.write_u16(ea, state.r[s3] as u16);
            }
            IrOp::Store32 => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                bus.write_u32(ea, state.r[s3]);
            }
            IrOp::Store32Left => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                let shift = (ea & 3) * 8;
                let word = bus.read_u32(ea & !3);
                let mem_mask = 0xFFFF_FF00u32 << shift;
                let result = (state.r[s3] >> (24 - shift)) | (word & mem_mask);
                bus.write_u32(ea & !3, result);
            }
            IrOp::Store32Right => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                let shift = (ea & 3) * 8;
                let word = bus.read_u32(ea & !3);
                let mem_mask = 0x00FF_FFFFu32 >> (24 - shift);
                let result = (state.r[s3] << shift) | (word & mem_mask);
                bus.write_u32(ea & !3, result);
            }
            IrOp::StoreFloat => {
                let ea = state.r[s1].wrapping_add(inst.constant);
                bus.write_f32(ea, state.fpr_f32(s3));
            }
            IrOp::StoreVec4 => {
                let base = state.r[s1].wrapping_add(inst.constant);
                for i in 0..4u32 {
                    bus.write_f32(base + 4 * i, state.fpr_f32(d + i as usize));
                }
            }

            // --- Vector (4-lane) kernels ---------------------------------------
            IrOp::Vec4Init => {
                let table = vector::VEC4_INIT_TABLE[s1];
                for i in 0..4 {
                    state.set_fpr_f32(d + i, table[i]);
                }
            }
            IrOp::Vec4Shuffle => {
                let src = [
                    state.fpr_f32(s1),
                    state.fpr_f32(s1 + 1),
                    state.fpr_f32(s1 + 2),
                    state.fpr_f32(s1 + 3),
                ];
                for lane in 0..4 {
                    let picked = src[vector::shuffle_lane_index(inst.src2, lane)];
                    state.set_fpr_f32(d + lane, picked);
                }
            }
            IrOp::Vec4Mov => {
                for i in 0..4 {
                    let v = state.fpr_f32(s1 + i);
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Add => {
                for i in 0..4 {
                    let v = state.fpr_f32(s1 + i) + state.fpr_f32(s2 + i);
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Sub => {
                for i in 0..4 {
                    let v = state.fpr_f32(s1 + i) - state.fpr_f32(s2 + i);
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Mul => {
                for i in 0..4 {
                    let v = state.fpr_f32(s1 + i) * state.fpr_f32(s2 + i);
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Div => {
                for i in 0..4 {
                    let v = state.fpr_f32(s1 + i) / state.fpr_f32(s2 + i);
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Scale => {
                let scale = state.fpr_f32(s2);
                for i in 0..4 {
                    let v = state.fpr_f32(s1 + i) * scale;
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Neg => {
                for i in 0..4 {
                    let v = -state.fpr_f32(s1 + i);
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Abs => {
                for i in 0..4 {
                    let v = state.fpr_f32(s1 + i).abs();
                    state.set_fpr_f32(d + i, v);
                }
            }
            IrOp::Vec4Dot => {
                let mut dot = state.fpr_f32(s1) * state.fpr_f32(s2);
                for i in 1..4 {
                    dot += state.fpr_f32(s1 + i) * state.fpr_f32(s2 + i);
                }
                state.set_fpr_f32(d, dot);
            }

            IrOp::Vec2Unpack16To31 => {
                let (lo, hi) = vector::unpack16_to_31(state.fpr_u32(s1));
                state.set_fpr_u32(d, lo);
                state.set_fpr_u32(d + 1, hi);
            }
            IrOp::Vec2Unpack16To32 => {
                let (lo, hi) = vector::unpack16_to_32(state.fpr_u32(s1));
                state.set_fpr_u32(d, lo);
                state.set_fpr_u32(d + 1, hi);
            }
            IrOp::Vec4Unpack8To32 => {
                let out = vector::unpack8_to_32(state.fpr_u32(s1));
                for i in 0..4 {
                    state.set_fpr_u32(d + i, out[i]);
                }
            }
            IrOp::Vec2Pack32To16 => {
                let val = vector::pack32_to_16(state.fpr_u32(s1), state.fpr_u32(s1 + 1));
                state.set_fpr_u32(d, val);
            }
            IrOp::Vec2Pack31To16 => {
                let val = vector::pack31_to_16(state.fpr_u32(s1), state.fpr_u32(s1 + 1));
                state.set_fpr_u32(d, val);
            }
            IrOp::Vec4Pack32To8 => {
                let words = [
                    state.fpr_u32(s1),
                    state.fpr_u32(s1 + 1),
                    state.fpr_u32(s1 + 2),
                    state.fpr_u32(s1 + 3),
                ];
                state.set_fpr_u32(d, vector::pack32_to_8(words));
            }
            IrOp::Vec4Pack31To8 => {
                let words = [
                    state.fpr_u32(s1),
                    state.fpr_u32(s1 + 1),
                    state.fpr_u32(s1 + 2),
                    state.fpr_u32(s1 + 3),
                ];
                state.set_fpr_u32(d, vector::pack31_to_8(words));
            }
            IrOp::Vec2ClampToZero => {
                for i in 0..2 {
                    let v = vector::clamp_lane_to_zero(state.fpr_u32(s1 + i));
                    state.set_fpr_u32(d + i, v);
                }
            }
            IrOp::Vec4ClampToZero => {
                for i in 0..4 {
                    let v = vector::clamp_lane_to_zero(state.fpr_u32(s1 + i));
                    state.set_fpr_u32(d + i, v);
                }
            }
            IrOp::Vec4DuplicateUpperBitsAndShift1 => {
                for i in 0..4 {
                    let v = vector::duplicate_upper_bits_and_shift1(state.fpr_u32(s1 + i));
                    state.set_fpr_u32(d + i, v);
                }
            }

            // --- VFPU compare & control ------------------------------------------
            IrOp::FCmpVfpuBit => {
                let predicate = vfpu_ctrl::VfpuComparePredicate::from_u8(inst.dest);
                let bit = (inst.dest >> 4) as u32;
                let result = predicate.eval(state.fpr_f32(s1), state.fpr_f32(s2));
                state.vfpu_ctrl[VFPU_CTRL_CC] =
                    vfpu_ctrl::apply_compare_bit(state.vfpu_ctrl[VFPU_CTRL_CC], bit, result);
            }
            IrOp::FCmpVfpuAggregate => {
                state.vfpu_ctrl[VFPU_CTRL_CC] =
                    vfpu_ctrl::aggregate_cc(state.vfpu_ctrl[VFPU_CTRL_CC], inst.dest as u32);
            }
            IrOp::FCmovVfpuCC => {
                if vfpu_ctrl::should_cmov(state.vfpu_ctrl[VFPU_CTRL_CC], inst.src2 as u32) {
                    let v = state.fpr_f32(s1);
                    state.set_fpr_f32(d, v);
                }
            }
            IrOp::VfpuCtrlToReg => state.r[d] = state.vfpu_ctrl[s1],
            IrOp::SetCtrlVFPU => state.vfpu_ctrl[d] = inst.constant,
            IrOp::SetCtrlVFPUReg => state.vfpu_ctrl[d] = state.r[s1],
            IrOp::SetCtrlVFPUFReg => state.vfpu_ctrl[d] = state.fpr_u32(s1),

            // --- Scalar float kernels -------------------------------------------
            IrOp::FAdd => {
                let v = state.fpr_f32(s1) + state.fpr_f32(s2);
                state.set_fpr_f32(d, v);
            }
            IrOp::FSub => {
                let v = state.fpr_f32(s1) - state.fpr_f32(s2);
                state.set_fpr_f32(d, v);
            }
            IrOp::FMul => {
                let v = fpu::fmul(state.fpr_f32(s1), state.fpr_f32(s2));
                state.set_fpr_f32(d, v);
            }
            IrOp::FDiv => {
                let v = state.fpr_f32(s1) / state.fpr_f32(s2);
                state.set_fpr_f32(d, v);
            }
            IrOp::FMin => {
                let (a, b) = (state.fpr_f32(s1), state.fpr_f32(s2));
                let v = if b < a { b } else { a };
                state.set_fpr_f32(d, v);
            }
            IrOp::FMax => {
                let (a, b) = (state.fpr_f32(s1), state.fpr_f32(s2));
                let v = if a < b { b } else { a };
                state.set_fpr_f32(d, v);
            }
            IrOp::FMov => {
                let v = state.fpr_f32(s1);
                state.set_fpr_f32(d, v);
            }
            IrOp::FAbs => {
                let v = state.fpr_f32(s1).abs();
                state.set_fpr_f32(d, v);
            }
            IrOp::FSqrt => {
                let v = state.fpr_f32(s1).sqrt();
                state.set_fpr_f32(d, v);
            }
            IrOp::FNeg => {
                let v = -state.fpr_f32(s1);
                state.set_fpr_f32(d, v);
            }
            IrOp::FSat0_1 => {
                let v = host.vfpu_clamp(state.fpr_f32(s1), 0.0, 1.0);
                state.set_fpr_f32(d, v);
            }
            IrOp::FSatMinus1_1 => {
                let v = host.vfpu_clamp(state.fpr_f32(s1), -1.0, 1.0);
                state.set_fpr_f32(d, v);
            }
            IrOp::FSign => {
                let v = fpu::fsign(state.fpr_u32(s1));
                state.set_fpr_f32(d, v);
            }
            IrOp::FpCondToReg => state.r[d] = state.fpcond as u32,
            IrOp::ZeroFpCond => state.fpcond = false,
            IrOp::FRound => {
                let v = fpu::fround(state.fpr_f32(s1));
                state.set_fpr_i32(d, v);
            }
            IrOp::FTrunc => {
                let v = fpu::ftrunc(state.fpr_f32(s1));
                state.set_fpr_i32(d, v);
            }
            IrOp::FCeil => {
                let v = fpu::fceil(state.fpr_f32(s1));
                state.set_fpr_i32(d, v);
            }
            IrOp::FFloor => {
                let v = fpu::ffloor(state.fpr_f32(s1));
                state.set_fpr_i32(d, v);
            }
            IrOp::FCmp => {
                let mode = FpCompareMode::from_u8(inst.dest);
                let a = state.fpr_f32(s1);
                let b = state.fpr_f32(s2);
                state.fpcond = match mode {
                    FpCompareMode::False => false,
                    FpCompareMode::EitherUnordered => !(a > b || a < b || a == b),
                    FpCompareMode::EqualOrdered | FpCompareMode::EqualUnordered => a == b,
                    FpCompareMode::LessOrdered | FpCompareMode::LessUnordered => a < b,
                    FpCompareMode::LessEqualOrdered | FpCompareMode::LessEqualUnordered => a <= b,
                };
            }
            IrOp::FCvtSW => {
                let v = state.fpr_i32(s1) as f32;
                state.set_fpr_f32(d, v);
            }
            IrOp::FCvtWS => {
                let v = fpu::fcvt_ws(state.fpr_f32(s1), state.fcr31);
                state.set_fpr_i32(d, v);
            }
            IrOp::FMovFromGPR => state.set_fpr_u32(d, state.r[s1]),
            IrOp::FMovToGPR => state.r[d] = state.fpr_u32(s1),
            IrOp::FSin => {
                let v = host.vfpu_sin(state.fpr_f32(s1));
                state.set_fpr_f32(d, v);
            }
            IrOp::FCos => {
                let v = host.vfpu_cos(state.fpr_f32(s1));
                state.set_fpr_f32(d, v);
            }
            IrOp::FRSqrt => {
                let v = 1.0 / state.fpr_f32(s1).sqrt();
                state.set_fpr_f32(d, v);
            }
            IrOp::FRecip => {
                let v = 1.0 / state.fpr_f32(s1);
                state.set_fpr_f32(d, v);
            }
            IrOp::FAsin => {
                let v = host.vfpu_asin(state.fpr_f32(s1));
                state.set_fpr_f32(d, v);
            }

            // --- Control flow & host bridge --------------------------------------
            IrOp::ExitToConst => return Ok(inst.constant),
            IrOp::ExitToReg => return Ok(state.r[s1]),
            IrOp::ExitToPC => return Ok(state.pc),
            IrOp::ExitToConstIfEq => {
                if state.r[s1] == state.r[s2] {
                    return Ok(inst.constant);
                }
            }
            IrOp::ExitToConstIfNeq => {
                if state.r[s1] != state.r[s2] {
                    return Ok(inst.constant);
                }
            }
            IrOp::ExitToConstIfGtZ => {
                if (state.r[s1] as i32) > 0 {
                    return Ok(inst.constant);
                }
            }
            IrOp::ExitToConstIfGeZ => {
                if (state.r[s1] as i32) >= 0 {
                    return Ok(inst.constant);
                }
            }
            IrOp::ExitToConstIfLtZ => {
                if (state.r[s1] as i32) < 0 {
                    return Ok(inst.constant);
                }
            }
            IrOp::ExitToConstIfLeZ => {
                if (state.r[s1] as i32) <= 0 {
                    return Ok(inst.constant);
                }
            }

            IrOp::Downcount => state.downcount = state.downcount.wrapping_sub(inst.constant as i32),

            IrOp::SetPC => state.pc = state.r[s1],
            IrOp::SetPCConst => state.pc = inst.constant,

            IrOp::Syscall => {
                host.call_syscall(inst.constant);
                if !host.is_running() {
                    host.force_check();
                }
            }

            IrOp::Interpret => host.mips_interpret(inst.constant),

            IrOp::CallReplacement => {
                let cycles = host.call_replacement(inst.constant);
                state.downcount = state.downcount.wrapping_sub(cycles);
            }

            IrOp::Break => {
                host.core_break();
                return Ok(state.pc.wrapping_add(4));
            }

            IrOp::Breakpoint => {
                if run_breakpoint(host, state.pc) {
                    host.force_check();
                    return Err(InterpretFault::Suspended { resume_pc: state.pc });
                }
            }
            IrOp::MemoryCheck => {
                let addr = state.r[s1].wrapping_add(inst.constant);
                if run_mem_check(host, state.pc, addr) {
                    host.force_check();
                    return Err(InterpretFault::Suspended { resume_pc: state.pc });
                }
            }

            // Reserved; rounding mode is not tracked outside of FCvtWS.
            IrOp::ApplyRoundingMode => {}
            IrOp::RestoreRoundingMode => {}
            IrOp::UpdateRoundingMode => {}
        }

        if config.debug_invariants {
            state.debug_assert_r0_zero();
        }
    }

    panic!("IR block fell through without an exit-class opcode: producer bug");
}

/// Adapter matching the original C++ ABI shape (`u32` return, `0` meaning
/// "re-enter at the current pc"), for callers that don't want the `Result`.
/// `state.pc` must already reflect the resume location when this returns `0`
/// via a suspension (see [`InterpretFault::Suspended`]).
pub fn interpret_raw(
    state: &mut CpuState,
    block: Block,
    count: usize,
    bus: &mut dyn MemoryBus,
    host: &mut dyn HostBridge,
    config: InterpreterConfig,
) -> u32 {
    match interpret(state, block, count, bus, host, config) {
        Ok(next_pc) => next_pc,
        Err(InterpretFault::Suspended { resume_pc }) => resume_pc,
    }
}
