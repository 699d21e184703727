mod common;

use allegrex_ir_interp::{IrInst, IrOp};
use common::{exit_const, run_block};

#[test]
fn vec4_shuffle_identity_mask_is_a_no_op() {
    let block = [
        IrInst::new(IrOp::SetConstF).with_dest(0).with_constant(1.0f32.to_bits()),
        IrInst::new(IrOp::SetConstF).with_dest(1).with_constant(2.0f32.to_bits()),
        IrInst::new(IrOp::SetConstF).with_dest(2).with_constant(3.0f32.to_bits()),
        IrInst::new(IrOp::SetConstF).with_dest(3).with_constant(4.0f32.to_bits()),
        IrInst::new(IrOp::Vec4Shuffle)
            .with_dest(8)
            .with_src1(0)
            .with_src2(0b11_10_01_00),
        exit_const(0),
    ];
    let (result, state, _) = run_block(&block);
    assert_eq!(result, Ok(0));
    assert_eq!(
        [
            state.fpr_f32(8),
            state.fpr_f32(9),
            state.fpr_f32(10),
            state.fpr_f32(11)
        ],
        [1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn vec4_dot_product_of_orthogonal_basis_vectors_is_zero() {
    let block = [
        IrInst::new(IrOp::Vec4Init).with_dest(0).with_src1(3), // (1,0,0,0)
        IrInst::new(IrOp::Vec4Init).with_dest(4).with_src1(4), // (0,1,0,0)
        IrInst::new(IrOp::Vec4Dot).with_dest(8).with_src1(0).with_src2(4),
        exit_const(0),
    ];
    let (result, state, _) = run_block(&block);
    assert_eq!(result, Ok(0));
    assert_eq!(state.fpr_f32(8), 0.0);
}

#[test]
fn vfpu_compare_bit_then_aggregate_reports_any_and_all() {
    let block = [
        IrInst::new(IrOp::SetConstF).with_dest(0).with_constant(1.0f32.to_bits()),
        IrInst::new(IrOp::SetConstF).with_dest(1).with_constant(1.0f32.to_bits()),
        IrInst::new(IrOp::SetConstF).with_dest(2).with_constant(2.0f32.to_bits()),
        // bit 0, predicate Eq (0): f0 == f1 -> true.
        IrInst::new(IrOp::FCmpVfpuBit).with_dest(0x00).with_src1(0).with_src2(1),
        // bit 1, predicate Eq (0): f0 == f2 -> false.
        IrInst::new(IrOp::FCmpVfpuBit).with_dest(0x10).with_src1(0).with_src2(2),
        // aggregate over bits 0-1.
        IrInst::new(IrOp::FCmpVfpuAggregate).with_dest(0b0011),
        IrInst::new(IrOp::VfpuCtrlToReg).with_dest(8).with_src1(3),
        exit_const(0),
    ];
    let (result, state, _) = run_block(&block);
    assert_eq!(result, Ok(0));
    // bit0 set, bit1 clear, any-bit (0x10) set, all-bit (0x20) clear.
    assert_eq!(state.r[8] & 0x3F, 0b01_0001);
}

#[test]
fn pack32_to_8_and_unpack8_to_32_are_inverse_on_top_bytes() {
    let block = [
        IrInst::new(IrOp::SetConstF).with_dest(0).with_constant(0x11_000000),
        IrInst::new(IrOp::SetConstF).with_dest(1).with_constant(0x22_000000),
        IrInst::new(IrOp::SetConstF).with_dest(2).with_constant(0x33_000000),
        IrInst::new(IrOp::SetConstF).with_dest(3).with_constant(0x44_000000),
        IrInst::new(IrOp::Vec4Pack32To8).with_dest(8).with_src1(0),
        IrInst::new(IrOp::Vec4Unpack8To32).with_dest(12).with_src1(8),
        exit_const(0),
    ];
    let (result, state, _) = run_block(&block);
    assert_eq!(result, Ok(0));
    assert_eq!(state.fpr_u32(8), 0x4433_2211);
    assert_eq!(
        [
            state.fpr_u32(12),
            state.fpr_u32(13),
            state.fpr_u32(14),
            state.fpr_u32(15)
        ],
        [0x11_000000, 0x22_000000, 0x33_000000, 0x44_000000]
    );
}
