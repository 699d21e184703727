//! Algebraic laws that should hold for every input, not just the boundary
//! cases exercised by the other integration tests.

use allegrex_ir_interp::kernels::alu::{bswap16_lanes, bswap32, reverse_bits32, rotr32};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bswap32_is_its_own_inverse(x: u32) {
        prop_assert_eq!(bswap32(bswap32(x)), x);
    }

    #[test]
    fn bswap16_lanes_is_its_own_inverse(x: u32) {
        prop_assert_eq!(bswap16_lanes(bswap16_lanes(x)), x);
    }

    #[test]
    fn reverse_bits_is_its_own_inverse(x: u32) {
        prop_assert_eq!(reverse_bits32(reverse_bits32(x)), x);
    }

    #[test]
    fn rotr_by_32_minus_s_undoes_rotr_by_s(x: u32, s in 1u32..32) {
        let rotated = rotr32(x, s);
        prop_assert_eq!(rotr32(rotated, 32 - s), x);
    }

    #[test]
    fn slt_and_sltu_agree_when_both_operands_are_non_negative(a in 0i32..i32::MAX, b in 0i32..i32::MAX) {
        let signed = a < b;
        let unsigned = (a as u32) < (b as u32);
        prop_assert_eq!(signed, unsigned);
    }
}

#[test]
fn fabs_is_idempotent_on_a_sample_of_values() {
    for &x in &[0.0f32, -0.0, 1.5, -1.5, f32::INFINITY, f32::NEG_INFINITY] {
        let once = x.abs();
        let twice = once.abs();
        assert_eq!(once.to_bits(), twice.to_bits());
    }
}

#[test]
fn fneg_twice_restores_the_original_bit_pattern_for_non_nan_values() {
    for &x in &[0.0f32, -0.0, 1.5, -1.5, f32::INFINITY, f32::NEG_INFINITY] {
        assert_eq!((-(-x)).to_bits(), x.to_bits());
    }
}
