//! The decoded, fixed-width IR instruction record consumed by the dispatcher.
//!
//! A [`Block`] is an externally-owned, read-only sequence of [`IrInst`] records
//! produced by a MIPS-to-IR translator that lives outside this crate. This crate
//! never mutates or retains a block; it only walks one once per [`crate::interp::interpret`]
//! call.

/// One decoded IR operation. This is a closed sum type: the dispatcher's `match`
/// over `IrOp` is exhaustive, and every variant here must have a corresponding
/// arm in `crate::interp::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrOp {
    /// Never emitted into a live block; encountering one is a producer bug.
    Nop,

    // --- Integer data movement / ALU ---------------------------------------
    SetConst,
    SetConstF,
    Add,
    Sub,
    And,
    Or,
    Xor,
    Mov,
    AddConst,
    SubConst,
    AndConst,
    OrConst,
    XorConst,
    Neg,
    Not,
    Ext8to32,
    Ext16to32,
    ReverseBits,
    BSwap16,
    BSwap32,
    Clz,
    ShlImm,
    ShrImm,
    SarImm,
    RorImm,
    Shl,
    Shr,
    Sar,
    Ror,
    Slt,
    SltU,
    SltConst,
    SltUConst,
    MovZ,
    MovNZ,
    Max,
    Min,
    MtLo,
    MtHi,
    MfLo,
    MfHi,
    Mult,
    MultU,
    Madd,
    MaddU,
    Msub,
    MsubU,
    Div,
    DivU,

    // --- Memory Gateway ------------------------------------------------------
    Load8,
    Load8Ext,
    Load16,
    Load16Ext,
    Load32,
    Load32Left,
    Load32Right,
    LoadFloat,
    LoadVec4,
    Store8,
    Store16,
    Store32,
    Store32Left,
    Store32Right,
    StoreFloat,
    StoreVec4,

    // --- Vector (4-lane) kernels ---------------------------------------------
    Vec4Init,
    Vec4Shuffle,
    Vec4Mov,
    Vec4Add,
    Vec4Sub,
    Vec4Mul,
    Vec4Div,
    Vec4Scale,
    Vec4Neg,
    Vec4Abs,
    Vec4Dot,
    Vec2Unpack16To31,
    Vec2Unpack16To32,
    Vec4Unpack8To32,
    Vec2Pack32To16,
    Vec2Pack31To16,
    Vec4Pack32To8,
    Vec4Pack31To8,
    Vec2ClampToZero,
    Vec4ClampToZero,
    Vec4DuplicateUpperBitsAndShift1,

    // --- VFPU compare & control ------------------------------------------------
    FCmpVfpuBit,
    FCmpVfpuAggregate,
    FCmovVfpuCC,
    VfpuCtrlToReg,
    SetCtrlVFPU,
    SetCtrlVFPUReg,
    SetCtrlVFPUFReg,

    // --- Scalar float kernels -------------------------------------------------
    FAdd,
    FSub,
    FMul,
    FDiv,
    FMin,
    FMax,
    FMov,
    FAbs,
    FSqrt,
    FNeg,
    FSat0_1,
    FSatMinus1_1,
    FSign,
    FpCondToReg,
    ZeroFpCond,
    FRound,
    FTrunc,
    FCeil,
    FFloor,
    FCmp,
    FCvtSW,
    FCvtWS,
    FMovFromGPR,
    FMovToGPR,
    FSin,
    FCos,
    FRSqrt,
    FRecip,
    FAsin,

    // --- Control flow & host bridge --------------------------------------------
    ExitToConst,
    ExitToReg,
    ExitToPC,
    ExitToConstIfEq,
    ExitToConstIfNeq,
    ExitToConstIfGtZ,
    ExitToConstIfGeZ,
    ExitToConstIfLtZ,
    ExitToConstIfLeZ,
    Downcount,
    SetPC,
    SetPCConst,
    Syscall,
    Interpret,
    CallReplacement,
    Break,
    Breakpoint,
    MemoryCheck,
    ApplyRoundingMode,
    RestoreRoundingMode,
    UpdateRoundingMode,
}

/// The four-valued scalar FP compare predicate used by `FCmp::dest`.
///
/// "Ordered" and "Unordered" variants share a representation here because the
/// interpreter always uses the host's IEEE-754 ordered comparison; both read the
/// same way on this implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpCompareMode {
    False,
    EitherUnordered,
    EqualOrdered,
    EqualUnordered,
    LessOrdered,
    LessUnordered,
    LessEqualOrdered,
    LessEqualUnordered,
}

impl FpCompareMode {
    /// Decodes the predicate from the small integer the producer stores in
    /// `IrInst::dest` for an `FCmp` instruction.
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => FpCompareMode::False,
            1 => FpCompareMode::EitherUnordered,
            2 => FpCompareMode::EqualOrdered,
            3 => FpCompareMode::EqualUnordered,
            4 => FpCompareMode::LessOrdered,
            5 => FpCompareMode::LessUnordered,
            6 => FpCompareMode::LessEqualOrdered,
            7 => FpCompareMode::LessEqualUnordered,
            _ => panic!("invalid FCmp predicate {v}"),
        }
    }
}

/// A decoded IR instruction record: one operation and its operands.
///
/// `dest`/`src1`/`src2`/`src3` are 8-bit register indices for most ops, but several
/// opcodes repurpose one or more of them as small immediates (a compare predicate,
/// a shuffle mask, a VFPU control register index). See `crate::interp::dispatch`
/// for the per-opcode meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrInst {
    pub op: IrOp,
    pub dest: u8,
    pub src1: u8,
    pub src2: u8,
    pub src3: u8,
    pub constant: u32,
}

impl IrInst {
    /// Convenience constructor for instructions that don't use every field;
    /// unused operands are zeroed.
    pub const fn new(op: IrOp) -> Self {
        IrInst {
            op,
            dest: 0,
            src1: 0,
            src2: 0,
            src3: 0,
            constant: 0,
        }
    }

    pub const fn with_dest(mut self, dest: u8) -> Self {
        self.dest = dest;
        self
    }

    pub const fn with_src1(mut self, src1: u8) -> Self {
        self.src1 = src1;
        self
    }

    pub const fn with_src2(mut self, src2: u8) -> Self {
        self.src2 = src2;
        self
    }

    pub const fn with_src3(mut self, src3: u8) -> Self {
        self.src3 = src3;
        self
    }

    pub const fn with_constant(mut self, constant: u32) -> Self {
        self.constant = constant;
        self
    }
}

/// An externally-owned, read-only sequence of IR records forming one straight-line
/// block. Guaranteed by the producer to terminate in an exit-class opcode on every
/// path; this crate trusts that guarantee and panics if it's ever violated.
pub type Block<'a> = &'a [IrInst];
