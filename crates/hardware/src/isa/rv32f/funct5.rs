//! RISC-V Single-Precision (F) Function Codes (funct5).
//!
//! For `OP_FP` the operation is selected by bits 31-27. The same bits hold
//! `rs3` in the R4-type fused multiply-add encodings.

/// Floating-point Add.
pub const FADD: u32 = 0b00000;
/// Floating-point Subtract.
pub const FSUB: u32 = 0b00001;
/// Floating-point Multiply.
pub const FMUL: u32 = 0b00010;
/// Floating-point Divide.
pub const FDIV: u32 = 0b00011;
/// Floating-point Sign Injection (FSGNJ, FSGNJN, FSGNJX).
pub const FSGNJ: u32 = 0b00100;
/// Floating-point Min/Max.
pub const FMIN_MAX: u32 = 0b00101;
/// Floating-point Square Root.
pub const FSQRT: u32 = 0b01011;
/// Floating-point Compare (FEQ, FLT, FLE).
pub const FCMP: u32 = 0b10100;
/// Convert Float to Integer (FCVT.W.S, FCVT.WU.S).
pub const FCVT_W_S: u32 = 0b11000;
/// Convert Integer to Float (FCVT.S.W, FCVT.S.WU).
pub const FCVT_S_W: u32 = 0b11010;
/// Move Float to Integer / Classify (FMV.X.W, FCLASS.S).
pub const FMV_X_W: u32 = 0b11100;
/// Move Integer to Float (FMV.W.X).
pub const FMV_W_X: u32 = 0b11110;

/// `rs2` value selecting the unsigned variant of FCVT.
pub const CVT_UNSIGNED: usize = 0b00001;
