//! # Floating-Point Register Tests
//!
//! Tests for the floating-point register bank and its `f0` variants.

use rvdecode_core::common::DecodeError;
use rvdecode_core::core::arch::fpr::Fpr;

#[test]
fn f0_is_an_ordinary_register_by_default() {
    let mut fpr = Fpr::new();
    fpr.write(0, 1.5f32.to_bits()).unwrap();
    assert_eq!(fpr.read_f32(0).unwrap(), 1.5);
    assert!(!fpr.zero_hardwired());
}

#[test]
fn hardwired_variant_pins_f0_to_zero() {
    let mut fpr = Fpr::with_zero_hardwired(true);
    fpr.write(0, 1.5f32.to_bits()).unwrap();
    assert_eq!(fpr.read(0).unwrap(), 0);
    fpr.write(1, 1.5f32.to_bits()).unwrap();
    assert_eq!(fpr.read_f32(1).unwrap(), 1.5);
}

#[test]
fn raw_bits_are_preserved() {
    let mut fpr = Fpr::new();
    let nan = 0x7FC0_0001;
    fpr.write(12, nan).unwrap();
    assert_eq!(fpr.read(12).unwrap(), nan);
    assert!(fpr.read_f32(12).unwrap().is_nan());
}

#[test]
fn out_of_range_index_is_rejected() {
    let mut fpr = Fpr::new();
    assert!(matches!(fpr.read(32), Err(DecodeError::InvalidRegister(32))));
    assert!(matches!(
        fpr.write(32, 0),
        Err(DecodeError::InvalidRegister(32))
    ));
}
