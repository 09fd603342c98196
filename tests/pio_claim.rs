#![allow(missing_docs)]
//! Host-level tests for PIO unit claiming.

use matrix_keypad::Error;
use matrix_keypad::config::Config;
use matrix_keypad::pio_claim::{PioClaims, PioUnit};

#[test]
fn preferred_unit_is_used_when_free() {
    let mut claims = PioClaims::new();
    assert_eq!(claims.claim(PioUnit::Pio0), Ok(PioUnit::Pio0));
    assert!(!claims.is_available(PioUnit::Pio0));
    assert!(claims.is_available(PioUnit::Pio1));
}

#[test]
fn falls_back_when_preferred_is_reserved() {
    let mut claims = PioClaims::with_reserved(&[PioUnit::Pio0]);
    assert_eq!(claims.claim(PioUnit::Pio0), Ok(PioUnit::Pio1));
}

#[test]
fn falls_back_in_both_directions() {
    assert_eq!(PioUnit::Pio0.fallback(), PioUnit::Pio1);
    assert_eq!(PioUnit::Pio1.fallback(), PioUnit::Pio0);

    let mut claims = PioClaims::with_reserved(&[PioUnit::Pio1]);
    assert_eq!(claims.claim(PioUnit::Pio1), Ok(PioUnit::Pio0));
}

#[test]
fn second_claim_takes_the_other_unit() {
    let mut claims = PioClaims::default();
    assert_eq!(claims.claim(PioUnit::Pio1), Ok(PioUnit::Pio1));
    assert_eq!(claims.claim(PioUnit::Pio1), Ok(PioUnit::Pio0));
    assert_eq!(claims.claim(PioUnit::Pio0), Err(Error::ResourceExhausted));
}

#[test]
fn both_reserved_is_exhausted() {
    let mut claims = PioClaims::with_reserved(&[PioUnit::Pio0, PioUnit::Pio1]);
    assert_eq!(claims.claim(PioUnit::Pio0), Err(Error::ResourceExhausted));
    assert_eq!(claims.claim(PioUnit::Pio1), Err(Error::ResourceExhausted));
}

#[test]
fn default_config_claims_pio0() {
    let config = Config::default();
    let mut claims = PioClaims::with_reserved(config.reserved_pio);
    assert_eq!(claims.claim(config.preferred_pio), Ok(PioUnit::Pio0));
}
