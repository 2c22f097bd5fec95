// ─────────────────────────────────────────────────────────────────────
// SCPN EPR Core — Spin Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-nucleus spin parameter types shared across the simulation crates.

use crate::error::{EprError, EprResult};
use serde::{Deserialize, Serialize};

/// Canonical record for one isotope.
///
/// The gyromagnetic ratio is stored in MHz/mT, signed, and is exactly
/// zero for spin-0 nuclei. The multiplicity is 2I+1, so 1 denotes a
/// magnetically silent nucleus. Abundance is the natural terrestrial
/// fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsotopeProperties {
    /// Gyromagnetic ratio [MHz/mT].
    pub gyro: f64,
    /// Multiplicity 2I+1.
    pub mult: u32,
    /// Natural abundance fraction.
    pub abundance: f64,
}

impl IsotopeProperties {
    /// Nuclear spin quantum number I = (2I+1 − 1) / 2.
    pub fn spin(&self) -> f64 {
        (self.mult as f64 - 1.0) / 2.0
    }

    /// True for any nucleus with I > 0.
    pub fn is_magnetic(&self) -> bool {
        self.mult > 1
    }
}

/// Output representation requested from the style converter.
///
/// The four styles select the magnetic value (gyromagnetic ratio or
/// nuclear g-factor) and the angular-momentum value (multiplicity or
/// spin quantum number) independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinInfoStyle {
    /// Style 1: gyromagnetic ratio [MHz/mT] and multiplicity 2I+1.
    GyroMult,
    /// Style 2: gyromagnetic ratio [MHz/mT] and spin quantum number I.
    GyroSpin,
    /// Style 3: nuclear g-factor and multiplicity 2I+1.
    GnMult,
    /// Style 4: nuclear g-factor and spin quantum number I.
    GnSpin,
}

impl Default for SpinInfoStyle {
    fn default() -> Self {
        SpinInfoStyle::GyroMult
    }
}

impl SpinInfoStyle {
    /// Parse the integer style code used by the simulation pipeline.
    /// Codes outside 1-4 are rejected as a configuration error.
    pub fn from_code(code: u8) -> EprResult<Self> {
        match code {
            1 => Ok(SpinInfoStyle::GyroMult),
            2 => Ok(SpinInfoStyle::GyroSpin),
            3 => Ok(SpinInfoStyle::GnMult),
            4 => Ok(SpinInfoStyle::GnSpin),
            _ => Err(EprError::InvalidStyle(code)),
        }
    }

    /// Integer style code, inverse of [`from_code`](Self::from_code).
    pub fn code(self) -> u8 {
        match self {
            SpinInfoStyle::GyroMult => 1,
            SpinInfoStyle::GyroSpin => 2,
            SpinInfoStyle::GnMult => 3,
            SpinInfoStyle::GnSpin => 4,
        }
    }

    /// True for styles that report the nuclear g-factor.
    pub fn wants_g_factor(self) -> bool {
        matches!(self, SpinInfoStyle::GnMult | SpinInfoStyle::GnSpin)
    }

    /// True for styles that report the spin quantum number I.
    pub fn wants_spin_number(self) -> bool {
        matches!(self, SpinInfoStyle::GyroSpin | SpinInfoStyle::GnSpin)
    }
}

/// Styled view of an isotope's canonical record, built fresh per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinInfo {
    /// Gyromagnetic ratio [MHz/mT] or nuclear g-factor, per style.
    pub value: f64,
    /// Multiplicity 2I+1 or spin quantum number I, per style.
    pub spin: f64,
    /// Natural abundance fraction.
    pub abundance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_quantum_number() {
        let p = IsotopeProperties {
            gyro: 3.077705887,
            mult: 3,
            abundance: 0.99632,
        };
        assert!((p.spin() - 1.0).abs() < 1e-15);
        assert!(p.is_magnetic());
    }

    #[test]
    fn test_spin_zero_is_silent() {
        let p = IsotopeProperties {
            gyro: 0.0,
            mult: 1,
            abundance: 0.91754,
        };
        assert_eq!(p.spin(), 0.0);
        assert!(!p.is_magnetic());
    }

    #[test]
    fn test_style_codes_roundtrip() {
        for code in 1u8..=4 {
            let style = SpinInfoStyle::from_code(code).unwrap();
            assert_eq!(style.code(), code);
        }
    }

    #[test]
    fn test_style_code_out_of_range() {
        for code in [0u8, 5, 42, 255] {
            assert!(SpinInfoStyle::from_code(code).is_err());
        }
    }

    #[test]
    fn test_default_style_is_code_one() {
        assert_eq!(SpinInfoStyle::default(), SpinInfoStyle::GyroMult);
    }
}
