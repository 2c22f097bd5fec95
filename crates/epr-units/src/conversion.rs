// ─────────────────────────────────────────────────────────────────────
// SCPN EPR Core — Conversion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pure conversion functions over the spin parameter representations.
//!
//! All conversions are linear in their argument and preserve sign, so
//! spin-0 nuclei (gyromagnetic ratio exactly zero) stay zero in every
//! representation.

use epr_types::constants::{BOHR_MAGNETON, NUCLEAR_MAGNETON, PLANCK};

/// Nuclear g-factor from a gyromagnetic ratio given in MHz/mT.
///
/// g_n = γ · 10⁶ · h / µ_N with the MHz/mT value taken numerically
/// (γ/2π in frequency units), so the proton's 42.57747876 maps to
/// g_n ≈ 5.5857.
pub fn gyro2gn(gyro: f64) -> f64 {
    gyro * 1e6 * PLANCK / NUCLEAR_MAGNETON
}

/// Gyromagnetic ratio in MHz/mT from a nuclear g-factor.
pub fn gn2gyro(gn: f64) -> f64 {
    gn * NUCLEAR_MAGNETON / (1e6 * PLANCK)
}

/// Electron resonance frequency [MHz] at a field given in mT,
/// ν = g·µ_B·B/h.
pub fn mt2mhz(field_mt: f64, g: f64) -> f64 {
    g * BOHR_MAGNETON * field_mt * 1e-3 / PLANCK * 1e-6
}

/// Resonance field [mT] at an electron frequency given in MHz.
pub fn mhz2mt(freq_mhz: f64, g: f64) -> f64 {
    freq_mhz * 1e6 * PLANCK / (g * BOHR_MAGNETON) * 1e3
}

#[cfg(test)]
mod tests {
    use super::*;
    use epr_types::constants::G_ELECTRON;

    #[test]
    fn test_proton_g_factor() {
        // Proton nuclear g-factor, CODATA value 5.5856946893.
        let gn = gyro2gn(42.57747876);
        assert!(
            (gn - 5.585694680337019).abs() < 1e-6,
            "proton g-factor off: {gn}"
        );
    }

    #[test]
    fn test_gyro_gn_inverse() {
        for gyro in [-32.434099669, 0.0, 1.378927125, 42.57747876] {
            let back = gn2gyro(gyro2gn(gyro));
            assert!((back - gyro).abs() < 1e-12, "roundtrip failed at {gyro}");
        }
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(gyro2gn(0.0), 0.0);
        assert_eq!(gn2gyro(0.0), 0.0);
    }

    #[test]
    fn test_x_band_resonance() {
        // Free electron at 350 mT sits near 9.8 GHz (X-band).
        let freq = mt2mhz(350.0, G_ELECTRON);
        assert!(
            (9700.0..9900.0).contains(&freq),
            "expected X-band, got {freq} MHz"
        );
        let field = mhz2mt(freq, G_ELECTRON);
        assert!((field - 350.0).abs() < 1e-9);
    }
}
